//! Handler für Seed-Abruf und Asteroiden-Wechsel.
//!
//! Fehler werden zuerst sichtbar gemacht (Status oder Info-Panel) und dann
//! an den Controller weitergereicht, der sie loggt.

use std::sync::Arc;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SeedBundle;
use crate::source::{SeedSource, SessionError};

fn reported<T>(state: &mut AppState, result: Result<T, SessionError>) -> anyhow::Result<T> {
    result.map_err(|e| {
        use_cases::session::report_error(state, &e);
        anyhow::Error::new(e)
    })
}

/// Holt ein Bundle über die Seed-Quelle und lädt den gewünschten Asteroiden.
pub fn fetch(
    state: &mut AppState,
    source: Option<&dyn SeedSource>,
    coord: String,
    asteroid: Option<String>,
) -> anyhow::Result<()> {
    let result = match source {
        Some(source) => {
            use_cases::session::fetch_and_load(state, source, coord, asteroid.as_deref())
        }
        None => Err(SessionError::NoSource),
    };
    reported(state, result)
}

/// Übernimmt ein bereits dekodiertes Bundle.
pub fn load_bundle(
    state: &mut AppState,
    coord: String,
    bundle: Arc<SeedBundle>,
    asteroid: Option<String>,
) -> anyhow::Result<()> {
    let result = use_cases::session::load_bundle(state, coord, bundle, asteroid.as_deref());
    reported(state, result)
}

/// Zeigt einen außerhalb des Controllers aufgetretenen Ladefehler an.
pub fn report_failure(state: &mut AppState, message: String) {
    log::error!("Seed konnte nicht geladen werden: {}", message);
    use_cases::session::report_message(state, message);
}

/// Wechselt den Asteroiden innerhalb des Bundles.
pub fn switch_asteroid(state: &mut AppState, index: usize) -> anyhow::Result<()> {
    let result = use_cases::session::switch_asteroid(state, index);
    reported(state, result)
}

/// Übernimmt Pixelgrößen geladener Icons.
pub fn record_icon_sizes(state: &mut AppState, icons: Vec<(String, [u32; 2])>) {
    use_cases::session::record_icon_sizes(state, icons);
}
