//! Use-Case-Funktionen für den Ladeablauf einer Sitzung.
//!
//! Ablauf: Bytes holen → Bundle dekodieren → Asteroid wählen →
//! Zustand ersetzen → Einpassen vormerken → Assets anfordern.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::app::AppState;
use crate::core::{Camera2D, LoadedAsteroid, SeedBundle};
use crate::shared::asset_key::{SPACE_TEXTURE, UI_ICONS};
use crate::shared::{AssetKey, InfoPanel, ScrollOffsets, Selection};
use crate::source::{decode_bundle, SeedSource, SessionError};

/// Holt und dekodiert ein Bundle und lädt den gewünschten Asteroiden.
pub fn fetch_and_load(
    state: &mut AppState,
    source: &dyn SeedSource,
    coord: String,
    asteroid: Option<&str>,
) -> Result<(), SessionError> {
    let bytes = source.fetch(&coord)?;
    log::info!("Seed {} abgerufen: {} Bytes", coord, bytes.len());
    let bundle = decode_bundle(&bytes)?;
    load_bundle(state, coord, Arc::new(bundle), asteroid)
}

/// Übernimmt ein Bundle und lädt den gewünschten (oder ersten) Asteroiden.
///
/// Bei einem Fehler bleibt der bisherige Zustand unverändert.
pub fn load_bundle(
    state: &mut AppState,
    coord: String,
    bundle: Arc<SeedBundle>,
    asteroid: Option<&str>,
) -> Result<(), SessionError> {
    let index = select_asteroid(&bundle, asteroid)?;
    state.session.coord = coord;
    state.session.asteroid_ids = bundle.asteroids.iter().map(|a| a.id.clone()).collect();
    state.session.bundle = Some(bundle);
    load_asteroid(state, index)
}

/// Wählt einen Asteroiden: gesuchte ID ohne Groß-/Kleinschreibung, sonst Index 0.
pub fn select_asteroid(bundle: &SeedBundle, requested: Option<&str>) -> Result<usize, SessionError> {
    if bundle.asteroids.is_empty() {
        return Err(SessionError::EmptyBundle);
    }
    match requested {
        None => Ok(0),
        Some(id) => bundle
            .find(id)
            .ok_or_else(|| SessionError::AsteroidNotFound {
                requested: id.to_string(),
                listing: bundle.id_listing(),
            }),
    }
}

/// Wechselt zu einem anderen Asteroiden des geladenen Bundles.
pub fn switch_asteroid(state: &mut AppState, index: usize) -> Result<(), SessionError> {
    let bundle = state.session.bundle.as_ref().ok_or(SessionError::EmptyBundle)?;
    if index >= bundle.asteroids.len() {
        return Err(SessionError::AsteroidNotFound {
            requested: format!("#{index}"),
            listing: bundle.id_listing(),
        });
    }
    if state.session.current_index == Some(index) {
        return Ok(());
    }
    load_asteroid(state, index)
}

fn load_asteroid(state: &mut AppState, index: usize) -> Result<(), SessionError> {
    let bundle = state.session.bundle.clone().ok_or(SessionError::EmptyBundle)?;
    let asteroid = bundle.asteroids.get(index).ok_or(SessionError::EmptyBundle)?;
    let loaded = LoadedAsteroid::from_asteroid(asteroid);

    log::info!(
        "Asteroid {} geladen: {}x{}, {} Biom-Regionen, {} Features, {} Legenden-Einträge",
        loaded.id,
        loaded.size.x,
        loaded.size.y,
        loaded.regions.len(),
        loaded.features.len(),
        loaded.feature_legend.len()
    );

    state.session.pending_assets = required_assets(&loaded);
    state.session.current = Some(Arc::new(loaded));
    state.session.current_index = Some(index);
    state.session.status = None;

    state.view.invalidate_legends();
    state.view.selection = Selection::default();
    state.view.scroll = ScrollOffsets::default();
    state.view.info = InfoPanel::default();
    state.view.camera = Camera2D::with_max_zoom(state.options.max_zoom);
    state.view.fit_on_load = true;
    super::viewport::apply_pending_fit(state);
    state.request_redraw();
    Ok(())
}

/// Assets eines Asteroiden: die vier UI-Icons, ein Icon pro Feature-Schlüssel,
/// die Weltraum-Textur und eine Textur pro Biom.
pub fn required_assets(asteroid: &LoadedAsteroid) -> Vec<AssetKey> {
    let icons: BTreeSet<&str> = asteroid
        .features
        .iter()
        .map(|f| f.icon_key.as_str())
        .collect();
    UI_ICONS
        .iter()
        .map(|key| AssetKey::icon(*key))
        .chain(icons.into_iter().map(AssetKey::icon))
        .chain(std::iter::once(AssetKey::texture(SPACE_TEXTURE)))
        .chain(asteroid.biome_legend.names().iter().map(|n| AssetKey::texture(n)))
        .collect()
}

/// Zeigt einen Ladefehler an: zentriert als Status, solange nichts geladen ist,
/// sonst im Info-Panel.
pub fn report_error(state: &mut AppState, error: &SessionError) {
    report_message(state, error.to_string());
}

/// Wie `report_error`, mit fertigem Text.
pub fn report_message(state: &mut AppState, text: String) {
    if state.has_asteroid() {
        state.view.info = InfoPanel {
            shown: true,
            pinned: false,
            text,
            icon_key: String::new(),
        };
    } else {
        state.session.status = Some(crate::app::StatusLine { text, until: None });
    }
    state.request_redraw();
}

/// Übernimmt die Pixelgrößen geladener Icons.
pub fn record_icon_sizes(state: &mut AppState, icons: Vec<(String, [u32; 2])>) {
    if icons.is_empty() {
        return;
    }
    state.session.icon_sizes.extend(icons);
    state.request_redraw();
}
