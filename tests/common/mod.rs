//! Gemeinsame Hilfen für die Integrationstests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use asteroid_map_viewer::render::{AssetLoader, AssetSource};
use asteroid_map_viewer::{
    decode_bundle, AppController, AppIntent, AppState, Renderer, SeedBundle, ViewerOptions,
};
use glam::Vec2;

/// Pfad zum JSON-Bundle mit SNDST-A (100×50) und MOO-B (60×60).
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sndst_bundle.json")
}

/// Dekodiertes Fixture-Bundle.
pub fn fixture_bundle() -> Arc<SeedBundle> {
    let bytes = std::fs::read(fixture_path()).expect("Fixture lesbar");
    Arc::new(decode_bundle(&bytes).expect("Fixture dekodierbar"))
}

/// Zustand mit 640×480-Fenster und geladenem SNDST-A.
pub fn loaded_state(controller: &mut AppController) -> AppState {
    loaded_state_with(controller, ViewerOptions::default())
}

/// Wie `loaded_state`, mit eigenen Optionen.
pub fn loaded_state_with(controller: &mut AppController, options: ViewerOptions) -> AppState {
    let mut state = AppState::with_options(options);
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: Vec2::new(640.0, 480.0),
            },
        )
        .expect("Resize");
    controller
        .handle_intent(
            &mut state,
            AppIntent::BundleReceived {
                coord: "SNDST-A-7-0-0-0".into(),
                bundle: fixture_bundle(),
                asteroid: None,
            },
        )
        .expect("Bundle lädt");
    state
}

/// Renderer ohne Asset-Quelle (alle Assets fallen zurück), synchron.
pub fn offline_renderer(options: &ViewerOptions) -> Renderer {
    Renderer::with_loader(options, AssetLoader::blocking(AssetSource::None))
        .expect("Renderer mit eingebauter Schrift")
}
