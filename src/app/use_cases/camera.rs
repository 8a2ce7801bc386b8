//! Use-Case-Funktionen für Kamera-Steuerung.
//!
//! Alle Funktionen sind No-ops, solange kein Asteroid geladen ist.

use glam::Vec2;

use crate::app::AppState;

/// Verschiebt die Kamera um ein Bildschirm-Delta und begrenzt sie.
pub fn pan(state: &mut AppState, delta: Vec2) {
    if !state.has_asteroid() {
        return;
    }
    let world_size = state.world_size();
    state
        .view
        .camera
        .pan(delta, state.view.viewport_size, world_size);
}

/// Zoomt um `factor`, der Welt-Punkt unter `screen` bleibt stehen.
pub fn zoom_about(state: &mut AppState, screen: Vec2, factor: f32) {
    if !state.has_asteroid() {
        return;
    }
    let world_size = state.world_size();
    state
        .view
        .camera
        .zoom_about(screen, factor, state.view.viewport_size, world_size);
}

/// Passt den Asteroiden ins Fenster ein.
pub fn fit(state: &mut AppState) {
    if !state.has_asteroid() {
        return;
    }
    let world_size = state.world_size();
    state.view.camera.fit(state.view.viewport_size, world_size);
}

/// Rückt einen Bildschirmpunkt in die Fenstermitte.
pub fn center_on(state: &mut AppState, screen: Vec2) {
    if !state.has_asteroid() {
        return;
    }
    let world_size = state.world_size();
    state
        .view
        .camera
        .center_on(screen, state.view.viewport_size, world_size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::session::load_bundle;
    use crate::app::use_cases::test_support::bundle_100x50;
    use approx::assert_relative_eq;

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        state.view.viewport_size = Vec2::new(640.0, 480.0);
        load_bundle(&mut state, "SEED".into(), bundle_100x50(), None).expect("Bundle lädt");
        state
    }

    #[test]
    fn camera_ops_without_asteroid_are_noops() {
        let mut state = AppState::new();
        let before = state.view.camera;

        pan(&mut state, Vec2::new(10.0, 10.0));
        zoom_about(&mut state, Vec2::ZERO, 2.0);
        fit(&mut state);

        assert_eq!(state.view.camera, before);
    }

    #[test]
    fn zoom_about_keeps_anchor_world_point() {
        let mut state = loaded_state();
        let anchor = Vec2::new(200.0, 150.0);
        let before = state.view.camera.screen_to_world(anchor);

        zoom_about(&mut state, anchor, 1.5);

        let after = state.view.camera.screen_to_world(anchor);
        assert!((before - after).length() < 1.0);
        assert_relative_eq!(state.view.camera.zoom, 3.2 * 1.5, epsilon = 1e-4);
    }

    #[test]
    fn fit_matches_reference_numbers() {
        let mut state = loaded_state();
        pan(&mut state, Vec2::new(-50.0, 30.0));

        fit(&mut state);

        assert_relative_eq!(state.view.camera.zoom, 3.2, epsilon = 1e-5);
        assert_relative_eq!(state.view.camera.offset.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(state.view.camera.offset.y, 80.0, epsilon = 1e-4);
    }
}
