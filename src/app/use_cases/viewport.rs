//! Use-Case-Funktionen für Viewport-Zustand.

use glam::Vec2;

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe; die Kamera hält die Fenstermitte.
///
/// Steht noch ein Einpassen nach dem Laden aus, wird es hier ausgeführt,
/// sobald die Fenstergröße bekannt ist.
pub fn resize(state: &mut AppState, size: Vec2) {
    let old = state.view.viewport_size;
    if old == size {
        return;
    }
    state.view.viewport_size = size;
    log::debug!("Viewport {}x{} -> {}x{}", old.x, old.y, size.x, size.y);

    if state.has_asteroid() && !apply_pending_fit(state) {
        let world_size = state.world_size();
        state.view.camera.resize(old, size, world_size);
    }
    super::menus::clamp_scroll(state);
    state.request_redraw();
}

/// Führt ein ausstehendes Einpassen aus. Gibt `true` zurück, wenn eingepasst wurde.
pub fn apply_pending_fit(state: &mut AppState) -> bool {
    let size = state.view.viewport_size;
    if !state.view.fit_on_load || !state.has_asteroid() || size.x <= 0.0 || size.y <= 0.0 {
        return false;
    }
    super::camera::fit(state);
    state.view.fit_on_load = false;
    true
}
