//! Handler für Kamera, Viewport und Anzeige-Schalter.

use glam::Vec2;

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::DisplayToggle;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: Vec2) {
    use_cases::viewport::resize(state, size);
}

/// Verschiebt die Kamera um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, delta: Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt um einen Bildschirmpunkt.
pub fn zoom_about(state: &mut AppState, screen: Vec2, factor: f32) {
    use_cases::camera::zoom_about(state, screen, factor);
}

/// Passt den Asteroiden ins Fenster ein.
pub fn fit(state: &mut AppState) {
    use_cases::camera::fit(state);
}

/// Schaltet einen Anzeige-Schalter um.
pub fn toggle_display(state: &mut AppState, toggle: DisplayToggle) {
    use_cases::display::toggle(state, toggle);
}

/// Setzt die UI-Skalierung.
pub fn set_ui_scale(state: &mut AppState, scale: f32) {
    use_cases::display::set_ui_scale(state, scale);
}

/// Merkt einen Redraw für den nächsten Frame vor.
pub fn request_redraw(state: &mut AppState) {
    state.request_redraw();
}
