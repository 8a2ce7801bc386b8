//! Use-Case-Funktionen für Anzeige-Schalter und UI-Skalierung.

use crate::app::AppState;
use crate::shared::options::{UI_SCALE_MAX, UI_SCALE_MIN};
use crate::shared::DisplayToggle;

/// Schaltet einen Anzeige-Schalter um.
pub fn toggle(state: &mut AppState, toggle: DisplayToggle) {
    state.view.display.toggle(toggle);
    let enabled = state.view.display.get(toggle);
    log::info!("{}: {}", toggle.label(), if enabled { "an" } else { "aus" });

    match toggle {
        DisplayToggle::Legends => {
            state.view.invalidate_legends();
            super::menus::clamp_scroll(state);
        }
        DisplayToggle::Numbers => super::menus::clamp_scroll(state),
        DisplayToggle::Vsync => {
            log::info!("VSync-Änderung wirkt ab dem nächsten Start");
        }
        DisplayToggle::Textures | DisplayToggle::PowerSaver | DisplayToggle::LinearFilter => {}
    }
    state.request_redraw();
}

/// Setzt die UI-Skalierung (begrenzt) und verwirft gecachte Legenden.
pub fn set_ui_scale(state: &mut AppState, scale: f32) {
    if !scale.is_finite() {
        return;
    }
    let scale = scale.clamp(UI_SCALE_MIN, UI_SCALE_MAX);
    if (scale - state.view.ui_scale).abs() < f32::EPSILON {
        return;
    }
    state.view.ui_scale = scale;
    state.view.invalidate_legends();
    super::menus::clamp_scroll(state);
    state.request_redraw();
}
