//! Handler für Overlays, scrollbare Panels und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::{Menu, ScrollPanel};

/// Schaltet ein Menü um (entprellt).
pub fn toggle(state: &mut AppState, menu: Menu, time: f64) {
    use_cases::menus::toggle(state, menu, time);
}

/// Öffnet ein Menü direkt.
pub fn open(state: &mut AppState, menu: Menu) {
    use_cases::menus::open(state, menu);
}

/// Schließt alle Menüs.
pub fn close_all(state: &mut AppState) {
    use_cases::menus::close_all(state);
}

/// Scrollt ein Panel.
pub fn scroll(state: &mut AppState, panel: ScrollPanel, delta: f32) {
    use_cases::menus::scroll(state, panel, delta);
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}
