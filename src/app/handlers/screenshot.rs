//! Handler für die Screenshot-Einstellungen und -Anforderung.

use crate::app::use_cases;
use crate::app::AppState;

/// Wählt die Screenshot-Qualität.
pub fn set_quality(state: &mut AppState, index: usize) {
    use_cases::screenshot::set_quality(state, index);
}

/// Schaltet Graustufen um.
pub fn toggle_bw(state: &mut AppState) {
    use_cases::screenshot::toggle_bw(state);
}

/// Merkt einen Screenshot vor.
pub fn request(state: &mut AppState) {
    if !use_cases::screenshot::request(state) {
        log::debug!("Screenshot-Anforderung ignoriert");
    }
}
