//! Handler für Feature- und Legenden-Selektion.

use crate::app::use_cases;
use crate::app::AppState;

/// Wählt ein Feature auf der Karte.
pub fn select_feature(state: &mut AppState, feature: usize) {
    use_cases::selection::select_feature(state, feature);
}

/// Setzt die Biom-Selektion.
pub fn set_biome(state: &mut AppState, position: Option<usize>) {
    use_cases::selection::set_biome_selection(state, position);
}

/// Setzt die Feature-Selektion.
pub fn set_feature(state: &mut AppState, index: Option<usize>) {
    use_cases::selection::set_feature_selection(state, index);
}

/// Löst und verbirgt das Info-Panel.
pub fn dismiss_info(state: &mut AppState) {
    use_cases::selection::dismiss_info(state);
}
