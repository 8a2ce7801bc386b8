//! Use-Case-Funktionen für Hit-Test und Selektion.

use glam::Vec2;

use crate::app::AppState;
use crate::core::{Feature, FeatureKind, LoadedAsteroid, ScreenRect};
use crate::shared::{feature_icon_rect, feature_icon_scale, InfoPanel};

/// Bildschirm-Rechteck des Icons von Feature `feature` beim aktuellen Zoom.
pub fn feature_rect(state: &AppState, feature: usize) -> Option<ScreenRect> {
    let asteroid = state.session.current.as_ref()?;
    let f = asteroid.features.get(feature)?;
    let center = state.view.camera.world_to_screen(f.pos.as_vec2());
    let scale = feature_icon_scale(state.view.camera.zoom, state.view.ui_scale, &state.options);
    Some(feature_icon_rect(
        center,
        state.session.icon_size(&f.icon_key),
        scale,
    ))
}

/// Erstes Feature (Geysire vor POIs), dessen Icon-Rechteck den Punkt enthält.
pub fn hit_test(state: &AppState, screen: Vec2) -> Option<usize> {
    let asteroid = state.session.current.as_ref()?;
    (0..asteroid.features.len())
        .find(|&i| feature_rect(state, i).is_some_and(|rect| rect.contains(screen)))
}

/// Wählt ein Feature auf der Karte: zentriert es, heftet das Info-Panel an.
pub fn select_feature(state: &mut AppState, feature: usize) {
    let Some(asteroid) = state.session.current.clone() else {
        return;
    };
    let Some(f) = asteroid.features.get(feature) else {
        log::warn!("Feature {} existiert nicht", feature);
        return;
    };
    let center = state.view.camera.world_to_screen(f.pos.as_vec2());
    super::camera::center_on(state, center);

    let index = asteroid.feature_indices.get(feature).copied().unwrap_or(0);
    state.view.info = InfoPanel {
        shown: true,
        pinned: true,
        text: info_text(&asteroid, f, index),
        icon_key: f.icon_key.clone(),
    };
    log::debug!("Feature {} ({}) gewählt", feature, f.display_name);
    state.request_redraw();
}

/// Text des Info-Panels: Name, Art und Index, Position, Biom.
pub fn info_text(asteroid: &LoadedAsteroid, feature: &Feature, index: usize) -> String {
    let kind = match feature.kind {
        FeatureKind::Geyser => "Geyser",
        FeatureKind::Poi => "Point of interest",
    };
    let biome = asteroid
        .biome_at(feature.pos.as_vec2() + Vec2::splat(0.5))
        .unwrap_or("Space");
    format!(
        "{}\n{} #{}\nx {}, y {}\nBiome: {}",
        feature.display_name, kind, index, feature.pos.x, feature.pos.y, biome
    )
}

/// Setzt die Biom-Selektion (None = „Clear“). Ungültige Positionen leeren sie.
pub fn set_biome_selection(state: &mut AppState, position: Option<usize>) {
    let len = state
        .session
        .current
        .as_ref()
        .map_or(0, |a| a.biome_legend.len());
    state.view.selection.biome = position.filter(|&p| p < len);
    state.request_redraw();
}

/// Setzt die Feature-Selektion (None = „Clear“). Ungültige Indizes leeren sie.
pub fn set_feature_selection(state: &mut AppState, index: Option<usize>) {
    let len = state
        .session
        .current
        .as_ref()
        .map_or(0, |a| a.feature_legend.len());
    state.view.selection.feature = index.filter(|&i| i >= 1 && i <= len);
    state.request_redraw();
}

/// Löst und verbirgt das Info-Panel.
pub fn dismiss_info(state: &mut AppState) {
    state.view.info.hide();
    state.request_redraw();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::session::load_bundle;
    use crate::app::use_cases::test_support::bundle_100x50;

    /// Zoom 1, Kamera im Ursprung, kein Icon geladen.
    fn unit_state() -> AppState {
        let mut state = AppState::new();
        load_bundle(&mut state, "SEED".into(), bundle_100x50(), None).expect("lädt");
        state.view.viewport_size = Vec2::new(640.0, 480.0);
        state.view.camera.zoom = 1.0;
        state.view.camera.offset = Vec2::ZERO;
        state
    }

    #[test]
    fn hit_test_uses_ten_pixel_fallback() {
        let state = unit_state();
        // Geysir (10, 20) liegt bei Zoom 1 auf (20, 40)
        assert_eq!(hit_test(&state, Vec2::new(29.0, 40.0)), Some(0));
        assert_eq!(hit_test(&state, Vec2::new(35.0, 40.0)), None);
    }

    #[test]
    fn hit_test_uses_loaded_icon_size() {
        let mut state = unit_state();
        // 160 px * 0.25 Grundskalierung = 40 px Kantenlänge
        state.session.icon_sizes.insert("hot_steam".into(), [160, 160]);
        assert_eq!(hit_test(&state, Vec2::new(35.0, 40.0)), Some(0));
    }

    #[test]
    fn selecting_feature_centers_it_and_pins_info() {
        let mut state = unit_state();
        state.view.camera.zoom = 4.0;

        select_feature(&mut state, 2);

        let rect = feature_rect(&state, 2).expect("Rechteck");
        assert!((rect.center() - Vec2::new(320.0, 240.0)).length() < 1e-3);
        assert_eq!(hit_test(&state, rect.center()), Some(2));
        assert!(state.view.info.pinned && state.view.info.shown);
        assert!(state.view.info.text.starts_with("Printing Pod"));
        assert_eq!(state.view.info.icon_key, "headquarters");
    }

    #[test]
    fn legend_selection_validates_and_clears() {
        let mut state = unit_state();

        set_feature_selection(&mut state, Some(2));
        assert_eq!(state.view.selection.feature, Some(2));
        set_feature_selection(&mut state, Some(9));
        assert_eq!(state.view.selection.feature, None);

        set_biome_selection(&mut state, Some(1));
        assert_eq!(state.view.selection.biome, Some(1));
        set_biome_selection(&mut state, None);
        assert!(state.view.selection.is_empty());
    }
}
