use glam::Vec2;

use super::*;
use crate::app::use_cases::{session, viewport};
use crate::app::use_cases::test_support::bundle_100x50;
use crate::shared::{InputFrame, Key, TouchPoint, UiLayout};

const VIEWPORT: Vec2 = Vec2::new(640.0, 480.0);
/// Geysir 1 (40, 20) bei Fit-Zoom 3.2 und Offset (0, 80)
const GEYSER_1: Vec2 = Vec2::new(256.0, 208.0);

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    session::load_bundle(&mut state, "SEED".into(), bundle_100x50(), None).expect("lädt");
    viewport::resize(&mut state, VIEWPORT);
    state
}

fn frame(time: f64) -> InputFrame {
    InputFrame::idle(time, VIEWPORT)
}

fn click_frame(time: f64, p: Vec2) -> InputFrame {
    InputFrame {
        pointer: Some(p),
        primary_down: true,
        primary_pressed: true,
        primary_released: true,
        ..frame(time)
    }
}

fn touch_frame(time: f64, points: &[(u64, Vec2)]) -> InputFrame {
    InputFrame {
        touches: points
            .iter()
            .map(|&(id, pos)| TouchPoint { id, pos })
            .collect(),
        ..frame(time)
    }
}

#[test]
fn click_on_feature_selects_it() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();

    let events = interaction.update(&state, &click_frame(1.0, GEYSER_1));

    assert!(matches!(events.as_slice(), [AppIntent::FeatureClicked { feature: 1 }]));
}

#[test]
fn drag_pans_and_suppresses_click() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();
    let start = Vec2::new(300.0, 300.0);
    let end = Vec2::new(310.0, 300.0);

    interaction.update(
        &state,
        &InputFrame {
            pointer: Some(start),
            primary_down: true,
            primary_pressed: true,
            ..frame(1.0)
        },
    );
    let moved = interaction.update(
        &state,
        &InputFrame {
            pointer: Some(end),
            primary_down: true,
            ..frame(1.1)
        },
    );
    let released = interaction.update(
        &state,
        &InputFrame {
            pointer: Some(end),
            primary_released: true,
            ..frame(1.2)
        },
    );

    assert!(matches!(
        moved.as_slice(),
        [AppIntent::CameraPan { delta }] if *delta == Vec2::new(10.0, 0.0)
    ));
    assert!(released.is_empty());
}

#[test]
fn wheel_over_legend_scrolls_instead_of_zooming() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();
    let legend = UiLayout::new(VIEWPORT, 1.0, state.options.font_size).biome_legend(3);

    let events = interaction.update(
        &state,
        &InputFrame {
            pointer: Some(legend.center()),
            wheel: 1.0,
            ..frame(1.0)
        },
    );

    assert!(matches!(
        events.as_slice(),
        [AppIntent::PanelScrolled {
            panel: ScrollPanel::BiomeLegend,
            delta,
        }] if *delta < 0.0
    ));
}

#[test]
fn wheel_on_map_zooms_about_pointer() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();
    let pointer = Vec2::new(400.0, 300.0);

    let events = interaction.update(
        &state,
        &InputFrame {
            pointer: Some(pointer),
            wheel: -1.0,
            ..frame(1.0)
        },
    );

    match events.as_slice() {
        [AppIntent::CameraZoom { screen, factor }] => {
            assert_eq!(*screen, pointer);
            assert!((factor - 1.0 / 1.1).abs() < 1e-6);
        }
        other => panic!("unerwartete Intents: {other:?}"),
    }
}

#[test]
fn wheel_is_throttled_when_configured() {
    let mut state = loaded_state();
    state.options.wheel_throttle_ms = 75;
    let mut interaction = InteractionState::new();
    let wheel = |time| InputFrame {
        pointer: Some(Vec2::new(400.0, 300.0)),
        wheel: 1.0,
        ..frame(time)
    };

    assert_eq!(interaction.update(&state, &wheel(1.0)).len(), 1);
    assert!(interaction.update(&state, &wheel(1.05)).is_empty());
    assert_eq!(interaction.update(&state, &wheel(1.1)).len(), 1);
}

#[test]
fn tap_selects_feature_on_release() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();

    let down = interaction.update(&state, &touch_frame(1.0, &[(7, GEYSER_1)]));
    let wobble = interaction.update(&state, &touch_frame(1.05, &[(7, GEYSER_1 + Vec2::new(2.0, 0.0))]));
    let up = interaction.update(&state, &touch_frame(1.1, &[]));

    assert!(down.is_empty());
    // unter der Tap-Schwelle wird trotzdem geschwenkt
    assert!(matches!(wobble.as_slice(), [AppIntent::CameraPan { .. }]));
    assert!(matches!(up.as_slice(), [AppIntent::FeatureClicked { feature: 1 }]));
}

#[test]
fn one_finger_drag_pans_without_tap() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();
    let start = Vec2::new(300.0, 300.0);

    interaction.update(&state, &touch_frame(1.0, &[(3, start)]));
    let pan = interaction.update(&state, &touch_frame(1.05, &[(3, start + Vec2::new(12.0, -4.0))]));
    let up = interaction.update(&state, &touch_frame(1.1, &[]));

    match pan.as_slice() {
        [AppIntent::CameraPan { delta }] => assert_eq!(*delta, Vec2::new(12.0, -4.0)),
        other => panic!("unerwartete Intents: {other:?}"),
    }
    assert!(up.is_empty());
}

#[test]
fn touch_on_legend_scrolls_instead_of_panning() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();
    let legend = UiLayout::new(VIEWPORT, 1.0, state.options.font_size).biome_legend(3);
    let start = legend.center();

    interaction.update(&state, &touch_frame(1.0, &[(4, start)]));
    let scroll = interaction.update(&state, &touch_frame(1.05, &[(4, start - Vec2::new(0.0, 8.0))]));
    let up = interaction.update(&state, &touch_frame(1.1, &[]));

    assert!(matches!(
        scroll.as_slice(),
        [AppIntent::PanelScrolled {
            panel: ScrollPanel::BiomeLegend,
            delta,
        }] if *delta == 8.0
    ));
    assert!(!scroll.iter().any(|e| matches!(e, AppIntent::CameraPan { .. })));
    assert!(up.is_empty());
}

#[test]
fn pinch_zooms_about_midpoint_without_tap() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();

    interaction.update(
        &state,
        &touch_frame(1.0, &[(1, Vec2::new(250.0, 240.0)), (2, Vec2::new(350.0, 240.0))]),
    );
    let zoom = interaction.update(
        &state,
        &touch_frame(1.1, &[(1, Vec2::new(200.0, 240.0)), (2, Vec2::new(400.0, 240.0))]),
    );
    let up = interaction.update(&state, &touch_frame(1.2, &[]));

    match zoom.as_slice() {
        [AppIntent::CameraZoom { screen, factor }] => {
            assert_eq!(*screen, Vec2::new(300.0, 240.0));
            assert!((factor - 2.0).abs() < 1e-6);
        }
        other => panic!("unerwartete Intents: {other:?}"),
    }
    assert!(up.is_empty());
}

#[test]
fn tray_click_toggles_its_menu() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();
    let layout = UiLayout::new(VIEWPORT, 1.0, state.options.font_size);

    let events = interaction.update(&state, &click_frame(2.0, layout.tray_icon(1).center()));

    assert!(matches!(
        events.as_slice(),
        [AppIntent::MenuToggleRequested { menu: Menu::Options, time }] if *time == 2.0
    ));
}

#[test]
fn click_outside_open_menu_closes_it_and_reaches_the_map() {
    let mut state = loaded_state();
    state.view.menu = Menu::Options;
    let mut interaction = InteractionState::new();

    let events = interaction.update(&state, &click_frame(1.0, GEYSER_1));

    assert!(matches!(
        events.as_slice(),
        [AppIntent::MenuCloseRequested, AppIntent::FeatureClicked { feature: 1 }]
    ));
}

#[test]
fn geyser_list_accepts_only_close_keys() {
    let mut state = loaded_state();
    state.view.menu = Menu::GeyserList;
    let mut interaction = InteractionState::new();

    let events = interaction.update(
        &state,
        &InputFrame {
            keys: vec![Key::T, Key::Plus, Key::Escape],
            ..frame(1.0)
        },
    );

    assert!(matches!(events.as_slice(), [AppIntent::EscapePressed]));
}

#[test]
fn window_resize_is_reported_first() {
    let state = loaded_state();
    let mut interaction = InteractionState::new();

    let events = interaction.update(
        &state,
        &InputFrame {
            keys: vec![Key::Home],
            ..InputFrame::idle(1.0, Vec2::new(800.0, 600.0))
        },
    );

    assert!(matches!(
        events.as_slice(),
        [AppIntent::ViewportResized { .. }, AppIntent::FitRequested]
    ));
}
