use glam::Vec2;

use crate::app::{AppCommand, AppIntent, AppState};
use crate::shared::{Menu, MenuItem};

use super::map_intent_to_commands;

#[test]
fn zoom_in_requested_zooms_about_viewport_center() {
    let mut state = AppState::new();
    state.view.viewport_size = Vec2::new(640.0, 480.0);

    let commands = map_intent_to_commands(&state, AppIntent::ZoomInRequested);

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::ZoomCameraAbout { screen, factor } => {
            assert_eq!(screen, Vec2::new(320.0, 240.0));
            assert_eq!(factor, state.options.wheel_zoom_factor);
        }
        ref other => panic!("unerwarteter Command: {other:?}"),
    }
}

#[test]
fn capture_item_closes_menus_before_requesting_screenshot() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MenuItemActivated {
            item: MenuItem::Capture,
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(commands[0], AppCommand::CloseMenus));
    assert!(matches!(commands[1], AppCommand::RequestScreenshot));
}

#[test]
fn escape_closes_menu_first_then_info_panel() {
    let mut state = AppState::new();
    state.view.menu = Menu::Options;
    state.view.info.shown = true;

    let commands = map_intent_to_commands(&state, AppIntent::EscapePressed);
    assert!(matches!(commands.as_slice(), [AppCommand::CloseMenus]));

    state.view.menu = Menu::None;
    let commands = map_intent_to_commands(&state, AppIntent::EscapePressed);
    assert!(matches!(commands.as_slice(), [AppCommand::DismissInfoPanel]));

    state.view.info.shown = false;
    assert!(map_intent_to_commands(&state, AppIntent::EscapePressed).is_empty());
}

#[test]
fn ui_scale_steps_are_clamped() {
    let mut state = AppState::new();
    state.view.ui_scale = 3.9;

    let commands = map_intent_to_commands(
        &state,
        AppIntent::MenuItemActivated {
            item: MenuItem::UiScaleUp,
        },
    );

    assert!(matches!(commands[0], AppCommand::SetUiScale { scale } if scale == 4.0));
}

#[test]
fn empty_map_click_without_info_panel_maps_to_nothing() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::MapClickedEmpty).is_empty());
}
