mod common;

use approx::assert_relative_eq;
use asteroid_map_viewer::app::use_cases::screenshot;
use asteroid_map_viewer::shared::{InputFrame, Menu, MenuItem};
use asteroid_map_viewer::source::FileSeedSource;
use asteroid_map_viewer::{AppCommand, AppController, AppIntent, AppState, InteractionState};
use common::{fixture_path, loaded_state, loaded_state_with, offline_renderer};
use glam::Vec2;

#[test]
fn test_bundle_load_fits_asteroid_into_window() {
    let mut controller = AppController::new();
    let state = loaded_state(&mut controller);

    let camera = state.view.camera;
    assert_relative_eq!(camera.zoom, 3.2, epsilon = 1e-5);
    assert_relative_eq!(camera.offset.x, 0.0, epsilon = 1e-3);
    assert_relative_eq!(camera.offset.y, 80.0, epsilon = 1e-3);
    assert_eq!(state.session.asteroid_ids, vec!["SNDST-A", "MOO-B"]);
}

#[test]
fn test_seed_request_reads_file_source() {
    let mut controller =
        AppController::with_seed_source(Box::new(FileSeedSource::new(fixture_path())));
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SeedRequested {
                coord: "SNDST-A-7-0-0-0".into(),
                asteroid: Some("moo-b".into()),
            },
        )
        .expect("Seed lädt");

    let current = state.session.current.as_ref().expect("Asteroid geladen");
    assert_eq!(current.id, "MOO-B");
    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::FetchSeed { .. })
    ));
}

#[test]
fn test_unknown_asteroid_reports_listing_and_keeps_empty_state() {
    let mut controller =
        AppController::with_seed_source(Box::new(FileSeedSource::new(fixture_path())));
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::SeedRequested {
            coord: "SNDST-A-7-0-0-0".into(),
            asteroid: Some("NOPE".into()),
        },
    );

    assert!(result.is_err());
    assert!(!state.has_asteroid());
    let status = state.session.status_text().expect("Fehler sichtbar");
    assert!(status.contains("SNDST-A"));
    assert!(status.contains("MOO-B"));
}

#[test]
fn test_background_fetch_failure_is_shown_as_status() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SeedFailed {
                message: "HTTP 503".into(),
            },
        )
        .expect("Fehleranzeige");

    assert_eq!(state.session.status_text(), Some("HTTP 503"));
}

fn frame(time: f64, pointer: Vec2) -> InputFrame {
    InputFrame {
        pointer: Some(pointer),
        ..InputFrame::idle(time, Vec2::new(640.0, 480.0))
    }
}

fn click(
    controller: &mut AppController,
    interaction: &mut InteractionState,
    state: &mut AppState,
    p: Vec2,
    time: f64,
) {
    let press = InputFrame {
        primary_down: true,
        primary_pressed: true,
        ..frame(time, p)
    };
    let release = InputFrame {
        primary_released: true,
        ..frame(time + 0.01, p)
    };
    for input in [press, release] {
        for intent in interaction.update(state, &input) {
            controller.handle_intent(state, intent).expect("Intent");
        }
    }
}

#[test]
fn test_click_on_feature_selects_it_and_pins_info_panel() {
    let mut controller = AppController::new();
    let mut interaction = InteractionState::new();
    let mut state = loaded_state(&mut controller);
    state.view.camera.zoom = 1.0;
    state.view.camera.offset = Vec2::ZERO;

    click(&mut controller, &mut interaction, &mut state, Vec2::new(20.0, 40.0), 1.0);

    assert!(state.view.info.shown);
    assert!(state.view.info.pinned);
    assert!(state.view.info.text.contains("x 10, y 20"));
}

#[test]
fn test_click_beside_feature_without_icon_misses() {
    let mut controller = AppController::new();
    let mut interaction = InteractionState::new();
    let mut state = loaded_state(&mut controller);
    state.view.camera.zoom = 1.0;
    state.view.camera.offset = Vec2::ZERO;

    click(&mut controller, &mut interaction, &mut state, Vec2::new(35.0, 40.0), 1.0);

    assert!(!state.view.info.shown);
}

#[test]
fn test_drag_pans_and_suppresses_click() {
    let mut controller = AppController::new();
    let mut interaction = InteractionState::new();
    let mut state = loaded_state(&mut controller);
    state.view.camera.zoom = 4.0;
    state.view.camera.offset = Vec2::new(-100.0, 0.0);

    let start = Vec2::new(300.0, 300.0);
    let frames = [
        InputFrame {
            primary_down: true,
            primary_pressed: true,
            ..frame(1.0, start)
        },
        InputFrame {
            primary_down: true,
            ..frame(1.02, start + Vec2::new(-30.0, 0.0))
        },
        InputFrame {
            primary_released: true,
            ..frame(1.04, start + Vec2::new(-30.0, 0.0))
        },
    ];
    for input in frames {
        for intent in interaction.update(&state, &input) {
            assert!(!matches!(intent, AppIntent::FeatureClicked { .. } | AppIntent::MapClickedEmpty));
            controller.handle_intent(&mut state, intent).expect("Intent");
        }
    }

    assert_relative_eq!(state.view.camera.offset.x, -130.0, epsilon = 1e-3);
}

#[test]
fn test_menu_toggle_is_debounced() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let toggle = |time| AppIntent::MenuToggleRequested {
        menu: Menu::Options,
        time,
    };

    controller.handle_intent(&mut state, toggle(1.0)).expect("toggle");
    assert_eq!(state.view.menu, Menu::Options);

    controller.handle_intent(&mut state, toggle(1.1)).expect("toggle");
    assert_eq!(state.view.menu, Menu::Options, "zweiter Klick nach 100 ms wird verworfen");

    controller.handle_intent(&mut state, toggle(1.3)).expect("toggle");
    assert_eq!(state.view.menu, Menu::None);
}

#[test]
fn test_asteroid_menu_switches_and_resets_selection() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    controller
        .handle_intent(&mut state, AppIntent::BiomeLegendClicked { position: Some(0) })
        .expect("Biom wählen");
    assert_eq!(state.view.selection.biome, Some(0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::MenuItemActivated {
                item: MenuItem::Asteroid(1),
            },
        )
        .expect("Wechsel");

    assert_eq!(state.session.current.as_ref().map(|a| a.id.as_str()), Some("MOO-B"));
    assert_eq!(state.view.selection.biome, None);
    assert_eq!(state.view.menu, Menu::None);
}

#[test]
fn test_screenshot_has_quality_size_and_restores_view() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let mut renderer = offline_renderer(&state.options);
    controller
        .handle_intent(
            &mut state,
            AppIntent::MenuItemActivated {
                item: MenuItem::Quality(1),
            },
        )
        .expect("Qualität 2x");
    let camera = state.view.camera;
    let viewport = state.view.viewport_size;
    let ui_scale = state.view.ui_scale;

    let image = screenshot::capture(&mut state, &mut renderer).expect("Screenshot");

    assert_eq!(image.dimensions(), (400, 200));
    assert_eq!(state.view.camera, camera);
    assert_eq!(state.view.viewport_size, viewport);
    assert_eq!(state.view.ui_scale, ui_scale);
    assert!(!state.view.screenshot_mode);
}

#[test]
fn test_screenshot_pipeline_writes_bmp_after_two_ticks() {
    let dir = tempfile::tempdir().expect("tempdir");
    let options = asteroid_map_viewer::ViewerOptions {
        screenshot_dir: dir.path().display().to_string(),
        ..Default::default()
    };
    let mut controller = AppController::new();
    let mut state = loaded_state_with(&mut controller, options);
    let mut renderer = offline_renderer(&state.options);

    controller
        .handle_intent(&mut state, AppIntent::ScreenshotRequested)
        .expect("Anfrage");
    controller.tick(&mut state, &mut renderer, 10.0);
    assert_eq!(std::fs::read_dir(dir.path()).expect("dir").count(), 0);
    controller.tick(&mut state, &mut renderer, 10.1);

    let files: Vec<_> = std::fs::read_dir(dir.path())
        .expect("dir")
        .filter_map(Result::ok)
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].file_name().to_string_lossy().ends_with(".bmp"));
    assert!(state.session.status_text().is_some_and(|s| s.starts_with("Saved ")));

    // Statuszeile läuft nach vier Sekunden ab.
    controller.tick(&mut state, &mut renderer, 14.2);
    assert_eq!(state.session.status_text(), None);
}
