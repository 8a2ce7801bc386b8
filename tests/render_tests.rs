mod common;

use asteroid_map_viewer::render::AssetEntry;
use asteroid_map_viewer::shared::AssetKey;
use asteroid_map_viewer::{AppController, AppIntent};
use asteroid_raster::Canvas;
use common::{loaded_state, offline_renderer};

fn pixel(canvas: &Canvas, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * canvas.width() + x) * 4) as usize;
    let data = canvas.data();
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

#[test]
fn test_compose_is_deterministic() {
    let mut controller = AppController::new();
    let state = loaded_state(&mut controller);
    let mut renderer = offline_renderer(&state.options);
    let scene = controller.build_render_scene(&state);

    let first = renderer.render(&scene).expect("Frame");
    let second = renderer.render(&scene).expect("Frame");

    assert_eq!((first.width(), first.height()), (640, 480));
    assert_eq!(first.data(), second.data());
}

#[test]
fn test_redraw_flag_is_consumed_once() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    assert!(state.view.take_redraw());
    assert!(!state.view.take_redraw());

    controller
        .handle_intent(&mut state, AppIntent::FitRequested)
        .expect("Fit");
    assert!(state.view.take_redraw());
}

#[test]
fn test_feature_without_icon_draws_legend_colored_swatch() {
    let mut controller = AppController::new();
    let state = loaded_state(&mut controller);
    let mut renderer = offline_renderer(&state.options);
    let scene = controller.build_render_scene(&state);
    let asteroid = state.session.current.as_ref().expect("geladen");
    let color = asteroid.feature_legend.entry(1).expect("Eintrag 1").color;

    let canvas = renderer.render(&scene).expect("Frame");

    // Geysir bei Welt (10,20): Zoom 3.2, Offset (0,80) ergibt (256,208).
    assert_eq!(pixel(&canvas, 256, 208), [color.r, color.g, color.b, 255]);
}

#[test]
fn test_selected_biome_dims_other_regions() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let mut renderer = offline_renderer(&state.options);
    let before = {
        let scene = controller.build_render_scene(&state);
        pixel(&renderer.render(&scene).expect("Frame"), 576, 368)
    };

    // Legende alphabetisch: Ocean = 0, Sandstone = 1.
    controller
        .handle_intent(&mut state, AppIntent::BiomeLegendClicked { position: Some(1) })
        .expect("Biom wählen");
    let scene = controller.build_render_scene(&state);
    let after = pixel(&renderer.render(&scene).expect("Frame"), 576, 368);

    assert_ne!(before, after);
    assert_eq!(after, [128, 128, 128, 255]);
}

#[test]
fn test_legend_image_is_cached_per_generation_and_scale() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let mut renderer = offline_renderer(&state.options);

    for _ in 0..2 {
        let scene = controller.build_render_scene(&state);
        renderer.render(&scene).expect("Frame");
    }
    assert_eq!(renderer.legend_cache().render_count(), 1);

    let scale = state.view.ui_scale * 1.25;
    controller
        .handle_command(
            &mut state,
            asteroid_map_viewer::AppCommand::SetUiScale { scale },
        )
        .expect("UI-Skalierung");
    let scene = controller.build_render_scene(&state);
    renderer.render(&scene).expect("Frame");

    assert_eq!(renderer.legend_cache().render_count(), 2);
}

#[test]
fn test_missing_assets_are_marked_failed() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let mut renderer = offline_renderer(&state.options);

    let keys = state.session.take_pending_assets();
    assert!(keys.contains(&AssetKey::icon("hot_steam")));
    let batch = renderer.request_assets(keys);

    assert!(batch.icons.is_empty());
    assert!(batch.changed());
    assert!(matches!(
        renderer.assets().entry(&AssetKey::icon("hot_steam")),
        Some(AssetEntry::Failed)
    ));
    assert_eq!(renderer.assets_in_flight(), 0);

    // Ohne Icons wird trotzdem vollständig gezeichnet.
    let scene = controller.build_render_scene(&state);
    assert!(renderer.render(&scene).is_ok());
}

#[test]
fn test_asset_batch_without_icons_still_requests_redraw() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let mut renderer = offline_renderer(&state.options);
    state.view.take_redraw();

    // Nur Texturen und fehlende Icons: keine Icon-Größen, aber ein geänderter Cache.
    let batch = renderer.request_assets(vec![
        AssetKey::texture("Ocean"),
        AssetKey::icon("missing"),
    ]);
    assert!(batch.changed());
    assert!(batch.icons.is_empty());
    controller
        .handle_intent(&mut state, AppIntent::AssetsArrived { icons: batch.icons })
        .expect("Assets");

    assert!(state.view.take_redraw());
}

#[test]
fn test_crosshair_marks_screen_center() {
    let mut controller = AppController::new();
    let state = loaded_state(&mut controller);
    let mut renderer = offline_renderer(&state.options);
    let scene = controller.build_render_scene(&state);

    let canvas = renderer.render(&scene).expect("Frame");

    // Roter Mittelpunkt über den Haarlinien
    assert_eq!(pixel(&canvas, 320, 240), [230, 40, 40, 255]);
}
