//! Benchmark für den Software-Compositor.
//!
//! Misst einen vollständigen Frame (Biome, Features, Legenden, Overlays)
//! ohne Assets, also mit Flächenfarben und Ersatz-Icons.

use std::sync::Arc;

use asteroid_map_viewer::render::{AssetLoader, AssetSource};
use asteroid_map_viewer::{
    AppController, AppIntent, AppState, Asteroid, FeaturePoint, Renderer, SeedBundle,
    ViewerOptions,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use std::hint::black_box;

fn synthetic_bundle(size: i32, features: usize) -> SeedBundle {
    let half = size / 2;
    let biome_paths = format!(
        "Sandstone:0,0 {half},0 {half},{size} 0,{size}\nOcean:{half},0 {size},0 {size},{size} {half},{size};{q},{q} {t},{q} {t},{t} {q},{t}",
        q = half + size / 8,
        t = size - size / 8,
    );
    let geysers = (0..features)
        .map(|i| FeaturePoint {
            id: format!("geyser_{}", i % 10),
            x: (i as i32 * 37) % size,
            y: (i as i32 * 53) % size,
        })
        .collect();
    SeedBundle {
        asteroids: vec![Asteroid {
            id: "BENCH-A".into(),
            size_x: size,
            size_y: size,
            geysers,
            points_of_interest: Vec::new(),
            biome_paths,
        }],
    }
}

fn loaded_state(controller: &mut AppController, features: usize) -> AppState {
    let mut state = AppState::with_options(ViewerOptions::default());
    let intents = [
        AppIntent::ViewportResized {
            size: Vec2::new(1280.0, 720.0),
        },
        AppIntent::BundleReceived {
            coord: "BENCH-A-0-0-0-0".into(),
            bundle: Arc::new(synthetic_bundle(256, features)),
            asteroid: None,
        },
    ];
    for intent in intents {
        controller
            .handle_intent(&mut state, intent)
            .expect("Bench-Zustand");
    }
    state
}

fn bench_compose_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_frame_1280x720");

    for &features in &[16usize, 256] {
        let mut controller = AppController::new();
        let state = loaded_state(&mut controller, features);
        let mut renderer = Renderer::with_loader(
            &state.options,
            AssetLoader::blocking(AssetSource::None),
        )
        .expect("Renderer");

        group.bench_with_input(BenchmarkId::new("features", features), &state, |b, state| {
            b.iter(|| {
                let scene = controller.build_render_scene(black_box(state));
                let canvas = renderer.render(&scene).expect("Frame");
                black_box(canvas.width())
            })
        });
    }

    group.finish();
}

criterion_group!(render_benches, bench_compose_frame);
criterion_main!(render_benches);
