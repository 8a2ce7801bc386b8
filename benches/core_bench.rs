use asteroid_map_viewer::core::{encode_biome_paths, parse_biome_paths};
use asteroid_map_viewer::{Asteroid, FeaturePoint, LoadedAsteroid};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

const BIOMES: [&str; 6] = ["Sandstone", "Ocean", "Barren", "Jungle", "Rust", "Forest"];

/// Schachbrett aus `cells × cells` Quadraten, reihum auf sechs Biome verteilt.
fn synthetic_biome_paths(cells: i32, cell_size: i32) -> String {
    let mut lines: Vec<String> = BIOMES.iter().map(|b| format!("{b}:")).collect();
    for row in 0..cells {
        for col in 0..cells {
            let (x, y) = (col * cell_size, row * cell_size);
            let biome = ((row * cells + col) as usize) % BIOMES.len();
            let ring = format!(
                "{},{} {},{} {},{} {},{}",
                x,
                y,
                x + cell_size,
                y,
                x + cell_size,
                y + cell_size,
                x,
                y + cell_size
            );
            let line = &mut lines[biome];
            if !line.ends_with(':') {
                line.push(';');
            }
            line.push_str(&ring);
        }
    }
    lines.join("\n")
}

fn synthetic_asteroid(cells: i32, features: usize) -> Asteroid {
    let size = cells * 8;
    let point = |i: usize, prefix: &str| FeaturePoint {
        id: format!("{prefix}{}", i % 12),
        x: (i as i32 * 37) % size,
        y: (i as i32 * 53) % size,
    };
    Asteroid {
        id: "BENCH-A".into(),
        size_x: size,
        size_y: size,
        geysers: (0..features).map(|i| point(i, "geyser_")).collect(),
        points_of_interest: (0..features / 4).map(|i| point(i, "poi::Ruin")).collect(),
        biome_paths: synthetic_biome_paths(cells, 8),
    }
}

fn bench_biome_path_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("biome_paths");

    for &cells in &[16i32, 64] {
        let text = synthetic_biome_paths(cells, 8);
        group.bench_with_input(BenchmarkId::new("parse", cells), &text, |b, text| {
            b.iter(|| black_box(parse_biome_paths(black_box(text)).len()))
        });

        let regions = parse_biome_paths(&text);
        group.bench_with_input(BenchmarkId::new("encode", cells), &regions, |b, regions| {
            b.iter(|| black_box(encode_biome_paths(black_box(regions)).len()))
        });
    }

    group.finish();
}

fn bench_asteroid_loading(c: &mut Criterion) {
    let mut group = c.benchmark_group("asteroid_loading");

    for &features in &[32usize, 512] {
        let asteroid = synthetic_asteroid(32, features);
        group.bench_with_input(
            BenchmarkId::new("from_asteroid", features),
            &asteroid,
            |b, asteroid| {
                b.iter(|| {
                    let loaded = LoadedAsteroid::from_asteroid(black_box(asteroid));
                    black_box(loaded.feature_legend.len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_biome_path_parsing, bench_asteroid_loading);
criterion_main!(core_benches);
