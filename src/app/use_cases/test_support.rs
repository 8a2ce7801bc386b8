//! Test-Bundles für Use-Case-Tests.

use std::sync::Arc;

use crate::core::{Asteroid, FeaturePoint, SeedBundle};

fn point(id: &str, x: i32, y: i32) -> FeaturePoint {
    FeaturePoint {
        id: id.into(),
        x,
        y,
    }
}

/// Zwei Asteroiden; der erste ist 100×50 mit Geysir bei (10, 20).
pub fn bundle_100x50() -> Arc<SeedBundle> {
    Arc::new(SeedBundle {
        asteroids: vec![
            Asteroid {
                id: "SNDST-A".into(),
                size_x: 100,
                size_y: 50,
                geysers: vec![point("hot_steam", 10, 20), point("hot_steam", 40, 20)],
                points_of_interest: vec![point("poi::Headquarters", 50, 25)],
                biome_paths: "Sandstone:0,0 50,0 50,50 0,50\nOcean:50,0 100,0 100,50 50,50"
                    .into(),
            },
            Asteroid {
                id: "MOO-B".into(),
                size_x: 60,
                size_y: 60,
                geysers: vec![point("geysers/methane", 30, 30)],
                points_of_interest: Vec::new(),
                biome_paths: "Barren:0,0 60,0 60,60 0,60".into(),
            },
        ],
    })
}
