//! Core-Domänentypen: Geometrie, Biom-Parser, Namen, Kamera, Farben, Legenden.

pub mod asteroid;
pub mod biome_paths;
pub mod camera;
pub mod color;
pub mod geometry;
pub mod legend;
pub mod names;

pub use asteroid::{Asteroid, Feature, FeatureKind, FeaturePoint, LoadedAsteroid, SeedBundle};
pub use biome_paths::{encode_biome_paths, parse_biome_paths, BiomeRegion};
pub use camera::{Camera2D, MAX_ZOOM, WORLD_SCALE};
pub use color::{hsl_to_rgb, unique_color};
pub use geometry::{even_odd_contains, Point, Polygon, ScreenRect};
pub use legend::{BiomeLegend, FeatureLegend, FeatureLegendEntry};
pub use names::{icon_key, strip_namespace, NameRegistry};
