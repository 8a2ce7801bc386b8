//! Datenmodell eines Seed-Bundles und des aktuell geladenen Asteroiden.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::biome_paths::{parse_biome_paths, BiomeRegion};
use super::geometry::{even_odd_contains, Point};
use super::legend::{BiomeLegend, FeatureLegend};
use super::names::{icon_key, NameRegistry};

/// Punkt-Feature im Bundle (Geysir oder POI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturePoint {
    /// ID, ggf. mit Namespace
    pub id: String,
    /// X in Asteroiden-Koordinaten
    pub x: i32,
    /// Y in Asteroiden-Koordinaten
    pub y: i32,
}

/// Ein Asteroid wie vom Seed-Dienst geliefert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asteroid {
    /// Asteroiden-ID
    pub id: String,
    /// Breite in Asteroiden-Pixeln
    pub size_x: i32,
    /// Höhe in Asteroiden-Pixeln
    pub size_y: i32,
    /// Geysire
    #[serde(default)]
    pub geysers: Vec<FeaturePoint>,
    /// Points of Interest
    #[serde(default)]
    pub points_of_interest: Vec<FeaturePoint>,
    /// Kodierte Biom-Polygone
    #[serde(default)]
    pub biome_paths: String,
}

/// Geordnete Liste von Asteroiden zu einer Seed-Koordinate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeedBundle {
    /// Asteroiden in Lieferreihenfolge
    #[serde(default)]
    pub asteroids: Vec<Asteroid>,
}

impl SeedBundle {
    /// Sucht einen Asteroiden ohne Beachtung der Groß-/Kleinschreibung.
    pub fn find(&self, id: &str) -> Option<usize> {
        self.asteroids
            .iter()
            .position(|a| a.id.eq_ignore_ascii_case(id))
    }

    /// Listet alle IDs, drei pro Zeile.
    pub fn id_listing(&self) -> String {
        self.asteroids
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|a| a.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Art eines Punkt-Features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// Geysir, Vulkan oder Vent
    Geyser,
    /// Point of Interest
    Poi,
}

/// Aufbereitetes Feature mit Anzeigename und Icon-Schlüssel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Art
    pub kind: FeatureKind,
    /// Original-ID aus dem Bundle
    pub id: String,
    /// Anzeigename
    pub display_name: String,
    /// Icon-Schlüssel (ohne Namespace, klein)
    pub icon_key: String,
    /// Position in Asteroiden-Koordinaten
    pub pos: Point,
}

impl Feature {
    fn from_point(kind: FeatureKind, point: &FeaturePoint, registry: &NameRegistry) -> Self {
        let display_name = match kind {
            FeatureKind::Geyser => registry.geyser_name(&point.id),
            FeatureKind::Poi => registry.poi_name(&point.id),
        };
        Self {
            kind,
            id: point.id.clone(),
            display_name,
            icon_key: icon_key(&point.id),
            pos: Point::new(point.x, point.y),
        }
    }
}

/// Geparster Asteroid, fertig für Darstellung und Hit-Tests.
#[derive(Debug, Clone)]
pub struct LoadedAsteroid {
    /// Asteroiden-ID
    pub id: String,
    /// Größe in Asteroiden-Pixeln
    pub size: Point,
    /// Biom-Regionen in Eingabereihenfolge
    pub regions: Vec<BiomeRegion>,
    /// Geysire gefolgt von POIs
    pub features: Vec<Feature>,
    /// Legenden-Index (ab 1) pro Feature
    pub feature_indices: Vec<usize>,
    /// Feature-Legende
    pub feature_legend: FeatureLegend,
    /// Biom-Legende
    pub biome_legend: BiomeLegend,
}

impl LoadedAsteroid {
    /// Parst Biom-Pfade und baut Feature-Liste und Legenden.
    pub fn from_asteroid(asteroid: &Asteroid) -> Self {
        let registry = NameRegistry::global();
        let features: Vec<Feature> = asteroid
            .geysers
            .iter()
            .map(|p| Feature::from_point(FeatureKind::Geyser, p, registry))
            .chain(
                asteroid
                    .points_of_interest
                    .iter()
                    .map(|p| Feature::from_point(FeatureKind::Poi, p, registry)),
            )
            .collect();

        let regions = parse_biome_paths(&asteroid.biome_paths);
        let feature_legend = FeatureLegend::build(&features);
        let feature_indices = features
            .iter()
            .map(|f| feature_legend.index_of(&f.display_name).unwrap_or(0))
            .collect();
        let biome_legend = BiomeLegend::build(&regions);

        Self {
            id: asteroid.id.clone(),
            size: Point::new(asteroid.size_x, asteroid.size_y),
            regions,
            features,
            feature_indices,
            feature_legend,
            biome_legend,
        }
    }

    /// Größe als Float-Vektor für die Kamera
    pub fn world_size(&self) -> Vec2 {
        self.size.as_vec2()
    }

    /// Name des Bioms am Welt-Punkt (letzte passende Region gewinnt, wie beim Zeichnen).
    pub fn biome_at(&self, world: Vec2) -> Option<&str> {
        self.regions
            .iter()
            .rev()
            .find(|region| even_odd_contains(&region.polygons, world))
            .map(|region| region.name.as_str())
    }
}
