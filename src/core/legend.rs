//! Legenden-Modell: Biome alphabetisch, Features in Auftrittsreihenfolge mit Index ab 1.

use asteroid_raster::Rgba;
use indexmap::IndexMap;

use super::asteroid::{Feature, FeatureKind};
use super::biome_paths::BiomeRegion;
use super::color::unique_color;

/// Ein Eintrag der Feature-Legende.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureLegendEntry {
    /// Anzeigename (eindeutig innerhalb der Legende)
    pub display_name: String,
    /// Art des ersten Features mit diesem Namen
    pub kind: FeatureKind,
    /// Farbe aus dem Index abgeleitet
    pub color: Rgba,
    /// Legenden-Index ab 1
    pub index: usize,
    /// Icon-Schlüssel des ersten Features mit diesem Namen
    pub icon_key: String,
}

/// Feature-Legende: ein Eintrag pro eindeutigem Anzeigenamen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureLegend {
    entries: IndexMap<String, FeatureLegendEntry>,
}

impl FeatureLegend {
    /// Baut die Legende aus Geysiren gefolgt von POIs.
    pub fn build(features: &[Feature]) -> Self {
        let mut entries: IndexMap<String, FeatureLegendEntry> = IndexMap::new();
        for feature in features {
            if entries.contains_key(&feature.display_name) {
                continue;
            }
            let index = entries.len() + 1;
            entries.insert(
                feature.display_name.clone(),
                FeatureLegendEntry {
                    display_name: feature.display_name.clone(),
                    kind: feature.kind,
                    color: unique_color(index as u32),
                    index,
                    icon_key: feature.icon_key.clone(),
                },
            );
        }
        Self { entries }
    }

    /// Index (ab 1) zu einem Anzeigenamen
    pub fn index_of(&self, display_name: &str) -> Option<usize> {
        self.entries.get(display_name).map(|e| e.index)
    }

    /// Eintrag zu einem Index (ab 1)
    pub fn entry(&self, index: usize) -> Option<&FeatureLegendEntry> {
        index
            .checked_sub(1)
            .and_then(|i| self.entries.get_index(i))
            .map(|(_, e)| e)
    }

    /// Alle Einträge in Index-Reihenfolge
    pub fn entries(&self) -> impl Iterator<Item = &FeatureLegendEntry> {
        self.entries.values()
    }

    /// Anzahl der Einträge
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Features vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Biom-Legende: sortierte, eindeutige Biom-Namen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiomeLegend {
    names: Vec<String>,
}

impl BiomeLegend {
    /// Sammelt die Biom-Namen der Regionen, sortiert und ohne Duplikate.
    pub fn build(regions: &[BiomeRegion]) -> Self {
        let mut names: Vec<String> = regions.iter().map(|r| r.name.clone()).collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    /// Position (ab 0) eines Biom-Namens
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).ok()
    }

    /// Farbe eines Bioms (Legenden-Position + 1 als Farbindex)
    pub fn color_of(&self, name: &str) -> Rgba {
        self.position(name)
            .map_or(Rgba::MID_GRAY, |pos| unique_color(pos as u32 + 1))
    }

    /// Name an Position
    pub fn name(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    /// Alle Namen in Sortierreihenfolge
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Anzahl der Biome
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Gibt `true` zurück, wenn keine Biome vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
