use std::collections::HashMap;
use std::sync::Arc;

use crate::core::{LoadedAsteroid, SeedBundle};
use crate::shared::AssetKey;

/// Statuszeile mit optionalem Ablaufzeitpunkt.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    /// Anzuzeigender Text
    pub text: String,
    /// Zeitpunkt (Sekunden), ab dem die Zeile verschwindet
    pub until: Option<f64>,
}

/// Sitzung: Bundle und aktuell geladener Asteroid.
#[derive(Debug, Default)]
pub struct SessionState {
    /// Seed-Koordinate der Sitzung
    pub coord: String,
    /// Geladenes Bundle
    pub bundle: Option<Arc<SeedBundle>>,
    /// IDs der Asteroiden im Bundle (Reihenfolge wie geliefert)
    pub asteroid_ids: Vec<String>,
    /// Index des aktuellen Asteroiden im Bundle
    pub current_index: Option<usize>,
    /// Aktueller Asteroid mit Legenden und Polygonen
    pub current: Option<Arc<LoadedAsteroid>>,
    /// Noch nicht an den Loader übergebene Assets
    pub pending_assets: Vec<AssetKey>,
    /// Pixelgröße geladener Icons (für Hit-Tests)
    pub icon_sizes: HashMap<String, [u32; 2]>,
    /// Statuszeile
    pub status: Option<StatusLine>,
}

impl SessionState {
    /// Leere Sitzung für eine Koordinate
    pub fn new(coord: String) -> Self {
        Self {
            coord,
            ..Self::default()
        }
    }

    /// Übernimmt die wartenden Asset-Anforderungen.
    pub fn take_pending_assets(&mut self) -> Vec<AssetKey> {
        std::mem::take(&mut self.pending_assets)
    }

    /// Pixelgröße eines geladenen Icons
    pub fn icon_size(&self, key: &str) -> Option<[u32; 2]> {
        self.icon_sizes.get(key).copied()
    }

    /// Aktueller Statustext, falls vorhanden
    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }
}
