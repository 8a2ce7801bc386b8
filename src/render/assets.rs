//! Asset-Cache und Asset-Quellen (Verzeichnis oder ZIP-Archiv).
//!
//! PNG wird mit `image` dekodiert, SVG mit `resvg` rasterisiert. Jedes
//! dekodierte Bild durchläuft das Culling fast transparenter Pixel
//! (bei SVG bereits in `Texture::from_svg`).

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use asteroid_raster::{cull_near_transparent, RasterError, Texture, CULL_ALPHA_THRESHOLD};

use crate::shared::AssetKey;

/// Rasterisierungsmaßstab für SVG-Icons.
const SVG_SCALE: f32 = 1.0;

/// Zustand eines Assets im Cache.
#[derive(Debug, Clone)]
pub enum AssetEntry {
    /// Angefordert, noch nicht geliefert
    Pending,
    /// Geladen
    Loaded(Arc<Texture>),
    /// Nicht vorhanden oder nicht dekodierbar (Fallback zeichnen)
    Failed,
}

/// Map von Asset-Schlüssel auf Ladezustand.
#[derive(Debug, Default)]
pub struct AssetCache {
    entries: HashMap<AssetKey, AssetEntry>,
}

impl AssetCache {
    /// Leerer Cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Markiert Schlüssel als angefordert und gibt die noch unbekannten zurück.
    pub fn mark_pending(&mut self, keys: Vec<AssetKey>) -> Vec<AssetKey> {
        let mut fresh = Vec::new();
        for key in keys {
            if !self.entries.contains_key(&key) {
                self.entries.insert(key.clone(), AssetEntry::Pending);
                fresh.push(key);
            }
        }
        fresh
    }

    /// Übernimmt ein Ladeergebnis.
    pub fn insert(&mut self, key: AssetKey, texture: Option<Texture>) {
        let entry = match texture {
            Some(texture) => AssetEntry::Loaded(Arc::new(texture)),
            None => AssetEntry::Failed,
        };
        self.entries.insert(key, entry);
    }

    /// Zustand eines Assets
    pub fn entry(&self, key: &AssetKey) -> Option<&AssetEntry> {
        self.entries.get(key)
    }

    /// Geladene Textur, falls vorhanden
    pub fn texture(&self, key: &AssetKey) -> Option<&Texture> {
        match self.entries.get(key) {
            Some(AssetEntry::Loaded(texture)) => Some(texture),
            _ => None,
        }
    }

    /// Geladenes Icon
    pub fn icon(&self, name: &str) -> Option<&Texture> {
        self.texture(&AssetKey::icon(name))
    }

    /// Geladene Biom-Textur
    pub fn biome_texture(&self, biome: &str) -> Option<&Texture> {
        self.texture(&AssetKey::texture(biome))
    }

    /// Anzahl bekannter Schlüssel (inklusive ausstehender und fehlgeschlagener)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn der Cache leer ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Herkunft der Asset-Dateien.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Verzeichnis mit `icons/` und `textures/`
    Dir(PathBuf),
    /// ZIP-Archiv mit derselben Struktur
    Zip(PathBuf),
    /// Keine Assets (alles fällt zurück)
    None,
}

impl AssetSource {
    /// Wählt die Quelle anhand des Pfads (Endung `.zip` → Archiv).
    pub fn from_path(path: Option<&str>) -> Self {
        match path {
            None => Self::None,
            Some(p) if p.to_ascii_lowercase().ends_with(".zip") => Self::Zip(PathBuf::from(p)),
            Some(p) => Self::Dir(PathBuf::from(p)),
        }
    }

    /// Liest eine Datei relativ zur Quelle.
    pub fn read(&self, relative: &str) -> Option<Vec<u8>> {
        match self {
            Self::Dir(dir) => std::fs::read(dir.join(relative)).ok(),
            Self::Zip(path) => read_zip_entry(path, relative),
            Self::None => None,
        }
    }

    /// Lädt ein Asset über seine Kandidatenpfade. `None` = nicht vorhanden.
    pub fn load(&self, key: &AssetKey) -> Option<Texture> {
        for path in key.candidate_paths() {
            let Some(bytes) = self.read(&path) else {
                continue;
            };
            match decode_asset(&path, &bytes) {
                Ok(texture) => return Some(texture),
                Err(e) => log::warn!("Asset {} nicht dekodierbar: {}", path, e),
            }
        }
        log::debug!("Asset {} nicht gefunden", key);
        None
    }
}

fn read_zip_entry(path: &Path, relative: &str) -> Option<Vec<u8>> {
    let file = std::fs::File::open(path).ok()?;
    let mut archive = zip::ZipArchive::new(file).ok()?;
    let mut entry = archive.by_name(relative).ok()?;
    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes).ok()?;
    Some(bytes)
}

/// Fehler beim Dekodieren eines Assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// PNG nicht lesbar
    #[error("PNG: {0}")]
    Image(#[from] image::ImageError),
    /// SVG nicht lesbar oder Größe ungültig
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Dekodiert PNG- oder SVG-Bytes zu einer Textur (mit Alpha-Culling).
pub fn decode_asset(path: &str, bytes: &[u8]) -> Result<Texture, AssetError> {
    if path.to_ascii_lowercase().ends_with(".svg") {
        return Ok(Texture::from_svg(bytes, SVG_SCALE)?);
    }
    let mut image = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?.to_rgba8();
    cull_near_transparent(&mut image, CULL_ALPHA_THRESHOLD);
    Ok(Texture::from_rgba_image(&image)?)
}
