//! Schrift für Karte und Overlays.
//!
//! Standard ist die eingebaute egui-Proportionalschrift; `font_path` in den
//! Optionen ersetzt sie durch eine TTF/OTF-Datei.

use std::sync::OnceLock;

use asteroid_raster::{Font, RasterError};

use crate::shared::ViewerOptions;

static DEFAULT_FONT: OnceLock<Option<Font>> = OnceLock::new();

/// Eingebaute Standardschrift (erste Proportional-Schrift von egui).
pub fn default_font() -> Option<Font> {
    DEFAULT_FONT
        .get_or_init(|| {
            let definitions = egui::FontDefinitions::default();
            let name = definitions
                .families
                .get(&egui::FontFamily::Proportional)
                .and_then(|names| names.first())?;
            let data = definitions.font_data.get(name)?;
            match Font::from_bytes(data.font.to_vec()) {
                Ok(font) => Some(font),
                Err(e) => {
                    log::error!("Eingebaute Schrift {} nicht lesbar: {}", name, e);
                    None
                }
            }
        })
        .clone()
}

/// Schrift laut Optionen; fällt bei Fehlern auf die Standardschrift zurück.
pub fn load_font(options: &ViewerOptions) -> Result<Font, RasterError> {
    if let Some(path) = &options.font_path {
        match std::fs::read(path) {
            Ok(bytes) => match Font::from_bytes(bytes) {
                Ok(font) => {
                    log::info!("Schrift geladen: {}", path);
                    return Ok(font);
                }
                Err(e) => log::warn!("Schrift {} ungültig: {}", path, e),
            },
            Err(e) => log::warn!("Schrift {} nicht lesbar: {}", path, e),
        }
    }
    default_font().ok_or(RasterError::InvalidFont)
}
