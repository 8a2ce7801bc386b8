//! `asteroid_raster`: CPU-Vektor-Rasterisierung für den Asteroiden-Kartenbetrachter.
//!
//! Kapselt tiny-skia (über `resvg` re-exportiert) hinter einer schmalen Fassade:
//! - gefüllte und umrandete Rechtecke, Kreise, Linien
//! - geschlossene Pfade mit Even-Odd-Füllregel, optional texturiert (Repeat-Adressierung)
//! - Dreiecks-Meshes mit Farbe und UV pro Vertex
//! - Bild-Blits mit ganzzahliger Verschiebung und uniformer Skalierung
//! - Text über `ab_glyph`
//!
//! # Beispiel
//! ```
//! use asteroid_raster::{Canvas, FillRule, PolyPath, Rgba};
//!
//! let mut canvas = Canvas::new(64, 64)?;
//! canvas.clear(Rgba::opaque(40, 40, 40));
//! let mut path = PolyPath::new();
//! path.push_ring([[4.0, 4.0], [60.0, 4.0], [60.0, 60.0], [4.0, 60.0]]);
//! canvas.fill_path(&path, Rgba::opaque(200, 80, 80), FillRule::EvenOdd);
//! # Ok::<(), asteroid_raster::RasterError>(())
//! ```

pub mod canvas;
pub mod color;
pub mod font;
pub mod mesh;
pub mod texture;

pub use canvas::{Canvas, FillRule, PolyPath};
pub use color::Rgba;
pub use font::{Font, TextSize};
pub use mesh::{Mesh, Vertex};
pub use texture::{
    cull_near_transparent, FilterMode, Sampler, Texture, WrapMode, CULL_ALPHA_THRESHOLD,
};

pub use resvg::tiny_skia;

/// Fehler der Raster-Fassade.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// Zielfläche oder Bild hat eine ungültige Größe (0 oder zu groß)
    #[error("ungültige Bildgröße {width}x{height}")]
    InvalidSize {
        /// Breite in Pixeln
        width: u32,
        /// Höhe in Pixeln
        height: u32,
    },
    /// Font-Daten konnten nicht gelesen werden
    #[error("ungültige Font-Daten")]
    InvalidFont,
    /// SVG konnte nicht geparst werden
    #[error("SVG-Fehler: {0}")]
    Svg(String),
}
