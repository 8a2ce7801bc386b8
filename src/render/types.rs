//! Gemeinsame Typen der Sub-Renderer.

use asteroid_raster::{FilterMode, Font, Rgba, Sampler, WrapMode};
use glam::Vec2;

use super::assets::AssetCache;
use crate::core::{Camera2D, ScreenRect};
use crate::shared::{RenderScene, UiLayout};

/// Hintergrund hinter dem Asteroiden.
pub(crate) const BACKGROUND: Rgba = Rgba::opaque(30, 30, 30);
/// Halbtransparenter Panel-Hintergrund der Overlays.
pub(crate) const PANEL_FILL: Rgba = Rgba::new(20, 20, 24, 210);
/// Rahmen der Overlays.
pub(crate) const PANEL_STROKE: Rgba = Rgba::new(255, 255, 255, 60);
/// Hintergrundbox der Karten-Labels.
pub(crate) const LABEL_BOX: Rgba = Rgba::new(0, 0, 0, 150);
/// Hervorhebung gewählter Zeilen und Menü-Einträge.
pub(crate) const ROW_HIGHLIGHT: Rgba = Rgba::new(255, 255, 255, 40);
/// Textfarbe der Overlays.
pub(crate) const TEXT: Rgba = Rgba::WHITE;
/// Gedämpfte Textfarbe (Tastenspalte, Statuszeile).
pub(crate) const TEXT_DIM: Rgba = Rgba::opaque(190, 190, 190);

/// Gemeinsamer Kontext für alle Sub-Renderer.
///
/// Bündelt Szene, Assets und Schrift, die jeder Sub-Renderer pro Frame braucht.
pub(crate) struct RenderContext<'a> {
    /// Read-only Szene dieses Frames
    pub scene: &'a RenderScene<'a>,
    /// Geladene Icons und Texturen
    pub assets: &'a AssetCache,
    /// Schrift
    pub font: &'a Font,
    /// Overlay-Layout dieses Frames
    pub layout: UiLayout,
    /// Sampler für Texturen und Icons
    pub sampler: Sampler,
}

impl<'a> RenderContext<'a> {
    /// Baut den Kontext für eine Szene.
    pub fn new(scene: &'a RenderScene<'a>, assets: &'a AssetCache, font: &'a Font) -> Self {
        let filter = if scene.display.linear_filter {
            FilterMode::Linear
        } else {
            FilterMode::Nearest
        };
        Self {
            scene,
            assets,
            font,
            layout: scene.layout(),
            sampler: Sampler {
                filter,
                wrap: WrapMode::Repeat,
            },
        }
    }

    /// Kamera dieses Frames
    pub fn camera(&self) -> &Camera2D {
        &self.scene.camera
    }

    /// Schriftgröße in Pixeln
    pub fn font_px(&self) -> f32 {
        self.layout.font_px
    }

    /// Text linksbündig, vertikal zentriert in einer Zeile.
    pub fn text_in_row(&self, canvas: &mut asteroid_raster::Canvas, text: &str, row: ScreenRect, x: f32, color: Rgba) {
        let line = self.font.line_height(self.font_px());
        let y = row.min.y + (row.height() - line) * 0.5;
        self.font.draw_text(canvas, text, x, y, self.font_px(), color);
    }
}

/// Füllt ein Rechteck.
pub(crate) fn fill(canvas: &mut asteroid_raster::Canvas, rect: ScreenRect, color: Rgba) {
    canvas.fill_rect(rect.min.x, rect.min.y, rect.width(), rect.height(), color);
}

/// Umrandet ein Rechteck.
pub(crate) fn stroke(canvas: &mut asteroid_raster::Canvas, rect: ScreenRect, width: f32, color: Rgba) {
    canvas.stroke_rect(rect.min.x, rect.min.y, rect.width(), rect.height(), width, color);
}

/// Panel-Hintergrund mit Rahmen.
pub(crate) fn panel(canvas: &mut asteroid_raster::Canvas, rect: ScreenRect) {
    fill(canvas, rect, PANEL_FILL);
    stroke(canvas, rect, 1.0, PANEL_STROKE);
}

/// Obere linke Ecke für ein zentriertes Bild der Größe `size`.
pub(crate) fn centered_origin(center: Vec2, size: Vec2) -> (i32, i32) {
    let origin = center - size * 0.5;
    (origin.x.round() as i32, origin.y.round() as i32)
}
