//! Vorgerenderte Legenden-Bilder.
//!
//! Beide Legenden werden einmal komplett (alle Zeilen) gerendert und beim
//! Zeichnen nur noch verschoben und auf das Panel beschnitten. Neu gerendert
//! wird bei Asteroiden-Wechsel oder geänderter Schrift-/UI-Größe.

use asteroid_raster::{Canvas, FillRule, FilterMode, PolyPath, RasterError, Rgba, Sampler, Texture, WrapMode};

use super::types::{RenderContext, TEXT};
use crate::core::{LoadedAsteroid, ScreenRect};
use crate::shared::ScrollPanel;

/// Beschriftung der letzten Zeile jeder Legende.
pub const CLEAR_LABEL: &str = "Clear";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LegendKey {
    generation: u64,
    ui_scale_bits: u32,
    font_px_bits: u32,
    width_bits: u32,
}

/// Cache für die Bilder von Biom- und Feature-Legende.
#[derive(Debug, Default)]
pub struct LegendCache {
    biome: Option<(LegendKey, Texture)>,
    feature: Option<(LegendKey, Texture)>,
    renders: usize,
}

impl LegendCache {
    /// Leerer Cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl der bisher gerenderten Legenden-Bilder
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Bild einer Legende; rendert neu, wenn sich der Schlüssel geändert hat.
    pub(crate) fn get(
        &mut self,
        panel: ScrollPanel,
        ctx: &RenderContext<'_>,
        asteroid: &LoadedAsteroid,
        width: f32,
    ) -> Result<&Texture, RasterError> {
        let key = LegendKey {
            generation: ctx.scene.legend_generation,
            ui_scale_bits: ctx.scene.ui_scale.to_bits(),
            font_px_bits: ctx.font_px().to_bits(),
            width_bits: width.to_bits(),
        };
        let slot = match panel {
            ScrollPanel::BiomeLegend => &mut self.biome,
            ScrollPanel::FeatureLegend => &mut self.feature,
            ScrollPanel::GeyserList => return Err(RasterError::InvalidSize { width: 0, height: 0 }),
        };
        if slot.as_ref().is_none_or(|(cached, _)| *cached != key) {
            let rows = legend_rows(panel, asteroid);
            log::debug!("Legende {:?} neu gerendert ({} Zeilen)", panel, rows.len());
            let texture = render_rows(ctx, &rows, width)?;
            *slot = Some((key, texture));
            self.renders += 1;
        }
        match slot {
            Some((_, texture)) => Ok(texture),
            None => Err(RasterError::InvalidSize { width: 0, height: 0 }),
        }
    }
}

/// Eine Legenden-Zeile: Farbfeld (optional) und Text.
#[derive(Debug, Clone, PartialEq)]
struct LegendRow {
    swatch: Option<Rgba>,
    text: String,
}

fn legend_rows(panel: ScrollPanel, asteroid: &LoadedAsteroid) -> Vec<LegendRow> {
    let mut rows: Vec<LegendRow> = match panel {
        ScrollPanel::BiomeLegend => asteroid
            .biome_legend
            .names()
            .iter()
            .map(|name| LegendRow {
                swatch: Some(asteroid.biome_legend.color_of(name)),
                text: name.clone(),
            })
            .collect(),
        _ => asteroid
            .feature_legend
            .entries()
            .map(|entry| LegendRow {
                swatch: Some(entry.color),
                text: format!("{}  {}", entry.index, entry.display_name),
            })
            .collect(),
    };
    rows.push(LegendRow {
        swatch: None,
        text: CLEAR_LABEL.to_string(),
    });
    rows
}

fn render_rows(ctx: &RenderContext<'_>, rows: &[LegendRow], width: f32) -> Result<Texture, RasterError> {
    let layout = &ctx.layout;
    let height = rows.len() as f32 * layout.row_height;
    let mut canvas = Canvas::new(width.ceil().max(1.0) as u32, height.ceil().max(1.0) as u32)?;
    let swatch = (layout.row_height * 0.6).round();

    for (i, row) in rows.iter().enumerate() {
        let rect = ScreenRect::from_xywh(0.0, i as f32 * layout.row_height, width, layout.row_height);
        let text_x = layout.padding * 2.0 + swatch;
        if let Some(color) = row.swatch {
            let y = rect.min.y + (layout.row_height - swatch) * 0.5;
            canvas.fill_rect(layout.padding, y, swatch, swatch, color);
        }
        ctx.text_in_row(&mut canvas, &row.text, rect, text_x, TEXT);
    }
    Ok(canvas.into_texture())
}

/// Zeichnet ein Legenden-Bild in `panel`, um `scroll` verschoben und auf das Panel beschnitten.
pub(crate) fn draw_clipped(canvas: &mut Canvas, texture: &Texture, panel: ScreenRect, scroll: f32) {
    let mut clip = PolyPath::new();
    clip.push_ring([
        [panel.min.x, panel.min.y],
        [panel.max.x, panel.min.y],
        [panel.max.x, panel.max.y],
        [panel.min.x, panel.max.y],
    ]);
    canvas.fill_path_textured(
        &clip,
        texture,
        [1.0, 0.0, 0.0, 1.0, panel.min.x, panel.min.y - scroll],
        Sampler {
            filter: FilterMode::Nearest,
            wrap: WrapMode::Clamp,
        },
        1.0,
        FillRule::EvenOdd,
    );
}
