//! Feature-Icons, Labels und die Hervorhebung gewählter Features.

use asteroid_raster::{Canvas, Rgba, Texture};
use glam::Vec2;

use super::labels::{label_text, Label};
use super::types::{centered_origin, fill, stroke, RenderContext};
use crate::core::{LoadedAsteroid, ScreenRect};
use crate::shared::feature_icon_rect;

/// Kantenlänge der Ersatz-Fläche ohne Icon (bei UI-Skalierung 1).
const SWATCH_PX: f32 = 4.0;
/// Rahmenbreite der Hervorhebung (bei UI-Skalierung 1).
const HIGHLIGHT_STROKE_PX: f32 = 2.0;

/// Ein gewähltes Feature für den zweiten Durchgang.
#[derive(Debug, Clone)]
pub(crate) struct Highlight {
    center: Vec2,
    icon: ScreenRect,
    icon_key: String,
    color: Rgba,
    label: Option<Label>,
}

/// Zeichnet Schritt 4, 5 und 7 des Frames.
pub(crate) struct FeatureRenderer;

impl FeatureRenderer {
    /// Icons aller Features, danach ihre Labels.
    ///
    /// Gibt die Features der gewählten Legenden-Nummer für den zweiten Durchgang zurück.
    pub fn render(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>, asteroid: &LoadedAsteroid) -> Vec<Highlight> {
        let scene = ctx.scene;
        let camera = ctx.camera();
        let scale = scene.icon_scale();
        let numeric = scene.numeric_labels();
        let screen = ScreenRect::from_xywh(0.0, 0.0, scene.viewport.x, scene.viewport.y);
        let stroke_px = HIGHLIGHT_STROKE_PX * scene.ui_scale;

        let mut labels = Vec::new();
        let mut highlights = Vec::new();

        for (feature, &index) in asteroid.features.iter().zip(&asteroid.feature_indices) {
            let center = camera.world_to_screen(feature.pos.as_vec2());
            let texture = ctx.assets.icon(&feature.icon_key);
            let icon = feature_icon_rect(center, texture.map(|t| [t.width(), t.height()]), scale);
            let text = label_text(&feature.display_name, index, numeric);
            let label = Label::below(text, icon, ctx.font, ctx.font_px());
            if !icon.union(&label.rect()).intersects(&screen) {
                continue;
            }

            let color = asteroid
                .feature_legend
                .entry(index)
                .map(|e| e.color)
                .unwrap_or(Rgba::WHITE);

            if scene.selection.feature == Some(index) {
                stroke(canvas, icon, stroke_px, color);
                highlights.push(Highlight {
                    center,
                    icon,
                    icon_key: feature.icon_key.clone(),
                    color,
                    label: Some(label),
                });
                continue;
            }

            draw_icon(canvas, ctx, texture, center, scale, color);
            labels.push(label);
        }

        for label in &labels {
            label.draw(canvas, ctx.font, ctx.font_px());
        }
        highlights
    }

    /// Zweiter Durchgang: gewählte Features über allen Overlays, rot umrandet.
    pub fn render_highlights(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>, highlights: &[Highlight]) {
        let scale = ctx.scene.icon_scale();
        let stroke_px = HIGHLIGHT_STROKE_PX * ctx.scene.ui_scale;
        for highlight in highlights {
            let texture = ctx.assets.icon(&highlight.icon_key);
            draw_icon(canvas, ctx, texture, highlight.center, scale, highlight.color);
            let mut bounds = highlight.icon;
            if let Some(label) = &highlight.label {
                label.draw(canvas, ctx.font, ctx.font_px());
                bounds = bounds.union(&label.rect());
            }
            stroke(canvas, bounds.expand(stroke_px), stroke_px, Rgba::RED);
        }
    }
}

fn draw_icon(canvas: &mut Canvas, ctx: &RenderContext<'_>, texture: Option<&Texture>, center: Vec2, scale: f32, color: Rgba) {
    match texture {
        Some(texture) => {
            let size = Vec2::new(texture.width() as f32, texture.height() as f32) * scale;
            let (x, y) = centered_origin(center, size);
            canvas.blit(texture, x, y, scale, ctx.sampler.filter);
        }
        None => {
            let half = SWATCH_PX * ctx.scene.ui_scale * 0.5;
            fill(canvas, ScreenRect::from_center(center, Vec2::splat(half)), color);
        }
    }
}
