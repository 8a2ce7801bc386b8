//! Beschriftung der Features auf der Karte.

use asteroid_raster::{Canvas, Font, Rgba};
use glam::Vec2;

use super::types::{fill, LABEL_BOX};
use crate::core::ScreenRect;

/// Wörter pro Zeile bei Namens-Labels.
const WORDS_PER_LINE: usize = 2;
/// Innenabstand der Hintergrundbox um den Text.
const BOX_PADDING_PX: f32 = 2.0;

/// Text eines Labels: Legenden-Nummer oder umbrochener Anzeigename.
pub fn label_text(display_name: &str, legend_index: usize, numeric: bool) -> String {
    if numeric {
        legend_index.to_string()
    } else {
        wrap_words(display_name, WORDS_PER_LINE)
    }
}

/// Bricht nach jeweils `per_line` Wörtern um.
pub fn wrap_words(text: &str, per_line: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    words
        .chunks(per_line.max(1))
        .map(|chunk| chunk.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ein gesammeltes Label, gezeichnet nach allen Icons.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Text (ggf. mehrzeilig)
    pub text: String,
    /// Obere linke Ecke
    pub pos: Vec2,
    /// Ausmaße
    pub size: Vec2,
}

impl Label {
    /// Setzt ein Label zentriert unter das Icon-Rechteck.
    pub fn below(text: String, icon: ScreenRect, font: &Font, px: f32) -> Self {
        let measured = font.measure(&text, px);
        let size = Vec2::new(measured.width, measured.height);
        let pos = Vec2::new(
            icon.center().x - size.x * 0.5,
            icon.max.y + 1.0 + BOX_PADDING_PX,
        );
        Self { text, pos, size }
    }

    /// Bildschirm-Rechteck inklusive Hintergrundbox
    pub fn rect(&self) -> ScreenRect {
        ScreenRect::from_xywh(self.pos.x, self.pos.y, self.size.x, self.size.y)
            .expand(BOX_PADDING_PX)
    }

    /// Zeichnet die Hintergrundbox, dann Text mit dunklem Schatten.
    pub fn draw(&self, canvas: &mut Canvas, font: &Font, px: f32) {
        fill(canvas, self.rect(), LABEL_BOX);
        font.draw_text(canvas, &self.text, self.pos.x + 1.0, self.pos.y + 1.0, px, Rgba::BLACK.with_alpha(200));
        font.draw_text(canvas, &self.text, self.pos.x, self.pos.y, px, Rgba::WHITE);
    }
}
