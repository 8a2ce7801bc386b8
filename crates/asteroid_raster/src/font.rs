//! TTF/OTF-Text über `ab_glyph`: Messen und Zeichnen mit Coverage-Blending.

use ab_glyph::{point, Font as _, FontArc, PxScale, ScaleFont};

use crate::mesh::blend_over;
use crate::{Canvas, RasterError, Rgba};

/// Ausmaße eines gesetzten Texts in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    /// Breite der längsten Zeile
    pub width: f32,
    /// Gesamthöhe aller Zeilen
    pub height: f32,
}

/// Geladener Font, günstig klonbar.
#[derive(Clone)]
pub struct Font {
    inner: FontArc,
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("glyphs", &self.inner.glyph_count())
            .finish()
    }
}

impl Font {
    /// Liest Font-Daten (TTF/OTF) ein.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, RasterError> {
        let inner = FontArc::try_from_vec(data).map_err(|_| RasterError::InvalidFont)?;
        Ok(Self { inner })
    }

    /// Zeilenhöhe (Ascent − Descent + Line-Gap) bei Pixelgröße `px`.
    pub fn line_height(&self, px: f32) -> f32 {
        let scaled = self.inner.as_scaled(PxScale::from(px));
        scaled.ascent() - scaled.descent() + scaled.line_gap()
    }

    fn line_width(&self, line: &str, px: f32) -> f32 {
        let scaled = self.inner.as_scaled(PxScale::from(px));
        let mut width = 0.0;
        let mut prev = None;
        for c in line.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width
    }

    /// Misst einen (ggf. mehrzeiligen) Text.
    pub fn measure(&self, text: &str, px: f32) -> TextSize {
        let mut size = TextSize::default();
        let mut lines = 0usize;
        for line in text.split('\n') {
            size.width = size.width.max(self.line_width(line, px));
            lines += 1;
        }
        size.height = lines as f32 * self.line_height(px);
        size
    }

    /// Zeichnet Text mit oberer linker Ecke bei `(x, y)`.
    ///
    /// Zeilen werden an `\n` umbrochen; Glyphen außerhalb der Fläche werden abgeschnitten.
    pub fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, y: f32, px: f32, color: Rgba) {
        let scale = PxScale::from(px);
        let scaled = self.inner.as_scaled(scale);
        let line_height = self.line_height(px);
        let base = color.premultiplied_f32();

        let pixmap = canvas.pixmap_mut();
        let width = pixmap.width() as i32;
        let height = pixmap.height() as i32;

        for (row, line) in text.split('\n').enumerate() {
            let baseline = y + row as f32 * line_height + scaled.ascent();
            let mut caret = x;
            let mut prev = None;

            for c in line.chars() {
                let id = scaled.glyph_id(c);
                if let Some(prev) = prev {
                    caret += scaled.kern(prev, id);
                }
                let glyph = id.with_scale_and_position(scale, point(caret, baseline));
                caret += scaled.h_advance(id);
                prev = Some(id);

                let Some(outlined) = self.inner.outline_glyph(glyph) else {
                    continue;
                };
                let bounds = outlined.px_bounds();
                let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);

                outlined.draw(|gx, gy, coverage| {
                    let tx = left + gx as i32;
                    let ty = top + gy as i32;
                    if tx < 0 || ty < 0 || tx >= width || ty >= height || coverage <= 0.0 {
                        return;
                    }
                    let cov = coverage.min(1.0);
                    let src = [base[0] * cov, base[1] * cov, base[2] * cov, base[3] * cov];
                    let index = (ty * width + tx) as usize;
                    let pixels = pixmap.pixels_mut();
                    pixels[index] = blend_over(pixels[index], src);
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let result = Font::from_bytes(vec![0, 1, 2, 3]);
        assert!(matches!(result, Err(RasterError::InvalidFont)));
    }

    #[test]
    fn empty_data_is_rejected() {
        assert!(Font::from_bytes(Vec::new()).is_err());
    }
}
