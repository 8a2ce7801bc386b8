//! Texturen (vormultiplizierte RGBA-Bilder) und ihr Sampling.

use image::RgbaImage;
use resvg::tiny_skia::{self, ColorU8, FilterQuality, IntSize, Pixmap, SpreadMode};

use crate::RasterError;

/// Pixel mit Alpha unterhalb dieser Schwelle werden beim Laden vollständig transparent.
pub const CULL_ALPHA_THRESHOLD: u8 = 64;

/// Filterung beim Vergrößern/Verkleinern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Nächster Nachbar (pixelig, Standard)
    #[default]
    Nearest,
    /// Bilineare Interpolation
    Linear,
}

impl FilterMode {
    pub(crate) fn quality(self) -> FilterQuality {
        match self {
            Self::Nearest => FilterQuality::Nearest,
            Self::Linear => FilterQuality::Bilinear,
        }
    }
}

/// Adressierung außerhalb der Texturgrenzen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Textur kachelt endlos
    #[default]
    Repeat,
    /// Randpixel werden verlängert
    Clamp,
}

impl WrapMode {
    pub(crate) fn spread(self) -> SpreadMode {
        match self {
            Self::Repeat => SpreadMode::Repeat,
            Self::Clamp => SpreadMode::Pad,
        }
    }

    fn wrap(self, coord: i64, extent: u32) -> usize {
        let extent = extent as i64;
        match self {
            Self::Repeat => coord.rem_euclid(extent) as usize,
            Self::Clamp => coord.clamp(0, extent - 1) as usize,
        }
    }
}

/// Sampler-Zustand für texturierte Füllungen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sampler {
    /// Filtermodus
    pub filter: FilterMode,
    /// Adressierungsmodus
    pub wrap: WrapMode,
}

/// Setzt Pixel mit Alpha < `threshold` auf Alpha 0.
///
/// Weiche Kanten von Icons verschmieren sonst die Overlays.
pub fn cull_near_transparent(image: &mut RgbaImage, threshold: u8) {
    for pixel in image.pixels_mut() {
        if pixel[3] < threshold {
            pixel[3] = 0;
        }
    }
}

/// Vormultipliziertes RGBA-Bild (Icon, Biom-Textur oder gecachte Legende).
#[derive(Clone)]
pub struct Texture {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Texture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Texture")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Texture {
    /// Übernimmt eine bereits gerenderte Pixmap.
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    /// Konvertiert ein RGBA-Bild (gerades Alpha) in eine Textur.
    pub fn from_rgba_image(image: &RgbaImage) -> Result<Self, RasterError> {
        let (width, height) = image.dimensions();
        let size = IntSize::from_wh(width, height).ok_or(RasterError::InvalidSize { width, height })?;

        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for pixel in image.pixels() {
            let c = ColorU8::from_rgba(pixel[0], pixel[1], pixel[2], pixel[3]).premultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }

        let pixmap = Pixmap::from_vec(data, size).ok_or(RasterError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    /// Rasterisiert ein SVG-Dokument mit dem Faktor `scale`.
    ///
    /// Fast transparente Pixel werden wie bei PNG-Assets verworfen.
    pub fn from_svg(data: &[u8], scale: f32) -> Result<Self, RasterError> {
        let options = resvg::usvg::Options::default();
        let tree = resvg::usvg::Tree::from_data(data, &options)
            .map_err(|e| RasterError::Svg(e.to_string()))?;
        let width = (tree.size().width() * scale).ceil().max(1.0) as u32;
        let height = (tree.size().height() * scale).ceil().max(1.0) as u32;
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(scale, scale),
            &mut pixmap.as_mut(),
        );

        for pixel in pixmap.pixels_mut() {
            if pixel.alpha() < CULL_ALPHA_THRESHOLD {
                *pixel = tiny_skia::PremultipliedColorU8::TRANSPARENT;
            }
        }
        Ok(Self { pixmap })
    }

    /// Breite in Pixeln
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Höhe in Pixeln
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Zugriff auf die zugrundeliegende Pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Vormultiplizierte RGBA-Bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    fn texel(&self, x: i64, y: i64, wrap: WrapMode) -> [f32; 4] {
        let tx = wrap.wrap(x, self.width());
        let ty = wrap.wrap(y, self.height());
        let p = self.pixmap.pixels()[ty * self.width() as usize + tx];
        [
            p.red() as f32 / 255.0,
            p.green() as f32 / 255.0,
            p.blue() as f32 / 255.0,
            p.alpha() as f32 / 255.0,
        ]
    }

    /// Sampelt die Textur an Texel-Koordinaten `(u, v)` (vormultipliziert, normalisiert).
    pub fn sample(&self, u: f32, v: f32, sampler: Sampler) -> [f32; 4] {
        match sampler.filter {
            FilterMode::Nearest => self.texel(u.floor() as i64, v.floor() as i64, sampler.wrap),
            FilterMode::Linear => {
                let fu = u - 0.5;
                let fv = v - 0.5;
                let x0 = fu.floor();
                let y0 = fv.floor();
                let tx = fu - x0;
                let ty = fv - y0;
                let (x0, y0) = (x0 as i64, y0 as i64);

                let c00 = self.texel(x0, y0, sampler.wrap);
                let c10 = self.texel(x0 + 1, y0, sampler.wrap);
                let c01 = self.texel(x0, y0 + 1, sampler.wrap);
                let c11 = self.texel(x0 + 1, y0 + 1, sampler.wrap);

                let mut out = [0.0; 4];
                for (i, value) in out.iter_mut().enumerate() {
                    let top = c00[i] + (c10[i] - c00[i]) * tx;
                    let bottom = c01[i] + (c11[i] - c01[i]) * tx;
                    *value = top + (bottom - top) * ty;
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba as ImgRgba;

    fn checker() -> Texture {
        let mut img = RgbaImage::new(2, 2);
        img.put_pixel(0, 0, ImgRgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, ImgRgba([0, 255, 0, 255]));
        img.put_pixel(0, 1, ImgRgba([0, 0, 255, 255]));
        img.put_pixel(1, 1, ImgRgba([255, 255, 255, 255]));
        Texture::from_rgba_image(&img).expect("2x2-Textur")
    }

    #[test]
    fn cull_sets_soft_edges_fully_transparent() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, ImgRgba([10, 10, 10, 63]));
        img.put_pixel(1, 0, ImgRgba([10, 10, 10, 64]));
        img.put_pixel(2, 0, ImgRgba([10, 10, 10, 255]));

        cull_near_transparent(&mut img, CULL_ALPHA_THRESHOLD);

        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(1, 0)[3], 64);
        assert_eq!(img.get_pixel(2, 0)[3], 255);
    }

    #[test]
    fn nearest_sampling_repeats_outside_bounds() {
        let tex = checker();
        let sampler = Sampler {
            filter: FilterMode::Nearest,
            wrap: WrapMode::Repeat,
        };
        assert_eq!(tex.sample(0.5, 0.5, sampler), tex.sample(2.5, 4.5, sampler));
        assert_eq!(tex.sample(-0.5, 0.5, sampler), tex.sample(1.5, 0.5, sampler));
    }

    #[test]
    fn clamp_sampling_extends_edge() {
        let tex = checker();
        let sampler = Sampler {
            filter: FilterMode::Nearest,
            wrap: WrapMode::Clamp,
        };
        assert_eq!(tex.sample(-7.0, 0.5, sampler), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn linear_sampling_blends_neighbours() {
        let tex = checker();
        let sampler = Sampler {
            filter: FilterMode::Linear,
            wrap: WrapMode::Clamp,
        };
        // Genau zwischen Rot (0,0) und Grün (1,0)
        let c = tex.sample(1.0, 0.5, sampler);
        assert!((c[0] - 0.5).abs() < 1e-5);
        assert!((c[1] - 0.5).abs() < 1e-5);
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        let img = RgbaImage::new(0, 4);
        assert!(Texture::from_rgba_image(&img).is_err());
    }
}
