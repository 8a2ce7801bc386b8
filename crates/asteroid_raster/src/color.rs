//! RGBA-Farbe mit geradem (nicht vormultipliziertem) Alpha.

use resvg::tiny_skia::{Color, ColorU8, PremultipliedColorU8};

/// 8-Bit-RGBA-Farbe, Alpha nicht vormultipliziert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    /// Rot-Kanal
    pub r: u8,
    /// Grün-Kanal
    pub g: u8,
    /// Blau-Kanal
    pub b: u8,
    /// Deckkraft
    pub a: u8,
}

impl Rgba {
    /// Vollständig transparent.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opakes Schwarz.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opakes Weiß.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opakes Rot.
    pub const RED: Self = Self::opaque(230, 40, 40);
    /// Neutrales Mittelgrau.
    pub const MID_GRAY: Self = Self::opaque(128, 128, 128);

    /// Erstellt eine Farbe aus vier Kanälen.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Erstellt eine opake Farbe.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Gleiche Farbe mit anderem Alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Skaliert die Farbkanäle (0.8 = um 20 % abdunkeln). Alpha bleibt erhalten.
    pub fn scaled(self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    /// Erstellt eine Farbe aus normalisierten Float-Kanälen (0.0..=1.0).
    pub fn from_f32(c: [f32; 4]) -> Self {
        let to_u8 = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::new(to_u8(c[0]), to_u8(c[1]), to_u8(c[2]), to_u8(c[3]))
    }

    /// Normalisierte, vormultiplizierte Kanäle für Blending.
    pub(crate) fn premultiplied_f32(self) -> [f32; 4] {
        let a = self.a as f32 / 255.0;
        [
            self.r as f32 / 255.0 * a,
            self.g as f32 / 255.0 * a,
            self.b as f32 / 255.0 * a,
            a,
        ]
    }

    /// Konvertiert in die tiny-skia-Farbe.
    pub fn to_skia(self) -> Color {
        Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    /// Konvertiert in ein vormultipliziertes tiny-skia-Pixel.
    pub fn to_premultiplied(self) -> PremultipliedColorU8 {
        ColorU8::from_rgba(self.r, self.g, self.b, self.a).premultiply()
    }
}
