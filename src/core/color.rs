//! Deterministische, gut unterscheidbare Farben pro Legenden-Index.

use asteroid_raster::Rgba;

/// Hue-Schritt pro Index (teilerfremd zu 360).
const HUE_STEP: u32 = 137;
const SATURATION_RANGE: (f32, f32) = (0.30, 0.90);
const LIGHTNESS_RANGE: (f32, f32) = (0.30, 0.80);

/// HSL-Parameter für Index `i` (Hue in Grad, S und L in 0..1).
///
/// Sättigung und Helligkeit schwingen mit unterschiedlicher Periode,
/// damit sich auch Nachbarn mit ähnlichem Hue im Ton unterscheiden.
pub fn unique_hsl(index: u32) -> (f32, f32, f32) {
    let hue = ((index as u64 * HUE_STEP as u64) % 360) as f32;
    let i = index as f32;
    let saturation = (0.62 + 0.28 * (i * 1.1).sin()).clamp(SATURATION_RANGE.0, SATURATION_RANGE.1);
    let lightness = (0.55 + 0.22 * (i * 0.7 + 1.3).sin()).clamp(LIGHTNESS_RANGE.0, LIGHTNESS_RANGE.1);
    (hue, saturation, lightness)
}

/// Opake Farbe für Legenden-Index `i` (ab 1).
pub fn unique_color(index: u32) -> Rgba {
    let (h, s, l) = unique_hsl(index);
    hsl_to_rgb(h, s, l)
}

/// HSL → RGB (opak).
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgba {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let hp = hue.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_u8 = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgba::opaque(to_u8(r), to_u8(g), to_u8(b))
}
