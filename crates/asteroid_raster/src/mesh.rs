//! Dreiecks-Meshes mit Farbe und UV pro Vertex.
//!
//! tiny-skia kennt keine Vertex-Attribute, daher rasterisiert dieses Modul
//! Dreiecke selbst: Kantenfunktionen über die Bounding-Box, baryzentrische
//! Interpolation von Farbe und UV, Source-Over-Blending im vormultiplizierten Raum.

use resvg::tiny_skia::{Pixmap, PremultipliedColorU8};

use crate::texture::{Sampler, Texture};
use crate::Rgba;

/// Ein Vertex: Screen-Position, Texel-Koordinate, Farbe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in Screen-Pixeln
    pub pos: [f32; 2],
    /// Texel-Koordinate (ungenormt, Repeat/Clamp über den Sampler)
    pub uv: [f32; 2],
    /// Vertex-Farbe, moduliert das Texel
    pub color: Rgba,
}

/// Indexiertes Dreiecks-Mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertices
    pub vertices: Vec<Vertex>,
    /// Je drei Indizes bilden ein Dreieck
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Leeres Mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Fügt einen Vertex hinzu und gibt seinen Index zurück.
    pub fn push_vertex(&mut self, vertex: Vertex) -> u32 {
        self.vertices.push(vertex);
        (self.vertices.len() - 1) as u32
    }

    /// Fügt ein Dreieck aus drei Vertex-Indizes hinzu.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    /// Achsenparalleles Rechteck aus zwei Dreiecken.
    ///
    /// `uv_min`/`uv_max` sind die Texel-Koordinaten an den Ecken,
    /// `top`/`bottom` die Vertex-Farben oben bzw. unten (vertikaler Verlauf).
    pub fn push_rect(
        &mut self,
        min: [f32; 2],
        max: [f32; 2],
        uv_min: [f32; 2],
        uv_max: [f32; 2],
        top: Rgba,
        bottom: Rgba,
    ) {
        let a = self.push_vertex(Vertex {
            pos: min,
            uv: uv_min,
            color: top,
        });
        let b = self.push_vertex(Vertex {
            pos: [max[0], min[1]],
            uv: [uv_max[0], uv_min[1]],
            color: top,
        });
        let c = self.push_vertex(Vertex {
            pos: max,
            uv: uv_max,
            color: bottom,
        });
        let d = self.push_vertex(Vertex {
            pos: [min[0], max[1]],
            uv: [uv_min[0], uv_max[1]],
            color: bottom,
        });
        self.push_triangle(a, b, c);
        self.push_triangle(a, c, d);
    }
}

fn edge(a: [f32; 2], b: [f32; 2], p: [f32; 2]) -> f32 {
    (b[0] - a[0]) * (p[1] - a[1]) - (b[1] - a[1]) * (p[0] - a[0])
}

/// Tie-Break für Pixel exakt auf einer Kante: genau eines von zwei
/// Nachbar-Dreiecken besitzt die gemeinsame Kante.
fn owns_edge(a: [f32; 2], b: [f32; 2], orientation: f32) -> bool {
    let dx = (b[0] - a[0]) * orientation;
    let dy = (b[1] - a[1]) * orientation;
    dy > 0.0 || (dy == 0.0 && dx < 0.0)
}

fn covers(weight: f32, owned: bool) -> bool {
    weight > 0.0 || (weight == 0.0 && owned)
}

pub(crate) fn rasterize(
    pixmap: &mut Pixmap,
    mesh: &Mesh,
    texture: Option<&Texture>,
    sampler: Sampler,
) {
    let width = pixmap.width() as i64;
    let height = pixmap.height() as i64;

    for tri in mesh.indices.chunks_exact(3) {
        let (Some(v0), Some(v1), Some(v2)) = (
            mesh.vertices.get(tri[0] as usize),
            mesh.vertices.get(tri[1] as usize),
            mesh.vertices.get(tri[2] as usize),
        ) else {
            log::trace!("Mesh-Dreieck mit ungültigem Index übersprungen: {:?}", tri);
            continue;
        };

        let area = edge(v0.pos, v1.pos, v2.pos);
        if area.abs() < f32::EPSILON {
            continue;
        }

        let min_x = v0.pos[0].min(v1.pos[0]).min(v2.pos[0]).floor().max(0.0) as i64;
        let min_y = v0.pos[1].min(v1.pos[1]).min(v2.pos[1]).floor().max(0.0) as i64;
        let max_x = (v0.pos[0].max(v1.pos[0]).max(v2.pos[0]).ceil() as i64).min(width);
        let max_y = (v0.pos[1].max(v1.pos[1]).max(v2.pos[1]).ceil() as i64).min(height);

        let orientation = area.signum();
        let own0 = owns_edge(v1.pos, v2.pos, orientation);
        let own1 = owns_edge(v2.pos, v0.pos, orientation);
        let own2 = owns_edge(v0.pos, v1.pos, orientation);

        let c0 = v0.color.premultiplied_f32();
        let c1 = v1.color.premultiplied_f32();
        let c2 = v2.color.premultiplied_f32();

        for py in min_y..max_y {
            for px in min_x..max_x {
                let p = [px as f32 + 0.5, py as f32 + 0.5];
                let w0 = edge(v1.pos, v2.pos, p) / area;
                let w1 = edge(v2.pos, v0.pos, p) / area;
                let w2 = edge(v0.pos, v1.pos, p) / area;
                if !(covers(w0, own0) && covers(w1, own1) && covers(w2, own2)) {
                    continue;
                }

                let mut src = [0.0f32; 4];
                for (i, value) in src.iter_mut().enumerate() {
                    *value = c0[i] * w0 + c1[i] * w1 + c2[i] * w2;
                }

                if let Some(tex) = texture {
                    let u = v0.uv[0] * w0 + v1.uv[0] * w1 + v2.uv[0] * w2;
                    let v = v0.uv[1] * w0 + v1.uv[1] * w1 + v2.uv[1] * w2;
                    let texel = tex.sample(u, v, sampler);
                    for (value, t) in src.iter_mut().zip(texel) {
                        *value *= t;
                    }
                }

                let index = (py * width + px) as usize;
                let pixels = pixmap.pixels_mut();
                pixels[index] = blend_over(pixels[index], src);
            }
        }
    }
}

/// Source-Over im vormultiplizierten Raum.
pub(crate) fn blend_over(dst: PremultipliedColorU8, src: [f32; 4]) -> PremultipliedColorU8 {
    let inv = 1.0 - src[3];
    let mix = |s: f32, d: u8| ((s + d as f32 / 255.0 * inv) * 255.0).round().clamp(0.0, 255.0) as u8;
    let a = mix(src[3], dst.alpha());
    let r = mix(src[0], dst.red()).min(a);
    let g = mix(src[1], dst.green()).min(a);
    let b = mix(src[2], dst.blue()).min(a);
    PremultipliedColorU8::from_rgba(r, g, b, a).unwrap_or(dst)
}
