//! Biom-Flächen: Weltraum-Rechteck, Regionen (flach oder texturiert) und Umrisse.

use asteroid_raster::{Canvas, FillRule, Mesh, PolyPath, Rgba, Texture};
use glam::Vec2;

use super::types::RenderContext;
use crate::core::{Camera2D, LoadedAsteroid, Polygon};
use crate::shared::asset_key::SPACE_TEXTURE;

/// Welt-Einheiten → Texel-Anteil: eine Textur-Kachel überdeckt `1 / TEXTURE_SCALE` Welt-Einheiten.
pub const TEXTURE_SCALE: f32 = 1.0 / 64.0;
/// Abdunklung der Biom-Füllungen.
const BIOME_SHADE: f32 = 0.8;
/// Flache Farbe des Weltraum-Pseudo-Bioms.
const SPACE_COLOR: Rgba = Rgba::opaque(12, 12, 22);
/// Umriss jeder Region.
const OUTLINE: Rgba = Rgba::new(255, 255, 255, 70);

/// Zeichnet Schritt 2 und 3 des Frames.
pub(crate) struct BiomeRenderer;

impl BiomeRenderer {
    /// Weltraum-Rechteck, dann alle Regionen in Eingabereihenfolge.
    pub fn render(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>, asteroid: &LoadedAsteroid) {
        let camera = ctx.camera();
        let textures = ctx.scene.display.textures;

        let space_texture = ctx
            .assets
            .texture(&crate::shared::AssetKey::texture(SPACE_TEXTURE))
            .filter(|_| textures);
        let space = space_mesh(camera, asteroid.world_size(), space_texture);
        canvas.fill_mesh(&space, space_texture, ctx.sampler);

        let selected = ctx
            .scene
            .selection
            .biome
            .and_then(|pos| asteroid.biome_legend.name(pos));

        for region in &asteroid.regions {
            let path = region_path(camera, &region.polygons);
            if path.is_empty() {
                continue;
            }
            let color = asteroid.biome_legend.color_of(&region.name);
            let dimmed = selected.is_some_and(|name| name != region.name);

            if dimmed {
                canvas.fill_path(&path, Rgba::MID_GRAY.with_alpha(color.a), FillRule::EvenOdd);
            } else {
                match ctx.assets.biome_texture(&region.name) {
                    Some(texture) if textures => {
                        fill_textured(canvas, ctx, &path, texture, BIOME_SHADE)
                    }
                    _ => canvas.fill_path(&path, color.scaled(BIOME_SHADE), FillRule::EvenOdd),
                }
            }
            canvas.stroke_path(&path, 1.0, OUTLINE);
        }
    }
}

fn screen(camera: &Camera2D, world: Vec2) -> [f32; 2] {
    camera.world_to_screen(world).to_array()
}

/// Weltraum-Rechteck als Quad: texturiert mit Kachel-UVs, sonst flach.
pub(crate) fn space_mesh(camera: &Camera2D, world_size: Vec2, texture: Option<&Texture>) -> Mesh {
    let (uv_max, color) = match texture {
        Some(texture) => (
            [
                world_size.x * TEXTURE_SCALE * texture.width() as f32,
                world_size.y * TEXTURE_SCALE * texture.height() as f32,
            ],
            Rgba::WHITE,
        ),
        None => ([0.0, 0.0], SPACE_COLOR),
    };
    let mut mesh = Mesh::new();
    mesh.push_rect(
        screen(camera, Vec2::ZERO),
        screen(camera, world_size),
        [0.0, 0.0],
        uv_max,
        color,
        color,
    );
    mesh
}

/// Alle Ringe einer Region als ein Pfad (Even-Odd ergibt die Löcher).
pub(crate) fn region_path(camera: &Camera2D, polygons: &[Polygon]) -> PolyPath {
    let mut path = PolyPath::new();
    for polygon in polygons {
        path.push_ring(polygon.points.iter().map(|p| screen(camera, p.as_vec2())));
    }
    path
}

/// Texel → Screen: Texel `t = welt · TEXTURE_SCALE · texGröße`, Screen = `welt · ppu + offset`.
pub(crate) fn texel_to_screen(camera: &Camera2D, texture: &Texture) -> [f32; 6] {
    let ppu = camera.pixels_per_unit();
    [
        ppu / (TEXTURE_SCALE * texture.width() as f32),
        0.0,
        0.0,
        ppu / (TEXTURE_SCALE * texture.height() as f32),
        camera.offset.x,
        camera.offset.y,
    ]
}

fn fill_textured(canvas: &mut Canvas, ctx: &RenderContext<'_>, path: &PolyPath, texture: &Texture, shade: f32) {
    canvas.fill_path_textured(
        path,
        texture,
        texel_to_screen(ctx.camera(), texture),
        ctx.sampler,
        shade,
        FillRule::EvenOdd,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn texture_mapping_repeats_every_tile() {
        let mut camera = Camera2D::new();
        camera.zoom = 2.0;
        camera.offset = Vec2::new(5.0, 7.0);
        let texture = Texture::from_rgba_image(&image::RgbaImage::new(32, 16)).expect("Textur");

        let [sx, _, _, sy, tx, ty] = texel_to_screen(&camera, &texture);
        // Eine volle Kachel (32 Texel) entspricht 64 Welt-Einheiten = 256 Screen-Pixel.
        assert_relative_eq!(sx * 32.0, 64.0 * camera.pixels_per_unit());
        assert_relative_eq!(sy * 16.0, 64.0 * camera.pixels_per_unit());
        assert_relative_eq!(tx, 5.0);
        assert_relative_eq!(ty, 7.0);
    }

    #[test]
    fn space_quad_spans_the_asteroid() {
        let mut camera = Camera2D::new();
        camera.zoom = 1.0;
        camera.offset = Vec2::new(4.0, 6.0);
        let size = Vec2::new(8.0, 4.0);

        let flat = space_mesh(&camera, size, None);
        let ppu = camera.pixels_per_unit();
        assert_eq!(flat.vertices[0].pos, [4.0, 6.0]);
        assert_eq!(flat.vertices[2].pos, [4.0 + size.x * ppu, 6.0 + size.y * ppu]);
        assert!(flat.vertices.iter().all(|v| v.color == SPACE_COLOR));

        let mut canvas = Canvas::new(32, 32).expect("Canvas");
        canvas.fill_mesh(&flat, None, asteroid_raster::Sampler::default());
        let at = |x: u32, y: u32| {
            let i = ((y * canvas.width() + x) * 4) as usize;
            [canvas.data()[i], canvas.data()[i + 1], canvas.data()[i + 2], canvas.data()[i + 3]]
        };
        assert_eq!(at(6, 8), [12, 12, 22, 255]);
        assert_eq!(at(2, 2), [0, 0, 0, 0]);

        let texture = Texture::from_rgba_image(&image::RgbaImage::new(32, 16)).expect("Textur");
        let textured = space_mesh(&camera, size, Some(&texture));
        assert_eq!(textured.vertices[2].uv, [8.0 * TEXTURE_SCALE * 32.0, 4.0 * TEXTURE_SCALE * 16.0]);
        assert!(textured.vertices.iter().all(|v| v.color == Rgba::WHITE));
    }
}
