//! Zeichenfläche: dünne Fassade über einer tiny-skia-Pixmap.

use image::RgbaImage;
use resvg::tiny_skia::{
    self, Paint, PathBuilder, Pattern, Pixmap, PixmapPaint, Rect, Shader, Stroke, Transform,
};

use crate::mesh::{self, Mesh};
use crate::texture::{FilterMode, Sampler, Texture};
use crate::{RasterError, Rgba};

/// Füllregel für geschlossene Pfade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// Überlappende Ringe erzeugen Löcher
    #[default]
    EvenOdd,
    /// Umlaufzahl ungleich 0 wird gefüllt
    NonZero,
}

impl FillRule {
    fn to_skia(self) -> tiny_skia::FillRule {
        match self {
            Self::EvenOdd => tiny_skia::FillRule::EvenOdd,
            Self::NonZero => tiny_skia::FillRule::Winding,
        }
    }
}

/// Pfad aus geschlossenen Ringen in Screen-Koordinaten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolyPath {
    rings: Vec<Vec<[f32; 2]>>,
}

impl PolyPath {
    /// Leerer Pfad
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen geschlossenen Ring an. Ringe mit weniger als 3 Punkten werden ignoriert.
    pub fn push_ring(&mut self, points: impl IntoIterator<Item = [f32; 2]>) {
        let ring: Vec<[f32; 2]> = points.into_iter().collect();
        if ring.len() >= 3 {
            self.rings.push(ring);
        }
    }

    /// Gibt `true` zurück, wenn der Pfad keinen Ring enthält.
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Alle Ringe des Pfads
    pub fn rings(&self) -> &[Vec<[f32; 2]>] {
        &self.rings
    }

    fn to_skia(&self) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for ring in &self.rings {
            let (first, rest) = ring.split_first()?;
            pb.move_to(first[0], first[1]);
            for p in rest {
                pb.line_to(p[0], p[1]);
            }
            pb.close();
        }
        pb.finish()
    }
}

/// RGBA-Zeichenfläche mit vormultipliziertem Alpha.
pub struct Canvas {
    pixmap: Pixmap,
    anti_alias: bool,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("anti_alias", &self.anti_alias)
            .finish()
    }
}

impl Canvas {
    /// Erstellt eine transparente Zeichenfläche.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let pixmap = Pixmap::new(width, height).ok_or(RasterError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            anti_alias: true,
        })
    }

    /// Breite in Pixeln
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Höhe in Pixeln
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Schaltet Kantenglättung für Pfade und Formen.
    pub fn set_anti_alias(&mut self, enabled: bool) {
        self.anti_alias = enabled;
    }

    /// Füllt die gesamte Fläche mit einer Farbe.
    pub fn clear(&mut self, color: Rgba) {
        self.pixmap.fill(color.to_skia());
    }

    fn solid_paint(&self, color: Rgba) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = self.anti_alias;
        paint
    }

    /// Gefülltes Rechteck
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            return;
        };
        let paint = self.solid_paint(color);
        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Umrandetes Rechteck mit Linienbreite `width`
    pub fn stroke_rect(&mut self, x: f32, y: f32, w: f32, h: f32, width: f32, color: Rgba) {
        let Some(rect) = Rect::from_xywh(x, y, w, h) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        self.stroke_skia_path(&path, width, color);
    }

    /// Gerade Linie
    pub fn stroke_line(&mut self, from: [f32; 2], to: [f32; 2], width: f32, color: Rgba) {
        let mut pb = PathBuilder::new();
        pb.move_to(from[0], from[1]);
        pb.line_to(to[0], to[1]);
        if let Some(path) = pb.finish() {
            self.stroke_skia_path(&path, width, color);
        }
    }

    /// Gefüllter Kreis
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba) {
        let Some(path) = PathBuilder::from_circle(cx, cy, radius) else {
            return;
        };
        let paint = self.solid_paint(color);
        self.pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Kreislinie
    pub fn stroke_circle(&mut self, cx: f32, cy: f32, radius: f32, width: f32, color: Rgba) {
        if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
            self.stroke_skia_path(&path, width, color);
        }
    }

    fn stroke_skia_path(&mut self, path: &tiny_skia::Path, width: f32, color: Rgba) {
        let paint = self.solid_paint(color);
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(path, &paint, &stroke, Transform::identity(), None);
    }

    /// Geschlossener Pfad mit einfarbiger Füllung.
    pub fn fill_path(&mut self, path: &PolyPath, color: Rgba, rule: FillRule) {
        let Some(skia_path) = path.to_skia() else {
            return;
        };
        let paint = self.solid_paint(color);
        self.pixmap.fill_path(
            &skia_path,
            &paint,
            rule.to_skia(),
            Transform::identity(),
            None,
        );
    }

    /// Umrandet alle Ringe eines Pfads.
    pub fn stroke_path(&mut self, path: &PolyPath, width: f32, color: Rgba) {
        if let Some(skia_path) = path.to_skia() {
            self.stroke_skia_path(&skia_path, width, color);
        }
    }

    /// Geschlossener Pfad mit Texturfüllung.
    ///
    /// `texel_to_screen` bildet Texel-Koordinaten auf Screen-Koordinaten ab
    /// (`[sx, ky, kx, sy, tx, ty]`, Zeilenform wie tiny-skia).
    /// `color_scale` < 1.0 dunkelt die vormultiplizierte Füllung ab.
    pub fn fill_path_textured(
        &mut self,
        path: &PolyPath,
        texture: &Texture,
        texel_to_screen: [f32; 6],
        sampler: Sampler,
        color_scale: f32,
        rule: FillRule,
    ) {
        let Some(skia_path) = path.to_skia() else {
            return;
        };
        let [sx, ky, kx, sy, tx, ty] = texel_to_screen;
        let shader: Shader<'_> = Pattern::new(
            texture.pixmap().as_ref(),
            sampler.wrap.spread(),
            sampler.filter.quality(),
            1.0,
            Transform::from_row(sx, ky, kx, sy, tx, ty),
        );
        let paint = Paint {
            shader,
            anti_alias: self.anti_alias,
            ..Paint::default()
        };
        self.pixmap.fill_path(
            &skia_path,
            &paint,
            rule.to_skia(),
            Transform::identity(),
            None,
        );

        // Schwarz mit Alpha (1 - scale) skaliert vormultiplizierte Farben um `scale`.
        if color_scale < 1.0 {
            let shade = ((1.0 - color_scale).clamp(0.0, 1.0) * 255.0).round() as u8;
            self.fill_path(path, Rgba::BLACK.with_alpha(shade), rule);
        }
    }

    /// Zeichnet eine Textur mit ganzzahliger Position (obere linke Ecke) und uniformer Skalierung.
    pub fn blit(&mut self, texture: &Texture, x: i32, y: i32, scale: f32, filter: FilterMode) {
        if scale <= 0.0 {
            return;
        }
        let paint = PixmapPaint {
            quality: filter.quality(),
            ..PixmapPaint::default()
        };
        self.pixmap.draw_pixmap(
            0,
            0,
            texture.pixmap().as_ref(),
            &paint,
            Transform::from_row(scale, 0.0, 0.0, scale, x as f32, y as f32),
            None,
        );
    }

    /// Rasterisiert ein Dreiecks-Mesh mit Vertex-Farben und optionaler Textur.
    pub fn fill_mesh(&mut self, mesh: &Mesh, texture: Option<&Texture>, sampler: Sampler) {
        mesh::rasterize(&mut self.pixmap, mesh, texture, sampler);
    }

    /// Vormultiplizierte RGBA-Bytes der Fläche.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Liest die Fläche als RGBA-Bild mit geradem Alpha zurück.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut image = RgbaImage::new(self.width(), self.height());
        for (dst, src) in image.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        image
    }

    /// Wandelt die Fläche in eine wiederverwendbare Textur (z.B. gecachte Legende).
    pub fn into_texture(self) -> Texture {
        Texture::from_pixmap(self.pixmap)
    }

    /// Direkter Zugriff für Text- und Mesh-Rasterisierung.
    pub(crate) fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}
