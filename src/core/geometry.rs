//! Geometrie-Primitive: ganzzahlige Asteroiden-Punkte, Polygone, Bildschirm-Rechtecke.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Ganzzahliger Punkt in Asteroiden-Koordinaten (Ursprung oben links, Y nach unten).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// X-Koordinate
    pub x: i32,
    /// Y-Koordinate
    pub y: i32,
}

impl Point {
    /// Erstellt einen Punkt.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Als Float-Vektor
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// Geschlossener Polygonzug, die Kante vom letzten zum ersten Punkt ist implizit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polygon {
    /// Eckpunkte in Reihenfolge
    pub points: Vec<Point>,
}

impl Polygon {
    /// Erstellt ein Polygon aus Punkten.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Anzahl Kanten, die `p` mit einem Strahl nach +X schneidet.
    fn crossings(&self, p: Vec2) -> usize {
        let n = self.points.len();
        if n < 3 {
            return 0;
        }
        let mut count = 0;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.points[i].as_vec2();
            let b = self.points[j].as_vec2();
            if (a.y > p.y) != (b.y > p.y) {
                let x_at = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
                if p.x < x_at {
                    count += 1;
                }
            }
            j = i;
        }
        count
    }

    /// Even-Odd-Test für einen einzelnen Ring.
    pub fn contains(&self, p: Vec2) -> bool {
        self.crossings(p) % 2 == 1
    }
}

/// Even-Odd-Test über mehrere Ringe: überlappende Ringe bilden Löcher.
pub fn even_odd_contains(polygons: &[Polygon], p: Vec2) -> bool {
    polygons.iter().map(|poly| poly.crossings(p)).sum::<usize>() % 2 == 1
}

/// Achsenparalleles Rechteck in Bildschirm-Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Obere linke Ecke
    pub min: Vec2,
    /// Untere rechte Ecke
    pub max: Vec2,
}

impl ScreenRect {
    /// Rechteck aus Position und Größe
    pub fn from_xywh(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    /// Rechteck um einen Mittelpunkt mit halber Kantenlänge
    pub fn from_center(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            min: center - half_extent,
            max: center + half_extent,
        }
    }

    /// Breite
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Höhe
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Mittelpunkt
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Enthält der Punkt? Ränder zählen dazu.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Um `margin` nach allen Seiten vergrößert
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    /// Überlappen sich die Rechtecke?
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// Kleinstes Rechteck, das beide enthält
    pub fn union(&self, other: &ScreenRect) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Gleiches Rechteck, vertikal verschoben
    pub fn translate_y(&self, dy: f32) -> Self {
        Self {
            min: Vec2::new(self.min.x, self.min.y + dy),
            max: Vec2::new(self.max.x, self.max.y + dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: i32, y0: i32, x1: i32, y1: i32) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    #[test]
    fn polygon_contains_inner_point() {
        let poly = square(0, 0, 10, 10);
        assert!(poly.contains(Vec2::new(5.0, 5.0)));
        assert!(!poly.contains(Vec2::new(15.0, 5.0)));
    }

    #[test]
    fn nested_ring_forms_hole() {
        let rings = vec![square(0, 0, 10, 10), square(5, 5, 7, 7)];
        assert!(even_odd_contains(&rings, Vec2::new(2.0, 2.0)));
        assert!(!even_odd_contains(&rings, Vec2::new(6.0, 6.0)));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let poly = Polygon::new(vec![Point::new(0, 0), Point::new(5, 5)]);
        assert!(!poly.contains(Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn screen_rect_contains_edges() {
        let rect = ScreenRect::from_center(Vec2::new(20.0, 40.0), Vec2::splat(10.0));
        assert!(rect.contains(Vec2::new(20.0, 40.0)));
        assert!(rect.contains(Vec2::new(30.0, 50.0)));
        assert!(!rect.contains(Vec2::new(35.0, 40.0)));
    }
}
