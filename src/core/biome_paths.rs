//! Parser für das kompakte Biom-Pfad-Format.
//!
//! Format: `<name>:<polygon>;<polygon>...` beliebig oft hintereinander.
//! `<name>` besteht aus `[A-Za-z0-9_]` und endet am Doppelpunkt, Punkte eines
//! Polygons sind durch Whitespace getrennt, X und Y durch Komma.
//!
//! Der Parser läuft einmal vorwärts über die Doppelpunkte und sucht von dort
//! rückwärts den Namensanfang. Fehlerhafte Punkte, Polygone mit weniger als
//! drei Punkten und leere Biome werden stillschweigend verworfen.

use super::geometry::{Point, Polygon};

/// Benanntes Biom aus einem oder mehreren Polygonen (Even-Odd-Füllung).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomeRegion {
    /// Biom-Name, z.B. `Sandstone`
    pub name: String,
    /// Polygone in Eingabereihenfolge
    pub polygons: Vec<Polygon>,
}

fn is_ident(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Normalisiert Zeilenenden: CR entfällt, LF wird zu einem Leerzeichen.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\r' => {}
            '\n' => out.push(' '),
            other => out.push(other),
        }
    }
    out
}

/// Header eines Biom-Blocks: Namensbereich `[name_start, colon)`.
struct Header {
    name_start: usize,
    colon: usize,
}

fn find_headers(bytes: &[u8]) -> Vec<Header> {
    let mut headers = Vec::new();
    for (colon, &b) in bytes.iter().enumerate() {
        if b != b':' {
            continue;
        }
        let mut name_start = colon;
        while name_start > 0 && is_ident(bytes[name_start - 1]) {
            name_start -= 1;
        }
        if name_start < colon {
            headers.push(Header { name_start, colon });
        }
    }
    headers
}

fn parse_pair(token: &str) -> Option<Point> {
    let (x, y) = token.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

fn parse_block(block: &str) -> Vec<Polygon> {
    block
        .split(';')
        .filter_map(|segment| {
            let points: Vec<Point> = segment.split_ascii_whitespace().filter_map(parse_pair).collect();
            (points.len() >= 3).then(|| Polygon::new(points))
        })
        .collect()
}

/// Zerlegt den Biom-Pfad-Text in Regionen, Reihenfolge wie in der Eingabe.
pub fn parse_biome_paths(text: &str) -> Vec<BiomeRegion> {
    let text = normalize(text);
    let bytes = text.as_bytes();
    let headers = find_headers(bytes);

    let mut regions = Vec::with_capacity(headers.len());
    for (i, header) in headers.iter().enumerate() {
        let block_end = headers.get(i + 1).map_or(bytes.len(), |next| next.name_start);
        let block_start = (header.colon + 1).min(block_end);
        // Header und Blockgrenzen liegen auf ASCII-Bytes, also auf Zeichengrenzen.
        let (Some(name), Some(block)) = (
            text.get(header.name_start..header.colon),
            text.get(block_start..block_end),
        ) else {
            continue;
        };

        let polygons = parse_block(block);
        if polygons.is_empty() {
            log::trace!("Biom '{}' ohne gültige Polygone übersprungen", name);
            continue;
        }
        regions.push(BiomeRegion {
            name: name.to_string(),
            polygons,
        });
    }
    regions
}

/// Schreibt Regionen in kanonischer Form zurück (`Name:x,y x,y;x,y ...`, eine Region pro Zeile).
pub fn encode_biome_paths(regions: &[BiomeRegion]) -> String {
    let mut out = String::new();
    for (i, region) in regions.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&region.name);
        out.push(':');
        for (p, polygon) in region.polygons.iter().enumerate() {
            if p > 0 {
                out.push(';');
            }
            for (k, point) in polygon.points.iter().enumerate() {
                if k > 0 {
                    out.push(' ');
                }
                out.push_str(&format!("{},{}", point.x, point.y));
            }
        }
    }
    out
}
