//! Seed und Asteroid aus einer Viewer-URL oder Browser-Location.
//!
//! Unterstützt `?coord=`, `?seed=`, `?asteroid=`, ein nacktes `#<seed>`
//! und Fragment-Parameter (`#coord=..&asteroid=..`). Query-Parameter haben
//! Vorrang vor dem Fragment.

/// Aus einer Location gelesene Sitzungs-Parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Seed-Koordinate
    pub coord: Option<String>,
    /// Asteroiden-ID
    pub asteroid: Option<String>,
}

impl Location {
    /// Liest Seed und Asteroid aus einer URL, einem Query-/Fragment-String
    /// oder einer nackten Seed-Koordinate.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let (before_fragment, fragment) = match input.split_once('#') {
            Some((head, frag)) => (head, Some(frag)),
            None => (input, None),
        };
        let query = before_fragment.split_once('?').map(|(_, q)| q);

        let mut location = Self::default();
        if let Some(query) = query {
            location.apply_params(query);
        }
        if let Some(fragment) = fragment {
            if fragment.contains('=') {
                location.apply_params(fragment);
            } else if location.coord.is_none() && !fragment.is_empty() {
                location.coord = Some(percent_decode(fragment));
            }
        }
        if query.is_none() && fragment.is_none() && !input.is_empty() && !input.contains("://") {
            location.coord = Some(input.to_string());
        }
        location
    }

    fn apply_params(&mut self, params: &str) {
        for pair in params.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let slot = match key {
                "coord" | "seed" => &mut self.coord,
                "asteroid" => &mut self.asteroid,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(percent_decode(value));
            }
        }
    }
}

/// Dekodiert `%XX`-Sequenzen und `+`. Ungültige Sequenzen bleiben stehen.
fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                match hex {
                    Some(b) => {
                        out.push(b);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
