//! Zentrale Konfiguration für den Asteroiden-Kartenbetrachter.
//!
//! `ViewerOptions` wird beim Start aus `asteroid_map_viewer.toml` gelesen.
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Zurückgeschrieben wird nichts.

use serde::{Deserialize, Serialize};

// ── Quelle ──────────────────────────────────────────────────────────

/// Basis-URL des Seed-Dienstes.
pub const API_BASE_URL: &str = "https://ingest.mapsnotincluded.org";
/// Bekannter Seed für den Start ohne Argumente.
pub const DEFAULT_COORD: &str = "SNDST-A-7-0-0-0";

// ── Darstellung ─────────────────────────────────────────────────────

/// Basis-Schriftgröße in Pixeln (vor UI-Skalierung).
pub const FONT_SIZE: f32 = 14.0;
/// Standard-UI-Skalierung.
pub const UI_SCALE: f32 = 1.0;
/// UI-Skalierung während eines Screenshots.
pub const SCREENSHOT_UI_SCALE: f32 = 4.0;
/// Faktor pro Schritt im Options-Menü.
pub const UI_SCALE_STEP: f32 = 1.25;
/// Untere Grenze der UI-Skalierung.
pub const UI_SCALE_MIN: f32 = 0.5;
/// Obere Grenze der UI-Skalierung.
pub const UI_SCALE_MAX: f32 = 4.0;
/// Grundskalierung der Feature-Icons.
pub const ICON_BASE_SCALE: f32 = 0.25;
/// Ab diesem Zoom werden Labels immer mit Namen beschriftet.
pub const LEGEND_ZOOM_THRESHOLD: f32 = 2.5;

// ── Kamera & Eingabe ────────────────────────────────────────────────

/// Zoom-Faktor pro Mausrad-Raste.
pub const WHEEL_ZOOM_FACTOR: f32 = 1.1;
/// Mindestabstand zwischen zwei Mausrad-Zooms im Browser.
pub const WEB_WHEEL_THROTTLE_MS: u64 = 75;
/// Entprellung für Menü-Umschalter.
pub const MENU_DEBOUNCE_MS: u64 = 200;
/// Pan-Schritt der Pfeiltasten in Bildschirm-Pixeln.
pub const KEY_PAN_STEP_PX: f32 = 40.0;
/// Scroll-Weg pro Mausrad-Raste über Panels.
pub const WHEEL_SCROLL_PX: f32 = 40.0;

// ── Screenshot & Status ─────────────────────────────────────────────

/// Anzeigedauer der Statuszeile nach einem Screenshot in Sekunden.
pub const STATUS_DURATION_S: f64 = 4.0;

/// Alle beim Start lesbaren Optionen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Quelle ──────────────────────────────────────────────────
    /// Basis-URL des Seed-Dienstes (`<base>/coordinate/<coord>`)
    pub api_base_url: String,
    /// Seed, der ohne `--coord` geladen wird
    pub default_coord: String,
    /// Asset-Verzeichnis oder `.zip`-Archiv (`icons/`, `textures/`)
    pub assets_dir: Option<String>,
    /// Zielverzeichnis für Screenshots
    pub screenshot_dir: String,

    // ── Schrift & UI ────────────────────────────────────────────
    /// Optionale TTF/OTF-Datei statt der eingebauten Schrift
    pub font_path: Option<String>,
    /// Basis-Schriftgröße in Pixeln
    pub font_size: f32,
    /// UI-Skalierung
    pub ui_scale: f32,

    // ── Karte ───────────────────────────────────────────────────
    /// Grundskalierung der Feature-Icons
    pub icon_base_scale: f32,
    /// Benutzer-Skalierung der Feature-Icons
    pub icon_user_scale: f32,
    /// Zoom-Schwelle für Namens- statt Nummern-Labels
    pub legend_zoom_threshold: f32,
    /// Maximaler Zoom
    pub max_zoom: f32,

    // ── Eingabe ─────────────────────────────────────────────────
    /// Zoom-Faktor pro Mausrad-Raste
    pub wheel_zoom_factor: f32,
    /// Mausrad-Drosselung in ms (0 = aus)
    pub wheel_throttle_ms: u64,
    /// Entprellung der Menü-Umschalter in ms
    pub menu_debounce_ms: u64,

    // ── Screenshot ──────────────────────────────────────────────
    /// Wählbare Screenshot-Skalierungen
    pub screenshot_qualities: Vec<u32>,

    // ── Start-Schalter ──────────────────────────────────────────
    /// Biom-Texturen anzeigen
    pub textures: bool,
    /// Nummern- statt Namens-Labels unterhalb der Zoom-Schwelle
    pub numbers: bool,
    /// Legenden anzeigen
    pub legends: bool,
    /// VSync (wird beim Start übernommen)
    pub vsync: bool,
    /// Nur bei Bedarf neu zeichnen
    pub power_saver: bool,
    /// Lineare statt Nearest-Filterung
    pub linear_filter: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            api_base_url: API_BASE_URL.to_string(),
            default_coord: DEFAULT_COORD.to_string(),
            assets_dir: None,
            screenshot_dir: ".".to_string(),

            font_path: None,
            font_size: FONT_SIZE,
            ui_scale: UI_SCALE,

            icon_base_scale: ICON_BASE_SCALE,
            icon_user_scale: 1.0,
            legend_zoom_threshold: LEGEND_ZOOM_THRESHOLD,
            max_zoom: crate::core::MAX_ZOOM,

            wheel_zoom_factor: WHEEL_ZOOM_FACTOR,
            wheel_throttle_ms: if cfg!(target_arch = "wasm32") {
                WEB_WHEEL_THROTTLE_MS
            } else {
                0
            },
            menu_debounce_ms: MENU_DEBOUNCE_MS,

            screenshot_qualities: vec![1, 2, 4],

            textures: true,
            numbers: true,
            legends: true,
            vsync: true,
            power_saver: true,
            linear_filter: false,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("asteroid_map_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("asteroid_map_viewer.toml")
    }

    /// Korrigiert unbrauchbare Werte (≤ 0, leere Listen) auf Standardwerte.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        self.font_size = positive(self.font_size, defaults.font_size);
        self.ui_scale = positive(self.ui_scale, defaults.ui_scale);
        self.icon_base_scale = positive(self.icon_base_scale, defaults.icon_base_scale);
        self.icon_user_scale = positive(self.icon_user_scale, defaults.icon_user_scale);
        self.max_zoom = positive(self.max_zoom, defaults.max_zoom);
        if self.wheel_zoom_factor <= 1.0 || !self.wheel_zoom_factor.is_finite() {
            self.wheel_zoom_factor = defaults.wheel_zoom_factor;
        }
        self.screenshot_qualities.retain(|&q| q > 0);
        if self.screenshot_qualities.is_empty() {
            self.screenshot_qualities = defaults.screenshot_qualities;
        }
        self
    }

    /// Effektive Schriftgröße bei UI-Skalierung `ui_scale`.
    pub fn scaled_font_size(&self, ui_scale: f32) -> f32 {
        self.font_size * ui_scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let opts: ViewerOptions = toml::from_str("ui_scale = 1.5\nnumbers = false\n").expect("TOML");
        assert_eq!(opts.ui_scale, 1.5);
        assert!(!opts.numbers);
        assert_eq!(opts.menu_debounce_ms, MENU_DEBOUNCE_MS);
        assert_eq!(opts.screenshot_qualities, vec![1, 2, 4]);
    }

    #[test]
    fn sanitized_replaces_invalid_values() {
        let opts = ViewerOptions {
            font_size: -3.0,
            wheel_zoom_factor: 0.5,
            screenshot_qualities: vec![0],
            ..ViewerOptions::default()
        }
        .sanitized();

        assert_eq!(opts.font_size, FONT_SIZE);
        assert_eq!(opts.wheel_zoom_factor, WHEEL_ZOOM_FACTOR);
        assert_eq!(opts.screenshot_qualities, vec![1, 2, 4]);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let opts = ViewerOptions::load_from_file(std::path::Path::new("/nonexistent/viewer.toml"));
        assert_eq!(opts, ViewerOptions::default());
    }
}
