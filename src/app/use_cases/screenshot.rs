//! Use-Case-Funktionen für die Screenshot-Pipeline.
//!
//! Ablauf über drei Ticks: Anforderung setzt `pending = 2`, der nächste Tick
//! bereitet vor (`pending = 1`, Redraw), der übernächste komponiert die ganze
//! Karte offscreen, speichert sie als BMP und meldet „Saved <Datei>“.

use std::io::Cursor;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use glam::Vec2;
use image::{ImageFormat, RgbaImage};

use crate::app::render_scene;
use crate::app::{AppState, StatusLine};
use crate::core::{Camera2D, WORLD_SCALE};
use crate::shared::options::{SCREENSHOT_UI_SCALE, STATUS_DURATION_S};
use crate::shared::{InfoPanel, Menu, SceneRenderer};

/// Größte erlaubte Kantenlänge eines Screenshots in Pixeln.
const MAX_EDGE_PX: u32 = 32_768;

/// Fehler beim Aufnehmen oder Speichern eines Screenshots.
#[derive(Debug, thiserror::Error)]
pub enum ScreenshotError {
    /// Kein Asteroid geladen
    #[error("Kein Asteroid geladen")]
    NothingLoaded,
    /// Zielbild zu groß oder leer
    #[error("Screenshot {width}x{height} kann nicht angelegt werden")]
    Allocation {
        /// Breite in Pixeln
        width: u32,
        /// Höhe in Pixeln
        height: u32,
    },
    /// Offscreen-Rendering fehlgeschlagen
    #[error("Rendering fehlgeschlagen: {0}")]
    Render(#[from] asteroid_raster::RasterError),
    /// Kodieren fehlgeschlagen
    #[error("Kodieren fehlgeschlagen: {0}")]
    Encode(#[from] image::ImageError),
    /// Schreiben fehlgeschlagen
    #[error("{path} konnte nicht geschrieben werden: {source}")]
    Write {
        /// Zielpfad
        path: String,
        /// Ursache
        source: std::io::Error,
    },
}

/// Wählt eine Qualitätsstufe (Index in `screenshot_qualities`).
pub fn set_quality(state: &mut AppState, index: usize) {
    if index < state.options.screenshot_qualities.len() {
        state.view.screenshot.quality = index;
        state.request_redraw();
    }
}

/// Schaltet Graustufen um.
pub fn toggle_bw(state: &mut AppState) {
    state.view.screenshot.bw = !state.view.screenshot.bw;
    state.request_redraw();
}

/// Fordert einen Screenshot an. Ignoriert, solange einer aussteht oder nichts geladen ist.
pub fn request(state: &mut AppState) -> bool {
    if state.view.screenshot.pending > 0 || !state.has_asteroid() {
        return false;
    }
    state.view.screenshot.pending = 2;
    state.request_redraw();
    true
}

/// Vergrößerungsfaktor der gewählten Qualitätsstufe.
pub fn quality_scale(state: &AppState) -> u32 {
    state
        .options
        .screenshot_qualities
        .get(state.view.screenshot.quality)
        .copied()
        .unwrap_or(1)
        .max(1)
}

/// Zielgröße: ganzer Asteroid bei Zoom `s`.
pub fn target_size(state: &AppState) -> Option<(u32, u32)> {
    let asteroid = state.session.current.as_ref()?;
    let s = quality_scale(state);
    let px = WORLD_SCALE as u32 * s;
    let w = (asteroid.size.x.max(0) as u32).checked_mul(px)?;
    let h = (asteroid.size.y.max(0) as u32).checked_mul(px)?;
    Some((w, h))
}

/// View-Felder, die während der Aufnahme ersetzt werden.
struct SavedView {
    camera: Camera2D,
    viewport_size: Vec2,
    ui_scale: f32,
    menu: Menu,
    info: InfoPanel,
    screenshot_mode: bool,
}

/// Zustand im Screenshot-Modus. Beim Verlassen (Drop) wird die Ansicht
/// vollständig wiederhergestellt, auch wenn das Rendern fehlschlägt.
pub struct ScreenshotScope<'a> {
    state: &'a mut AppState,
    saved: SavedView,
}

impl<'a> ScreenshotScope<'a> {
    /// Stellt Kamera und Overlays für ein `width × height`-Bild bei Zoom `zoom` ein.
    pub fn enter(state: &'a mut AppState, width: u32, height: u32, zoom: f32) -> Self {
        let view = &mut state.view;
        let saved = SavedView {
            camera: view.camera,
            viewport_size: view.viewport_size,
            ui_scale: view.ui_scale,
            menu: view.menu,
            info: std::mem::take(&mut view.info),
            screenshot_mode: view.screenshot_mode,
        };
        view.camera.offset = Vec2::ZERO;
        view.camera.zoom = zoom;
        view.viewport_size = Vec2::new(width as f32, height as f32);
        view.ui_scale = SCREENSHOT_UI_SCALE;
        view.menu = Menu::None;
        view.screenshot_mode = true;
        Self { state, saved }
    }
}

impl Deref for ScreenshotScope<'_> {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        self.state
    }
}

impl DerefMut for ScreenshotScope<'_> {
    fn deref_mut(&mut self) -> &mut AppState {
        self.state
    }
}

impl Drop for ScreenshotScope<'_> {
    fn drop(&mut self) {
        let view = &mut self.state.view;
        view.camera = self.saved.camera;
        view.viewport_size = self.saved.viewport_size;
        view.ui_scale = self.saved.ui_scale;
        view.menu = self.saved.menu;
        view.info = std::mem::take(&mut self.saved.info);
        view.screenshot_mode = self.saved.screenshot_mode;
    }
}

/// Komponiert den ganzen Asteroiden offscreen (ggf. in Graustufen).
pub fn capture(
    state: &mut AppState,
    renderer: &mut dyn SceneRenderer,
) -> Result<RgbaImage, ScreenshotError> {
    let (width, height) = target_size(state).ok_or(ScreenshotError::NothingLoaded)?;
    if width == 0 || height == 0 || width > MAX_EDGE_PX || height > MAX_EDGE_PX {
        return Err(ScreenshotError::Allocation { width, height });
    }
    let bw = state.view.screenshot.bw;
    let zoom = quality_scale(state) as f32;

    let mut image = {
        let scope = ScreenshotScope::enter(state, width, height, zoom);
        let scene = render_scene::build(&scope);
        renderer.render_offscreen(&scene, width, height)?
    };
    if bw {
        to_grayscale(&mut image);
    }
    Ok(image)
}

/// Wandelt in Graustufen um: `(299·R + 587·G + 114·B + 500) / 1000`, Alpha bleibt.
pub fn to_grayscale(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let y = (299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000;
        let y = y.min(255) as u8;
        pixel.0 = [y, y, y, a];
    }
}

/// Kodiert ein Bild als BMP.
pub fn encode_bmp(image: &RgbaImage) -> Result<Vec<u8>, ScreenshotError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Bmp)?;
    Ok(bytes)
}

/// Speichert ein Bild als PNG (Kommandozeilen-Modus).
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), ScreenshotError> {
    image.save_with_format(path, ImageFormat::Png).map_err(|e| match e {
        image::ImageError::IoError(source) => ScreenshotError::Write {
            path: path.display().to_string(),
            source,
        },
        other => ScreenshotError::Encode(other),
    })
}

/// Dateiname `<coord>-<YYYYMMDD-hhmmss>.bmp` für einen UTC-Zeitpunkt.
pub fn file_name(coord: &str, at: DateTime<Utc>) -> String {
    format!("{}-{}.bmp", coord, at.format("%Y%m%d-%H%M%S"))
}

/// Schreibt ein BMP in `screenshot_dir` und gibt den Pfad zurück.
pub fn save_bmp(state: &AppState, image: &RgbaImage) -> Result<PathBuf, ScreenshotError> {
    let bytes = encode_bmp(image)?;
    let path = Path::new(&state.options.screenshot_dir).join(file_name(&state.session.coord, Utc::now()));
    std::fs::write(&path, bytes).map_err(|source| ScreenshotError::Write {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

/// Treibt die Pipeline um einen Tick voran. Gibt den Pfad zurück, sobald gespeichert wurde.
pub fn advance(
    state: &mut AppState,
    renderer: &mut dyn SceneRenderer,
    now: f64,
) -> Result<Option<PathBuf>, ScreenshotError> {
    match state.view.screenshot.pending {
        0 => Ok(None),
        2 => {
            state.view.screenshot.pending = 1;
            state.request_redraw();
            Ok(None)
        }
        _ => {
            state.view.screenshot.pending = 0;
            let image = capture(state, renderer)?;
            let path = save_bmp(state, &image)?;
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            log::info!("Screenshot gespeichert: {}", path.display());
            state.session.status = Some(StatusLine {
                text: format!("Saved {name}"),
                until: Some(now + STATUS_DURATION_S),
            });
            state.view.screenshot.saved_at = Some(now);
            state.request_redraw();
            Ok(Some(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::session::load_bundle;
    use crate::app::use_cases::test_support::bundle_100x50;
    use crate::shared::RenderScene;
    use image::Rgba;

    /// Merkt sich die Szene der letzten Aufnahme und liefert eine Vollfarbe.
    #[derive(Default)]
    struct RecordingRenderer {
        seen: Option<(Camera2D, Vec2, f32, bool, Menu, bool)>,
    }

    impl SceneRenderer for RecordingRenderer {
        fn render_offscreen(
            &mut self,
            scene: &RenderScene<'_>,
            width: u32,
            height: u32,
        ) -> Result<RgbaImage, asteroid_raster::RasterError> {
            self.seen = Some((
                scene.camera,
                scene.viewport,
                scene.ui_scale,
                scene.screenshot_mode,
                scene.menu,
                scene.info.shown,
            ));
            Ok(RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255])))
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new();
        load_bundle(&mut state, "SNDST-A-7-0-0-0".into(), bundle_100x50(), None).expect("lädt");
        crate::app::use_cases::viewport::resize(&mut state, Vec2::new(640.0, 480.0));
        state
    }

    #[test]
    fn capture_renders_whole_asteroid_and_restores_view() {
        let mut state = loaded_state();
        state.view.menu = Menu::Options;
        state.view.info.shown = true;
        state.view.screenshot.quality = 1;
        let before = state.view.clone();
        let mut renderer = RecordingRenderer::default();

        let image = capture(&mut state, &mut renderer).expect("Aufnahme");

        assert_eq!(image.dimensions(), (400, 200));
        let (camera, viewport, ui_scale, mode, menu, info) = renderer.seen.expect("gerendert");
        assert_eq!(camera.offset, Vec2::ZERO);
        assert_eq!(camera.zoom, 2.0);
        assert_eq!(viewport, Vec2::new(400.0, 200.0));
        assert_eq!(ui_scale, SCREENSHOT_UI_SCALE);
        assert!(mode);
        assert_eq!(menu, Menu::None);
        assert!(!info);
        assert_eq!(state.view, before);
    }

    #[test]
    fn grayscale_uses_rounded_luma_weights() {
        let mut image = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 128]));
        to_grayscale(&mut image);
        // (59800 + 58700 + 5700 + 500) / 1000 = 124
        assert_eq!(image.get_pixel(0, 0).0, [124, 124, 124, 128]);
    }

    #[test]
    fn request_is_ignored_while_pending_or_unloaded() {
        let mut empty = AppState::new();
        assert!(!request(&mut empty));

        let mut state = loaded_state();
        assert!(request(&mut state));
        assert!(!request(&mut state));
        assert_eq!(state.view.screenshot.pending, 2);
    }

    #[test]
    fn pipeline_saves_bmp_on_second_tick() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut state = loaded_state();
        state.options.screenshot_dir = dir.path().display().to_string();
        state.view.screenshot.bw = true;
        let mut renderer = RecordingRenderer::default();
        request(&mut state);

        assert!(advance(&mut state, &mut renderer, 1.0).expect("Tick").is_none());
        assert_eq!(state.view.screenshot.pending, 1);
        assert!(renderer.seen.is_none());

        let path = advance(&mut state, &mut renderer, 1.1)
            .expect("Tick")
            .expect("gespeichert");
        assert_eq!(state.view.screenshot.pending, 0);

        let name = path.file_name().expect("Name").to_string_lossy().into_owned();
        assert!(name.starts_with("SNDST-A-7-0-0-0-"));
        assert!(name.ends_with(".bmp"));
        assert_eq!(state.session.status_text(), Some(format!("Saved {name}").as_str()));

        let saved = image::open(&path).expect("BMP lesbar").to_rgba8();
        assert_eq!(saved.dimensions(), (200, 100));
        assert_eq!(saved.get_pixel(0, 0).0[..3], [124, 124, 124]);
    }

    #[test]
    fn file_name_carries_utc_stamp() {
        use chrono::TimeZone;

        let epoch = Utc.timestamp_opt(0, 0).single().expect("Epoche");
        assert_eq!(file_name("SEED", epoch), "SEED-19700101-000000.bmp");

        let leap_day = Utc
            .with_ymd_and_hms(2024, 2, 29, 12, 34, 56)
            .single()
            .expect("Schalttag");
        assert_eq!(file_name("SNDST-A-7-0-0-0", leap_day), "SNDST-A-7-0-0-0-20240229-123456.bmp");
    }
}
