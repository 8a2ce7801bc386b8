//! CPU-Rendering der Asteroiden-Karte.
//!
//! Der `Renderer` komponiert eine `RenderScene` in fester Reihenfolge in eine
//! `Canvas`: Hintergrund, Biome, Features und Labels, Overlays, Hervorhebungen,
//! Fadenkreuz, zuletzt das offene Menü. Dieselbe Komposition dient dem
//! Fenster und dem Offscreen-Screenshot.

pub mod asset_loader;
pub mod assets;
mod biome_renderer;
mod feature_renderer;
pub mod fonts;
pub mod labels;
pub mod legend_cache;
mod overlay_renderer;
mod types;

pub use asset_loader::{AssetBatch, AssetLoader};
pub use assets::{AssetCache, AssetEntry, AssetSource};
pub use biome_renderer::TEXTURE_SCALE;
pub use legend_cache::LegendCache;

use asteroid_raster::{Canvas, Font, RasterError};
use image::RgbaImage;

use crate::shared::{AssetKey, RenderScene, SceneRenderer, ViewerOptions};
use biome_renderer::BiomeRenderer;
use feature_renderer::FeatureRenderer;
use overlay_renderer::OverlayRenderer;
use types::{RenderContext, BACKGROUND};

/// Haupt-Renderer für die Asteroiden-Karte.
///
/// Verwaltet Assets, Schrift und Legenden-Cache und bietet eine schmale API:
/// `new()` + `request_assets()`/`drain_assets()` + `render()`.
pub struct Renderer {
    assets: AssetCache,
    loader: AssetLoader,
    font: Font,
    legend_cache: LegendCache,
    biome_renderer: BiomeRenderer,
    feature_renderer: FeatureRenderer,
    overlay_renderer: OverlayRenderer,
}

impl Renderer {
    /// Erstellt einen Renderer mit Asset-Thread für die Quelle aus den Optionen.
    pub fn new(options: &ViewerOptions) -> Result<Self, RasterError> {
        let source = AssetSource::from_path(options.assets_dir.as_deref());
        Self::with_loader(options, AssetLoader::spawn(source))
    }

    /// Erstellt einen Renderer mit vorgegebenem Loader (z.B. synchron für die CLI).
    pub fn with_loader(options: &ViewerOptions, loader: AssetLoader) -> Result<Self, RasterError> {
        Ok(Self {
            assets: AssetCache::new(),
            loader,
            font: fonts::load_font(options)?,
            legend_cache: LegendCache::new(),
            biome_renderer: BiomeRenderer,
            feature_renderer: FeatureRenderer,
            overlay_renderer: OverlayRenderer,
        })
    }

    /// Fordert Assets beim Loader an.
    ///
    /// Beim synchronen Loader enthält der Batch bereits alle Ergebnisse.
    pub fn request_assets(&mut self, keys: Vec<AssetKey>) -> AssetBatch {
        if keys.is_empty() {
            return AssetBatch::default();
        }
        self.loader.request(&mut self.assets, keys)
    }

    /// Übernimmt fertig geladene Assets.
    pub fn drain_assets(&mut self) -> AssetBatch {
        self.loader.drain(&mut self.assets)
    }

    /// Noch ausstehende Assets
    pub fn assets_in_flight(&self) -> usize {
        self.loader.in_flight()
    }

    /// Asset-Cache (read-only)
    pub fn assets(&self) -> &AssetCache {
        &self.assets
    }

    /// Legenden-Cache (read-only)
    pub fn legend_cache(&self) -> &LegendCache {
        &self.legend_cache
    }

    /// Rendert die Szene in eine neue Fläche in Viewport-Größe.
    pub fn render(&mut self, scene: &RenderScene<'_>) -> Result<Canvas, RasterError> {
        let width = scene.viewport.x.round().max(1.0) as u32;
        let height = scene.viewport.y.round().max(1.0) as u32;
        let mut canvas = Canvas::new(width, height)?;
        self.compose(scene, &mut canvas)?;
        Ok(canvas)
    }

    /// Komponiert die Szene in `canvas`.
    pub fn compose(&mut self, scene: &RenderScene<'_>, canvas: &mut Canvas) -> Result<(), RasterError> {
        let ctx = RenderContext::new(scene, &self.assets, &self.font);
        let overlays = !scene.screenshot_mode;

        canvas.clear(BACKGROUND);

        let highlights = match scene.asteroid {
            Some(asteroid) => {
                self.biome_renderer.render(canvas, &ctx, asteroid);
                self.feature_renderer.render(canvas, &ctx, asteroid)
            }
            None => Vec::new(),
        };

        self.overlay_renderer.render_header(canvas, &ctx);
        if let Some(asteroid) = scene.asteroid {
            self.overlay_renderer
                .render_legends(canvas, &ctx, asteroid, &mut self.legend_cache)?;
        }
        if overlays {
            self.overlay_renderer.render_tray(canvas, &ctx);
            self.overlay_renderer.render_info(canvas, &ctx);
            self.overlay_renderer.render_status(canvas, &ctx);
        }

        self.feature_renderer.render_highlights(canvas, &ctx, &highlights);

        if overlays {
            if let Some(asteroid) = scene.asteroid {
                self.overlay_renderer.render_crosshair(canvas, &ctx, asteroid);
            }
            self.overlay_renderer.render_menu(canvas, &ctx)?;
        }

        log::trace!(
            "Frame komponiert: {}x{}, {} Hervorhebungen",
            canvas.width(),
            canvas.height(),
            highlights.len()
        );
        Ok(())
    }
}

impl SceneRenderer for Renderer {
    fn render_offscreen(
        &mut self,
        scene: &RenderScene<'_>,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, RasterError> {
        let mut canvas = Canvas::new(width, height)?;
        self.compose(scene, &mut canvas)?;
        Ok(canvas.to_rgba_image())
    }
}
