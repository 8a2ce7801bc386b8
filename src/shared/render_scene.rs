//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Die Szene borgt aus dem AppState und lebt nur für einen Frame.

use glam::Vec2;
use image::RgbaImage;

use super::display::{DisplayOptions, InfoPanel, Menu, ScrollOffsets, ScrollPanel, Selection};
use super::layout::{feature_icon_scale, UiLayout};
use super::options::ViewerOptions;
use crate::core::{Camera2D, LoadedAsteroid, ScreenRect};

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderScene<'a> {
    /// Aktuell geladener Asteroid (None = nichts geladen)
    pub asteroid: Option<&'a LoadedAsteroid>,
    /// Seed-Koordinate für die Kopfzeile
    pub coord: &'a str,
    /// IDs aller Asteroiden im Bundle (Asteroiden-Menü)
    pub asteroid_ids: &'a [String],
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Zielgröße in Pixeln
    pub viewport: Vec2,
    /// Anzeige-Schalter
    pub display: DisplayOptions,
    /// Selektion
    pub selection: Selection,
    /// Scroll-Offsets
    pub scroll: ScrollOffsets,
    /// Offenes Overlay
    pub menu: Menu,
    /// Info-Panel
    pub info: &'a InfoPanel,
    /// Statustext (Fehler, „Saved …“)
    pub status: Option<&'a str>,
    /// Aktuelle UI-Skalierung
    pub ui_scale: f32,
    /// Screenshot-Modus: Overlays und Fadenkreuz werden ausgelassen
    pub screenshot_mode: bool,
    /// Optionen
    pub options: &'a ViewerOptions,
    /// Generation der Legenden (ändert sich bei Asteroiden-Wechsel)
    pub legend_generation: u64,
    /// Index der gewählten Screenshot-Qualität
    pub shot_quality: usize,
    /// Screenshot in Graustufen
    pub shot_bw: bool,
}

impl RenderScene<'_> {
    /// Gibt zurück, ob ein Asteroid zum Zeichnen vorhanden ist.
    pub fn has_asteroid(&self) -> bool {
        self.asteroid.is_some()
    }

    /// Overlay-Layout dieses Frames
    pub fn layout(&self) -> UiLayout {
        UiLayout::new(self.viewport, self.ui_scale, self.options.font_size)
    }

    /// Nummern statt Namen auf der Karte?
    pub fn numeric_labels(&self) -> bool {
        numeric_labels(self.display.numbers, self.camera.zoom, self.options.legend_zoom_threshold)
    }

    /// Biom-Legende sichtbar?
    pub fn biome_legend_visible(&self) -> bool {
        self.display.legends && self.has_asteroid()
    }

    /// Feature-Legende sichtbar? Nur nötig, solange die Karte Nummern zeigt.
    pub fn feature_legend_visible(&self) -> bool {
        self.biome_legend_visible() && self.numeric_labels()
    }

    /// Skalierung der Feature-Icons
    pub fn icon_scale(&self) -> f32 {
        feature_icon_scale(self.camera.zoom, self.ui_scale, self.options)
    }

    /// Sichtbares Rechteck und Zeilenzahl eines scrollbaren Panels.
    ///
    /// Legenden enthalten eine zusätzliche „Clear“-Zeile am Ende.
    /// `None`, wenn das Panel in diesem Frame nicht angezeigt wird.
    pub fn panel(&self, panel: ScrollPanel) -> Option<(ScreenRect, usize)> {
        let asteroid = self.asteroid?;
        let layout = self.layout();
        match panel {
            ScrollPanel::BiomeLegend if self.biome_legend_visible() => {
                let rows = asteroid.biome_legend.len() + 1;
                Some((layout.biome_legend(rows), rows))
            }
            ScrollPanel::FeatureLegend if self.feature_legend_visible() => {
                let rows = asteroid.feature_legend.len() + 1;
                Some((layout.feature_legend(rows), rows))
            }
            ScrollPanel::GeyserList if self.menu == Menu::GeyserList => {
                Some((layout.geyser_list_body(), asteroid.features.len()))
            }
            _ => None,
        }
    }

    /// Scroll-Offset eines Panels
    pub fn scroll_of(&self, panel: ScrollPanel) -> f32 {
        match panel {
            ScrollPanel::BiomeLegend => self.scroll.biome_legend,
            ScrollPanel::FeatureLegend => self.scroll.feature_legend,
            ScrollPanel::GeyserList => self.scroll.geyser_list,
        }
    }
}

/// Label-Regel: Nummern genau dann, wenn aktiviert und Zoom unter der Schwelle.
pub fn numeric_labels(numbers_enabled: bool, zoom: f32, threshold: f32) -> bool {
    numbers_enabled && zoom < threshold
}

/// Offscreen-Rendering für Screenshots.
///
/// Der Renderer komponiert die Szene einmal in ein Bild der gegebenen Größe.
pub trait SceneRenderer {
    /// Rendert `scene` in ein RGBA-Bild mit `width × height` Pixeln.
    fn render_offscreen(
        &mut self,
        scene: &RenderScene<'_>,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, asteroid_raster::RasterError>;
}
