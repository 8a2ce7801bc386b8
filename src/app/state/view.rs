use glam::Vec2;

use crate::core::Camera2D;
use crate::shared::{DisplayOptions, InfoPanel, Menu, ScrollOffsets, Selection, ViewerOptions};

/// Zustand der Screenshot-Pipeline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenshotState {
    /// Verbleibende Ticks bis zur Aufnahme (0 = keine)
    pub pending: u8,
    /// Zeitpunkt der letzten erfolgreichen Speicherung
    pub saved_at: Option<f64>,
    /// Index in `ViewerOptions::screenshot_qualities`
    pub quality: usize,
    /// Graustufen
    pub bw: bool,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// 2D-Kamera für die Ansicht
    pub camera: Camera2D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: Vec2,
    /// Anzeige-Schalter
    pub display: DisplayOptions,
    /// Selektion aus Legenden oder Karte
    pub selection: Selection,
    /// Scroll-Offsets der Panels
    pub scroll: ScrollOffsets,
    /// Offenes Overlay
    pub menu: Menu,
    /// Zeit des letzten angenommenen Menü-Umschaltens
    pub last_menu_toggle: Option<f64>,
    /// Info-Panel
    pub info: InfoPanel,
    /// Screenshot-Pipeline
    pub screenshot: ScreenshotState,
    /// Aktuelle UI-Skalierung
    pub ui_scale: f32,
    /// Beim nächsten Frame mit bekannter Fenstergröße einpassen
    pub fit_on_load: bool,
    /// Legenden-Generation; jede Änderung verwirft gecachte Legendenbilder
    pub legend_generation: u64,
    /// Nächsten Frame neu komponieren
    pub redraw_requested: bool,
    /// Screenshot-Modus aktiv (Overlays ausgeblendet)
    pub screenshot_mode: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_options(&ViewerOptions::default())
    }
}

impl ViewState {
    /// Erstellt den Start-Zustand aus den Optionen.
    pub fn from_options(options: &ViewerOptions) -> Self {
        Self {
            camera: Camera2D::with_max_zoom(options.max_zoom),
            viewport_size: Vec2::ZERO,
            display: DisplayOptions::from_options(options),
            selection: Selection::default(),
            scroll: ScrollOffsets::default(),
            menu: Menu::None,
            last_menu_toggle: None,
            info: InfoPanel::default(),
            screenshot: ScreenshotState::default(),
            ui_scale: options.ui_scale,
            fit_on_load: false,
            legend_generation: 0,
            redraw_requested: true,
            screenshot_mode: false,
        }
    }

    /// Verwirft gecachte Legendenbilder.
    pub fn invalidate_legends(&mut self) {
        self.legend_generation = self.legend_generation.wrapping_add(1);
    }

    /// Liest und löscht das Redraw-Flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }
}
