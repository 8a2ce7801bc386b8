use std::sync::Arc;

use glam::Vec2;

use crate::core::SeedBundle;
use crate::shared::{DisplayToggle, Menu, ScrollPanel};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // === Sitzung ===
    /// Seed über die Seed-Quelle abrufen und laden
    FetchSeed {
        coord: String,
        asteroid: Option<String>,
    },
    /// Bundle übernehmen und Asteroid wählen
    LoadBundle {
        coord: String,
        bundle: Arc<SeedBundle>,
        asteroid: Option<String>,
    },
    /// Ladefehler anzeigen
    ReportLoadError { message: String },
    /// Anderen Asteroiden des Bundles laden
    SwitchAsteroid { index: usize },
    /// Pixelgrößen geladener Icons übernehmen
    RecordIconSizes { icons: Vec<(String, [u32; 2])> },

    // === Kamera & Viewport ===
    /// Viewport-Größe setzen (Kamera folgt der Fenstermitte)
    SetViewportSize { size: Vec2 },
    /// Kamera verschieben (Bildschirm-Pixel)
    PanCamera { delta: Vec2 },
    /// Zoom um Bildschirmpunkt
    ZoomCameraAbout { screen: Vec2, factor: f32 },
    /// Asteroid einpassen
    FitCamera,

    // === Selektion ===
    /// Feature auf der Karte wählen: zentrieren und Info-Panel anheften
    SelectFeature { feature: usize },
    /// Biom-Selektion setzen
    SetBiomeSelection { position: Option<usize> },
    /// Feature-Selektion setzen
    SetFeatureSelection { index: Option<usize> },
    /// Info-Panel lösen und ausblenden
    DismissInfoPanel,

    // === Overlays ===
    /// Menü umschalten (mit Entprellung)
    ToggleMenu { menu: Menu, time: f64 },
    /// Menü direkt öffnen
    OpenMenu { menu: Menu },
    /// Alle Menüs schließen
    CloseMenus,
    /// Panel scrollen
    ScrollPanel { panel: ScrollPanel, delta: f32 },

    // === Anzeige ===
    /// Anzeige-Schalter umschalten
    ToggleDisplay { toggle: DisplayToggle },
    /// UI-Skalierung setzen
    SetUiScale { scale: f32 },

    // === Screenshot ===
    /// Screenshot-Qualität wählen
    SetScreenshotQuality { index: usize },
    /// Graustufen umschalten
    ToggleScreenshotBw,
    /// Screenshot vormerken
    RequestScreenshot,

    // === Anwendungssteuerung ===
    /// Nächsten Frame neu zeichnen
    RequestRedraw,
    /// Anwendung beenden
    RequestExit,
}
