use std::sync::Arc;

use glam::Vec2;

use crate::core::SeedBundle;
use crate::shared::{DisplayToggle, Menu, MenuItem, ScrollPanel};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Seed über die konfigurierte Quelle laden
    SeedRequested {
        coord: String,
        asteroid: Option<String>,
    },
    /// Bereits dekodiertes Bundle übernehmen
    BundleReceived {
        coord: String,
        bundle: Arc<SeedBundle>,
        asteroid: Option<String>,
    },
    /// Hintergrund-Abruf fehlgeschlagen (Fehlertext)
    SeedFailed { message: String },
    /// Asteroid aus dem Asteroiden-Menü gewählt
    AsteroidSelected { index: usize },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: Vec2 },
    /// Kamera um ein Bildschirm-Delta verschieben
    CameraPan { delta: Vec2 },
    /// Zoom um einen Bildschirmpunkt (Mausrad, Pinch)
    CameraZoom { screen: Vec2, factor: f32 },
    /// Stufenweise hineinzoomen (um die Fenstermitte)
    ZoomInRequested,
    /// Stufenweise herauszoomen (um die Fenstermitte)
    ZoomOutRequested,
    /// Asteroid einpassen
    FitRequested,
    /// Feature auf der Karte angeklickt (Index in `LoadedAsteroid::features`)
    FeatureClicked { feature: usize },
    /// Zeile der Biom-Legende angeklickt (None = „Clear“)
    BiomeLegendClicked { position: Option<usize> },
    /// Zeile der Feature-Legende angeklickt (None = „Clear“)
    FeatureLegendClicked { index: Option<usize> },
    /// Klick ins Leere auf der Karte
    MapClickedEmpty,
    /// Klick auf das Info-Panel
    InfoPanelClicked,
    /// Panel scrollen (Pixel, positiv = nach unten)
    PanelScrolled { panel: ScrollPanel, delta: f32 },
    /// Tray-Icon oder Taste zum Umschalten eines Menüs
    MenuToggleRequested { menu: Menu, time: f64 },
    /// Alle Menüs schließen
    MenuCloseRequested,
    /// Eintrag eines Popup-Menüs gewählt
    MenuItemActivated { item: MenuItem },
    /// Anzeige-Schalter per Taste
    DisplayToggleRequested { toggle: DisplayToggle },
    /// Escape gedrückt
    EscapePressed,
    /// Screenshot mit aktueller Qualität
    ScreenshotRequested,
    /// Assets sind eingetroffen (Icon-Schlüssel und Pixelgröße)
    AssetsArrived { icons: Vec<(String, [u32; 2])> },
    /// Anwendung beenden
    ExitRequested,
}
