//! Anzeige-Modell, das `app` pflegt und `render` liest: Schalter, Selektion, Menüs, Info-Panel.

/// Globale Anzeige-Schalter. Überleben einen Asteroiden-Wechsel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Biom-Texturen statt Flächenfarben
    pub textures: bool,
    /// Nummern-Labels unterhalb der Zoom-Schwelle
    pub numbers: bool,
    /// Legenden sichtbar
    pub legends: bool,
    /// VSync (wirkt ab dem nächsten Start)
    pub vsync: bool,
    /// Nur bei Bedarf neu zeichnen
    pub power_saver: bool,
    /// Lineare Texturfilterung
    pub linear_filter: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            textures: true,
            numbers: true,
            legends: true,
            vsync: true,
            power_saver: true,
            linear_filter: false,
        }
    }
}

impl DisplayOptions {
    /// Startwerte aus den Optionen.
    pub fn from_options(options: &super::ViewerOptions) -> Self {
        Self {
            textures: options.textures,
            numbers: options.numbers,
            legends: options.legends,
            vsync: options.vsync,
            power_saver: options.power_saver,
            linear_filter: options.linear_filter,
        }
    }

    /// Aktueller Wert eines Schalters
    pub fn get(&self, toggle: DisplayToggle) -> bool {
        match toggle {
            DisplayToggle::Textures => self.textures,
            DisplayToggle::Numbers => self.numbers,
            DisplayToggle::Legends => self.legends,
            DisplayToggle::Vsync => self.vsync,
            DisplayToggle::PowerSaver => self.power_saver,
            DisplayToggle::LinearFilter => self.linear_filter,
        }
    }

    /// Schaltet einen Schalter um.
    pub fn toggle(&mut self, toggle: DisplayToggle) {
        let flag = match toggle {
            DisplayToggle::Textures => &mut self.textures,
            DisplayToggle::Numbers => &mut self.numbers,
            DisplayToggle::Legends => &mut self.legends,
            DisplayToggle::Vsync => &mut self.vsync,
            DisplayToggle::PowerSaver => &mut self.power_saver,
            DisplayToggle::LinearFilter => &mut self.linear_filter,
        };
        *flag = !*flag;
    }
}

/// Einzelner Anzeige-Schalter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayToggle {
    /// Biom-Texturen
    Textures,
    /// Nummern-Labels
    Numbers,
    /// Legenden
    Legends,
    /// VSync
    Vsync,
    /// Stromsparmodus
    PowerSaver,
    /// Lineare Filterung
    LinearFilter,
}

impl DisplayToggle {
    /// Alle Schalter in Menü-Reihenfolge
    pub const ALL: [DisplayToggle; 6] = [
        Self::Textures,
        Self::Numbers,
        Self::Legends,
        Self::Vsync,
        Self::PowerSaver,
        Self::LinearFilter,
    ];

    /// Beschriftung im Options-Menü
    pub fn label(self) -> &'static str {
        match self {
            Self::Textures => "Textures",
            Self::Numbers => "Numbers",
            Self::Legends => "Legends",
            Self::Vsync => "VSync",
            Self::PowerSaver => "Power saver",
            Self::LinearFilter => "Linear filter",
        }
    }
}

/// Selektion über Legenden oder Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Position in der Biom-Legende
    pub biome: Option<usize>,
    /// Index (ab 1) in der Feature-Legende
    pub feature: Option<usize>,
}

impl Selection {
    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.biome.is_none() && self.feature.is_none()
    }
}

/// Scroll-Offsets der scrollbaren Panels in Pixeln.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffsets {
    /// Biom-Legende
    pub biome_legend: f32,
    /// Feature-Legende
    pub feature_legend: f32,
    /// Vollbild-Feature-Liste
    pub geyser_list: f32,
}

/// Scrollbare Panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollPanel {
    /// Biom-Legende links
    BiomeLegend,
    /// Feature-Legende rechts
    FeatureLegend,
    /// Vollbild-Feature-Liste
    GeyserList,
}

impl ScrollOffsets {
    /// Offset eines Panels (veränderbar)
    pub fn get_mut(&mut self, panel: ScrollPanel) -> &mut f32 {
        match panel {
            ScrollPanel::BiomeLegend => &mut self.biome_legend,
            ScrollPanel::FeatureLegend => &mut self.feature_legend,
            ScrollPanel::GeyserList => &mut self.geyser_list,
        }
    }
}

/// Geschlossene Menge der Overlays (höchstens eines offen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Menu {
    /// Kein Overlay
    #[default]
    None,
    /// Screenshot-Menü
    Shot,
    /// Options-Menü
    Options,
    /// Asteroiden-Auswahl
    Asteroid,
    /// Tastenbelegung
    Help,
    /// Vollbild-Feature-Liste
    GeyserList,
}

impl Menu {
    /// Gibt `true` zurück, wenn ein Overlay offen ist.
    pub fn is_open(self) -> bool {
        self != Self::None
    }

    /// Position des zugehörigen Tray-Icons
    pub fn tray_slot(self) -> Option<usize> {
        match self {
            Self::Shot => Some(0),
            Self::Options => Some(1),
            Self::Asteroid => Some(2),
            Self::GeyserList => Some(3),
            Self::None | Self::Help => None,
        }
    }

    /// Menü zu einer Tray-Position
    pub fn from_tray_slot(slot: usize) -> Self {
        match slot {
            0 => Self::Shot,
            1 => Self::Options,
            2 => Self::Asteroid,
            3 => Self::GeyserList,
            _ => Self::None,
        }
    }

    /// Klickbare Einträge eines Popup-Menüs.
    pub fn items(self, quality_count: usize, asteroid_count: usize) -> Vec<MenuItem> {
        match self {
            Self::Shot => (0..quality_count)
                .map(MenuItem::Quality)
                .chain([MenuItem::ToggleBw, MenuItem::Capture])
                .collect(),
            Self::Options => DisplayToggle::ALL
                .into_iter()
                .map(MenuItem::Toggle)
                .chain([MenuItem::UiScaleUp, MenuItem::UiScaleDown, MenuItem::Help])
                .collect(),
            Self::Asteroid => (0..asteroid_count).map(MenuItem::Asteroid).collect(),
            Self::None | Self::Help | Self::GeyserList => Vec::new(),
        }
    }
}

/// Ein Eintrag eines Popup-Menüs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Screenshot-Qualität wählen (Index in die Qualitätsliste)
    Quality(usize),
    /// Graustufen umschalten
    ToggleBw,
    /// Screenshot auslösen
    Capture,
    /// Anzeige-Schalter umschalten
    Toggle(DisplayToggle),
    /// UI vergrößern
    UiScaleUp,
    /// UI verkleinern
    UiScaleDown,
    /// Hilfe anzeigen
    Help,
    /// Asteroid wechseln (Index im Bundle)
    Asteroid(usize),
}

/// Tastenbelegung für das Hilfe-Overlay (Taste, Wirkung).
pub const HELP_LINES: &[(&str, &str)] = &[
    ("Drag / Touch", "Pan"),
    ("Wheel / Pinch", "Zoom"),
    ("+ / -", "Zoom about centre"),
    ("Home / F", "Fit asteroid"),
    ("Arrows", "Pan"),
    ("T", "Textures"),
    ("N", "Numbers"),
    ("L", "Legends"),
    ("G", "Feature list"),
    ("P", "Screenshot"),
    ("H", "This help"),
    ("Esc", "Close menus"),
];

/// Info-Panel zum zuletzt gewählten Feature.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoPanel {
    /// Sichtbar
    pub shown: bool,
    /// Angeheftet (bleibt bis zum Klick ins Leere)
    pub pinned: bool,
    /// Mehrzeiliger Text
    pub text: String,
    /// Icon-Schlüssel des Features
    pub icon_key: String,
}

impl InfoPanel {
    /// Blendet das Panel aus und löst es.
    pub fn hide(&mut self) {
        self.shown = false;
        self.pinned = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tray_slots_round_trip_for_tray_menus() {
        for menu in [Menu::Shot, Menu::Options, Menu::Asteroid, Menu::GeyserList] {
            let slot = menu.tray_slot().expect("Tray-Menü hat ein Icon");
            assert_eq!(Menu::from_tray_slot(slot), menu);
        }
        assert_eq!(Menu::Help.tray_slot(), None);
    }

    #[test]
    fn shot_menu_lists_qualities_then_bw_and_capture() {
        let items = Menu::Shot.items(3, 0);
        assert_eq!(items.len(), 5);
        assert_eq!(items[0], MenuItem::Quality(0));
        assert_eq!(items[4], MenuItem::Capture);
    }

    #[test]
    fn toggle_flips_only_the_named_flag() {
        let mut display = DisplayOptions::default();
        display.toggle(DisplayToggle::Numbers);
        assert!(!display.numbers);
        assert!(display.textures);
        assert!(!display.get(DisplayToggle::Numbers));
    }
}
