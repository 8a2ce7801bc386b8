use crate::app::CommandLog;
use crate::shared::ViewerOptions;

use super::{SessionState, ViewState};

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Sitzung: Bundle, aktueller Asteroid, Asset-Warteschlange, Status
    pub session: SessionState,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Beim Start gelesene Optionen
    pub options: ViewerOptions,
    /// Zeit des aktuellen Ticks in Sekunden
    pub now: f64,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            session: SessionState::new(options.default_coord.clone()),
            view: ViewState::from_options(&options),
            command_log: CommandLog::new(),
            options,
            now: 0.0,
            should_exit: false,
        }
    }

    /// Gibt zurück, ob ein Asteroid geladen ist.
    pub fn has_asteroid(&self) -> bool {
        self.session.current.is_some()
    }

    /// Weltgröße des aktuellen Asteroiden (0 wenn keiner geladen)
    pub fn world_size(&self) -> glam::Vec2 {
        self.session
            .current
            .as_ref()
            .map_or(glam::Vec2::ZERO, |a| a.world_size())
    }

    /// Setzt das Redraw-Flag.
    pub fn request_redraw(&mut self) {
        self.view.redraw_requested = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
