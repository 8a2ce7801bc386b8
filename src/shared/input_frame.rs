//! Host-unabhängiger Eingabe-Schnappschuss eines Frames.
//!
//! Die UI-Schicht übersetzt egui-Events in ein `InputFrame`; die
//! Interaktionslogik in `app` kennt egui nicht.

use glam::Vec2;

/// Tasten, auf die der Betrachter reagiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Menüs schließen, Info-Panel lösen
    Escape,
    /// Hineinzoomen
    Plus,
    /// Herauszoomen
    Minus,
    /// Einpassen
    Home,
    /// Einpassen (Alternative)
    F,
    /// Nach links schwenken
    ArrowLeft,
    /// Nach rechts schwenken
    ArrowRight,
    /// Nach oben schwenken
    ArrowUp,
    /// Nach unten schwenken
    ArrowDown,
    /// Texturen umschalten
    T,
    /// Nummern/Namen umschalten
    N,
    /// Legenden umschalten
    L,
    /// Hilfe-Overlay
    H,
    /// Feature-Liste
    G,
    /// Screenshot
    P,
}

/// Ein aktiver Berührungspunkt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Host-ID des Fingers
    pub id: u64,
    /// Position in Screen-Pixeln
    pub pos: Vec2,
}

/// Zustand aller Eingabekanäle für einen Tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    /// Zeit in Sekunden seit Programmstart
    pub time: f64,
    /// Fenstergröße in Pixeln
    pub viewport: Vec2,
    /// Fenster minimiert
    pub minimized: bool,
    /// Mausposition (None = außerhalb)
    pub pointer: Option<Vec2>,
    /// Primärtaste gehalten
    pub primary_down: bool,
    /// Primärtaste in diesem Frame gedrückt
    pub primary_pressed: bool,
    /// Primärtaste in diesem Frame losgelassen
    pub primary_released: bool,
    /// Mausrad-Delta (positiv = vom Nutzer weg)
    pub wheel: f32,
    /// Aktive Berührungen
    pub touches: Vec<TouchPoint>,
    /// In diesem Frame neu begonnene Berührungen
    pub touches_started: Vec<u64>,
    /// In diesem Frame gedrückte Tasten
    pub keys: Vec<Key>,
}

impl InputFrame {
    /// Leerer Frame mit Zeit und Fenstergröße.
    pub fn idle(time: f64, viewport: Vec2) -> Self {
        Self {
            time,
            viewport,
            ..Self::default()
        }
    }

    /// Gibt `true` zurück, wenn `key` in diesem Frame gedrückt wurde.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Gibt `true` zurück, wenn dieser Frame irgendeine Nutzereingabe enthält.
    pub fn has_user_input(&self) -> bool {
        self.primary_down
            || self.primary_pressed
            || self.primary_released
            || self.wheel != 0.0
            || !self.touches.is_empty()
            || !self.touches_started.is_empty()
            || !self.keys.is_empty()
    }
}
