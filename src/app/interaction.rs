//! Interaktions-Automat: Eingabe-Schnappschuss → AppIntents.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `keyboard`: Tastenkürzel
//! - `pointer`: Maus-Drag und Mausrad
//! - `touch`: Ein-Finger-Pan, Pinch-Zoom, Tap
//! - `clicks`: Klick-Routing (Menüs, Legenden, Features)

mod clicks;
mod keyboard;
mod pointer;
mod touch;

use glam::Vec2;

use crate::app::{AppIntent, AppState};
use crate::shared::{InputFrame, Menu, RenderScene, ScrollPanel};

/// Bereich unter einem Punkt, in dem ein Drag oder Touch begonnen hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Region {
    /// Scrollbares Panel
    Panel(ScrollPanel),
    /// Sonstige Overlays (Tray, offenes Menü, Info-Panel)
    Overlay,
    /// Karte
    Map,
}

/// Laufender Maus-Drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MouseDrag {
    last: Vec2,
    travelled: f32,
    region: Region,
}

/// Laufende Touch-Geste.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct TouchGesture {
    start: Vec2,
    last: Option<Vec2>,
    region: Option<Region>,
    prev_distance: Option<f32>,
    moved: bool,
    pinched: bool,
}

/// Zustand der Interaktion über Frames hinweg (gehört dem Host, nicht dem AppState).
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub(crate) drag: Option<MouseDrag>,
    pub(crate) touch: Option<TouchGesture>,
    pub(crate) last_wheel: Option<f64>,
}

impl InteractionState {
    /// Erstellt einen leeren Interaktions-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet einen Eingabe-Frame und gibt die resultierenden Intents zurück.
    ///
    /// Der Zustand wird nur gelesen; die Intents werden danach vom Controller
    /// in Reihenfolge ausgeführt.
    pub fn update(&mut self, state: &AppState, input: &InputFrame) -> Vec<AppIntent> {
        let mut events = Vec::new();

        if input.viewport != state.view.viewport_size
            && input.viewport.x > 0.0
            && input.viewport.y > 0.0
        {
            events.push(AppIntent::ViewportResized {
                size: input.viewport,
            });
        }
        if input.minimized {
            self.drag = None;
            self.touch = None;
            return events;
        }

        let scene = crate::app::render_scene::build(state);
        self.handle_keys(&scene, input, &mut events);
        self.handle_wheel(&scene, input, &mut events);
        self.handle_mouse(state, &scene, input, &mut events);
        self.handle_touch(state, &scene, input, &mut events);
        events
    }
}

/// Ermittelt den Bereich unter einem Bildschirmpunkt.
pub(crate) fn region_at(scene: &RenderScene<'_>, p: Vec2) -> Region {
    if scene.menu == Menu::GeyserList {
        let body = scene.layout().geyser_list_body();
        return if body.contains(p) {
            Region::Panel(ScrollPanel::GeyserList)
        } else {
            Region::Overlay
        };
    }
    let layout = scene.layout();
    if layout.tray_slot_at(p).is_some() {
        return Region::Overlay;
    }
    if let Some(rect) = open_menu_rect(scene) {
        if rect.contains(p) {
            return Region::Overlay;
        }
    }
    if scene.info.shown && layout.info_panel().contains(p) {
        return Region::Overlay;
    }
    for panel in [ScrollPanel::BiomeLegend, ScrollPanel::FeatureLegend] {
        if scene.panel(panel).is_some_and(|(rect, _)| rect.contains(p)) {
            return Region::Panel(panel);
        }
    }
    Region::Map
}

/// Rechteck des offenen Popup-Menüs (ohne Feature-Liste).
pub(crate) fn open_menu_rect(scene: &RenderScene<'_>) -> Option<crate::core::ScreenRect> {
    match scene.menu {
        Menu::Shot | Menu::Options | Menu::Asteroid | Menu::Help => {
            let items = menu_items(scene);
            scene.layout().menu(scene.menu, items.len())
        }
        Menu::None | Menu::GeyserList => None,
    }
}

/// Einträge des offenen Popup-Menüs.
pub(crate) fn menu_items(scene: &RenderScene<'_>) -> Vec<crate::shared::MenuItem> {
    scene.menu.items(
        scene.options.screenshot_qualities.len(),
        scene.asteroid_ids.len(),
    )
}

#[cfg(test)]
mod tests;
