//! Use-Case-Funktionen für Overlays und scrollbare Panels.

use crate::app::render_scene;
use crate::app::AppState;
use crate::shared::{Menu, ScrollPanel};

/// Öffnet oder schließt ein Menü.
///
/// Umschaltungen innerhalb von `menu_debounce_ms` nach der letzten
/// angenommenen Umschaltung werden verworfen (doppelt gemeldete Klicks).
pub fn toggle(state: &mut AppState, menu: Menu, time: f64) {
    let debounce_s = state.options.menu_debounce_ms as f64 / 1000.0;
    if let Some(last) = state.view.last_menu_toggle {
        if time >= last && time - last < debounce_s {
            log::debug!("Menü-Umschaltung {:?} entprellt", menu);
            return;
        }
    }
    state.view.last_menu_toggle = Some(time);
    if state.view.menu == menu {
        state.view.menu = Menu::None;
    } else {
        open(state, menu);
    }
    state.request_redraw();
}

/// Öffnet ein Menü und schließt dabei jedes andere.
pub fn open(state: &mut AppState, menu: Menu) {
    if menu == Menu::GeyserList {
        state.view.scroll.geyser_list = 0.0;
    }
    state.view.menu = menu;
    state.request_redraw();
}

/// Schließt alle Overlays.
pub fn close_all(state: &mut AppState) {
    if state.view.menu.is_open() {
        state.view.menu = Menu::None;
        state.request_redraw();
    }
}

/// Scrollt ein Panel um `delta` Pixel, begrenzt auf `[0, max_scroll]`.
pub fn scroll(state: &mut AppState, panel: ScrollPanel, delta: f32) {
    let max = max_scroll(state, panel);
    let offset = state.view.scroll.get_mut(panel);
    let next = (*offset + delta).clamp(0.0, max);
    if next != *offset {
        *offset = next;
        state.request_redraw();
    }
}

/// Begrenzt alle Scroll-Offsets neu (nach Größen- oder Skalierungswechsel).
pub fn clamp_scroll(state: &mut AppState) {
    for panel in [
        ScrollPanel::BiomeLegend,
        ScrollPanel::FeatureLegend,
        ScrollPanel::GeyserList,
    ] {
        let max = max_scroll(state, panel);
        let offset = state.view.scroll.get_mut(panel);
        *offset = offset.clamp(0.0, max);
    }
}

fn max_scroll(state: &AppState, panel: ScrollPanel) -> f32 {
    let scene = render_scene::build(state);
    scene
        .panel(panel)
        .map_or(0.0, |(rect, rows)| scene.layout().max_scroll(rect, rows))
}
