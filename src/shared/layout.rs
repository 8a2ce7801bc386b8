//! Bildschirm-Layout der Overlays.
//!
//! Reine Arithmetik über Fenstergröße, UI-Skalierung und Schriftgröße.
//! Composer und Hit-Tests rechnen mit denselben Rechtecken, daher lebt
//! das Layout hier und nicht im Renderer.

use glam::Vec2;

use super::display::{Menu, HELP_LINES};
use super::options::ViewerOptions;
use crate::core::ScreenRect;

/// Kantenlänge eines Tray-Icons bei UI-Skalierung 1.
const TRAY_ICON_PX: f32 = 40.0;
/// Abstand zwischen Tray-Icons bei UI-Skalierung 1.
const TRAY_GAP_PX: f32 = 8.0;
/// Innenabstand der Panels bei UI-Skalierung 1.
const PADDING_PX: f32 = 6.0;
/// Zeilenhöhe relativ zur Schriftgröße.
const ROW_FACTOR: f32 = 1.5;
/// Anzahl Tray-Icons.
pub const TRAY_SLOTS: usize = 4;
/// Halbe Kantenlänge des Klickbereichs für Features ohne geladenes Icon.
pub const FEATURE_HIT_HALF_EXTENT: f32 = 10.0;

/// Skalierung der Feature-Icons bei Zoom und UI-Skalierung.
pub fn feature_icon_scale(zoom: f32, ui_scale: f32, options: &ViewerOptions) -> f32 {
    zoom * options.icon_base_scale * options.icon_user_scale * ui_scale
}

/// Bildschirm-Rechteck eines Feature-Icons um seinen Mittelpunkt.
///
/// Ohne geladenes Icon gilt ein Quadrat mit `FEATURE_HIT_HALF_EXTENT`.
pub fn feature_icon_rect(center: Vec2, icon_size: Option<[u32; 2]>, scale: f32) -> ScreenRect {
    match icon_size {
        Some([w, h]) if w > 0 && h > 0 => {
            ScreenRect::from_center(center, Vec2::new(w as f32, h as f32) * scale * 0.5)
        }
        _ => ScreenRect::from_center(center, Vec2::splat(FEATURE_HIT_HALF_EXTENT)),
    }
}

/// Overlay-Rechtecke für einen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiLayout {
    /// Fenstergröße
    pub viewport: Vec2,
    /// Effektive Schriftgröße in Pixeln
    pub font_px: f32,
    /// Zeilenhöhe in Legenden, Menüs und Listen
    pub row_height: f32,
    /// Innenabstand
    pub padding: f32,
    /// Kantenlänge eines Tray-Icons
    pub icon_size: f32,
    gap: f32,
}

impl UiLayout {
    /// Layout für Fenstergröße, UI-Skalierung und Basis-Schriftgröße.
    pub fn new(viewport: Vec2, ui_scale: f32, font_size: f32) -> Self {
        let scale = ui_scale.max(0.1);
        let font_px = (font_size * scale).max(1.0);
        Self {
            viewport,
            font_px,
            row_height: (font_px * ROW_FACTOR).round(),
            padding: (PADDING_PX * scale).round(),
            icon_size: (TRAY_ICON_PX * scale).round(),
            gap: (TRAY_GAP_PX * scale).round(),
        }
    }

    // ── Tray ────────────────────────────────────────────────────

    /// Icon-Leiste unten mittig
    pub fn tray(&self) -> ScreenRect {
        let w = TRAY_SLOTS as f32 * self.icon_size + (TRAY_SLOTS as f32 + 1.0) * self.gap;
        let h = self.icon_size + 2.0 * self.gap;
        ScreenRect::from_xywh((self.viewport.x - w) * 0.5, self.viewport.y - h, w, h)
    }

    /// Rechteck des Tray-Icons an Position `slot`
    pub fn tray_icon(&self, slot: usize) -> ScreenRect {
        let tray = self.tray();
        ScreenRect::from_xywh(
            tray.min.x + self.gap + slot as f32 * (self.icon_size + self.gap),
            tray.min.y + self.gap,
            self.icon_size,
            self.icon_size,
        )
    }

    /// Tray-Position unter dem Punkt
    pub fn tray_slot_at(&self, p: Vec2) -> Option<usize> {
        (0..TRAY_SLOTS).find(|&slot| self.tray_icon(slot).contains(p))
    }

    // ── Kopfzeile & Status ──────────────────────────────────────

    /// Kopfzeile oben links (Seed und Asteroid, zwei Zeilen)
    pub fn header(&self) -> ScreenRect {
        ScreenRect::from_xywh(
            self.padding,
            self.padding,
            self.font_px * 24.0,
            2.0 * self.row_height,
        )
    }

    /// Statuszeile über dem Tray, links
    pub fn status_line(&self) -> ScreenRect {
        let tray = self.tray();
        ScreenRect::from_xywh(
            self.padding,
            tray.min.y - self.row_height - self.padding,
            self.viewport.x - 2.0 * self.padding,
            self.row_height,
        )
    }

    // ── Legenden ────────────────────────────────────────────────

    fn legend_width(&self) -> f32 {
        self.font_px * 12.0
    }

    fn legend_top(&self) -> f32 {
        self.header().max.y + self.padding
    }

    fn legend_height(&self, rows: usize) -> f32 {
        let available = (self.status_line().min.y - self.padding - self.legend_top()).max(0.0);
        (rows as f32 * self.row_height).min(available)
    }

    /// Sichtbarer Bereich der Biom-Legende (links); `rows` inklusive „Clear“-Zeile
    pub fn biome_legend(&self, rows: usize) -> ScreenRect {
        ScreenRect::from_xywh(
            self.padding,
            self.legend_top(),
            self.legend_width(),
            self.legend_height(rows),
        )
    }

    /// Sichtbarer Bereich der Feature-Legende (rechts); `rows` inklusive „Clear“-Zeile
    pub fn feature_legend(&self, rows: usize) -> ScreenRect {
        let w = self.legend_width();
        ScreenRect::from_xywh(
            self.viewport.x - w - self.padding,
            self.legend_top(),
            w,
            self.legend_height(rows),
        )
    }

    /// Zeile `row` eines scrollbaren Panels
    pub fn row(&self, panel: ScreenRect, row: usize, scroll: f32) -> ScreenRect {
        ScreenRect::from_xywh(
            panel.min.x,
            panel.min.y + row as f32 * self.row_height - scroll,
            panel.width(),
            self.row_height,
        )
    }

    /// Zeile unter dem Punkt (nur innerhalb des sichtbaren Bereichs)
    pub fn row_at(&self, panel: ScreenRect, rows: usize, scroll: f32, p: Vec2) -> Option<usize> {
        if !panel.contains(p) || self.row_height <= 0.0 {
            return None;
        }
        let row = ((p.y - panel.min.y + scroll) / self.row_height).floor();
        (row >= 0.0 && (row as usize) < rows).then_some(row as usize)
    }

    /// Maximaler Scroll-Offset eines Panels
    pub fn max_scroll(&self, panel: ScreenRect, rows: usize) -> f32 {
        (rows as f32 * self.row_height - panel.height()).max(0.0)
    }

    // ── Menüs ───────────────────────────────────────────────────

    /// Rechteck eines offenen Popup-Menüs (über seinem Tray-Icon, Hilfe zentriert)
    pub fn menu(&self, menu: Menu, item_count: usize) -> Option<ScreenRect> {
        match menu {
            Menu::Shot | Menu::Options | Menu::Asteroid => {
                let slot = menu.tray_slot()?;
                let w = self.font_px * 14.0;
                let h = item_count.max(1) as f32 * self.row_height + 2.0 * self.padding;
                let anchor = self.tray_icon(slot);
                let max_x = (self.viewport.x - w - self.padding).max(self.padding);
                let x = (anchor.center().x - w * 0.5).clamp(self.padding, max_x);
                let y = (anchor.min.y - self.gap - h).max(self.padding);
                Some(ScreenRect::from_xywh(x, y, w, h))
            }
            Menu::Help => {
                let w = self.font_px * 22.0;
                let h = (HELP_LINES.len() + 1) as f32 * self.row_height + 2.0 * self.padding;
                Some(ScreenRect::from_xywh(
                    (self.viewport.x - w) * 0.5,
                    ((self.viewport.y - h) * 0.5).max(self.padding),
                    w,
                    h,
                ))
            }
            Menu::GeyserList => Some(self.geyser_list()),
            Menu::None => None,
        }
    }

    /// Eintrag `index` eines Popup-Menüs
    pub fn menu_item(&self, menu_rect: ScreenRect, index: usize) -> ScreenRect {
        ScreenRect::from_xywh(
            menu_rect.min.x,
            menu_rect.min.y + self.padding + index as f32 * self.row_height,
            menu_rect.width(),
            self.row_height,
        )
    }

    /// Menü-Eintrag unter dem Punkt
    pub fn menu_item_at(&self, menu_rect: ScreenRect, item_count: usize, p: Vec2) -> Option<usize> {
        (0..item_count).find(|&i| self.menu_item(menu_rect, i).contains(p))
    }

    // ── Feature-Liste ───────────────────────────────────────────

    /// Vollbild-Feature-Liste
    pub fn geyser_list(&self) -> ScreenRect {
        let inset = 2.0 * self.padding;
        ScreenRect::from_xywh(
            inset,
            inset,
            (self.viewport.x - 2.0 * inset).max(0.0),
            (self.viewport.y - 2.0 * inset).max(0.0),
        )
    }

    /// Schließen-Schaltfläche oben rechts in der Feature-Liste
    pub fn geyser_list_close(&self) -> ScreenRect {
        let list = self.geyser_list();
        ScreenRect::from_xywh(
            list.max.x - self.padding - self.row_height,
            list.min.y + self.padding,
            self.row_height,
            self.row_height,
        )
    }

    /// Scrollbarer Zeilenbereich der Feature-Liste (unter der Titelzeile)
    pub fn geyser_list_body(&self) -> ScreenRect {
        let list = self.geyser_list();
        let top = list.min.y + 2.0 * self.padding + self.row_height;
        ScreenRect {
            min: Vec2::new(list.min.x + self.padding, top),
            max: Vec2::new(list.max.x - self.padding, (list.max.y - self.padding).max(top)),
        }
    }

    // ── Info-Panel ──────────────────────────────────────────────

    /// Info-Panel oben mittig (Icon links, vier Textzeilen)
    pub fn info_panel(&self) -> ScreenRect {
        let w = self.font_px * 20.0;
        let h = 4.0 * self.row_height + 2.0 * self.padding;
        ScreenRect::from_xywh((self.viewport.x - w) * 0.5, self.padding, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn layout() -> UiLayout {
        UiLayout::new(Vec2::new(800.0, 600.0), 1.0, 14.0)
    }

    #[test]
    fn icon_rect_falls_back_to_ten_pixel_square() {
        let rect = feature_icon_rect(Vec2::new(20.0, 40.0), None, 1.0);
        assert!(rect.contains(Vec2::new(30.0, 40.0)));
        assert!(!rect.contains(Vec2::new(35.0, 40.0)));

        let rect = feature_icon_rect(Vec2::new(20.0, 40.0), Some([64, 32]), 0.5);
        assert_relative_eq!(rect.width(), 32.0);
        assert_relative_eq!(rect.height(), 16.0);
    }

    #[test]
    fn tray_is_centered_at_the_bottom() {
        let l = layout();
        let tray = l.tray();
        assert_relative_eq!(tray.center().x, 400.0);
        assert_relative_eq!(tray.max.y, 600.0);
        assert_eq!(l.tray_slot_at(l.tray_icon(2).center()), Some(2));
        assert_eq!(l.tray_slot_at(Vec2::new(5.0, 5.0)), None);
    }

    #[test]
    fn rows_follow_scroll_offset() {
        let l = layout();
        let panel = l.biome_legend(50);
        let first = l.row(panel, 0, 0.0);
        assert_eq!(l.row_at(panel, 50, 0.0, first.center()), Some(0));
        // Um eine Zeile gescrollt liegt Zeile 1 an der Stelle von Zeile 0.
        assert_eq!(l.row_at(panel, 50, l.row_height, first.center()), Some(1));
        assert!(l.max_scroll(panel, 50) > 0.0);
        assert_eq!(l.max_scroll(panel, 1), 0.0);
    }

    #[test]
    fn legend_never_overlaps_the_tray() {
        let l = layout();
        assert!(l.biome_legend(1000).max.y <= l.tray().min.y);
        assert!(l.feature_legend(1000).max.y <= l.tray().min.y);
    }

    #[test]
    fn popup_menu_sits_above_its_icon_and_inside_the_window() {
        let l = layout();
        let rect = l.menu(Menu::Shot, 5).expect("Menü-Rechteck");
        assert!(rect.max.y <= l.tray().min.y);
        assert!(rect.min.x >= l.padding);
        assert_eq!(l.menu_item_at(rect, 5, l.menu_item(rect, 3).center()), Some(3));
        assert!(l.menu(Menu::None, 0).is_none());
    }
}
