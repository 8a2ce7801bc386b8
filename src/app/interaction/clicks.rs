//! Klick-Routing: Menüs zuerst, dann Info-Panel und Legenden, zuletzt Features.

use glam::Vec2;

use super::{menu_items, open_menu_rect, InteractionState};
use crate::app::use_cases::selection;
use crate::app::{AppIntent, AppState};
use crate::shared::{Menu, RenderScene, ScrollPanel};

impl InteractionState {
    /// Verteilt einen Klick (Maus oder Tap) an der Bildschirmposition `p`.
    pub(crate) fn click(
        &self,
        state: &AppState,
        scene: &RenderScene<'_>,
        p: Vec2,
        time: f64,
        events: &mut Vec<AppIntent>,
    ) {
        let layout = scene.layout();

        match scene.menu {
            Menu::GeyserList => {
                if layout.geyser_list_close().contains(p) {
                    events.push(AppIntent::MenuCloseRequested);
                }
                return;
            }
            Menu::Help => {
                events.push(AppIntent::MenuCloseRequested);
                return;
            }
            Menu::None | Menu::Shot | Menu::Options | Menu::Asteroid => {}
        }

        if let Some(slot) = layout.tray_slot_at(p) {
            events.push(AppIntent::MenuToggleRequested {
                menu: Menu::from_tray_slot(slot),
                time,
            });
            return;
        }

        if let Some(rect) = open_menu_rect(scene) {
            if rect.contains(p) {
                let items = menu_items(scene);
                if let Some(item) = layout
                    .menu_item_at(rect, items.len(), p)
                    .and_then(|i| items.get(i).copied())
                {
                    events.push(AppIntent::MenuItemActivated { item });
                }
                return;
            }
            events.push(AppIntent::MenuCloseRequested);
        }

        if scene.info.shown && layout.info_panel().contains(p) {
            events.push(AppIntent::InfoPanelClicked);
            return;
        }

        for panel in [ScrollPanel::BiomeLegend, ScrollPanel::FeatureLegend] {
            let Some((rect, rows)) = scene.panel(panel) else {
                continue;
            };
            if !rect.contains(p) {
                continue;
            }
            if let Some(row) = layout.row_at(rect, rows, scene.scroll_of(panel), p) {
                // letzte Zeile ist „Clear“
                let clear = row + 1 == rows;
                events.push(match panel {
                    ScrollPanel::BiomeLegend => AppIntent::BiomeLegendClicked {
                        position: (!clear).then_some(row),
                    },
                    _ => AppIntent::FeatureLegendClicked {
                        index: (!clear).then_some(row + 1),
                    },
                });
            }
            return;
        }

        match selection::hit_test(state, p) {
            Some(feature) => events.push(AppIntent::FeatureClicked { feature }),
            None => events.push(AppIntent::MapClickedEmpty),
        }
    }
}
