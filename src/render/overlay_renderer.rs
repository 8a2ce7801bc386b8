//! Overlays: Kopfzeile, Legenden, Tray, Menüs, Info-Panel, Statuszeile und Fadenkreuz.

use asteroid_raster::{Canvas, FilterMode, RasterError, Rgba, Texture};
use glam::Vec2;

use super::legend_cache::{draw_clipped, LegendCache};
use super::types::{centered_origin, fill, panel, stroke, RenderContext, ROW_HIGHLIGHT, TEXT, TEXT_DIM};
use crate::core::{LoadedAsteroid, ScreenRect};
use crate::shared::asset_key::UI_ICONS;
use crate::shared::layout::TRAY_SLOTS;
use crate::shared::{Menu, MenuItem, ScrollPanel, HELP_LINES};

/// Ersatz-Beschriftung der Tray-Icons ohne geladenes Bild.
const TRAY_FALLBACK: [&str; TRAY_SLOTS] = ["Shot", "Opt", "Ast", "List"];
/// Halbe Armlänge des Fadenkreuzes (bei UI-Skalierung 1).
const CROSSHAIR_ARM_PX: f32 = 8.0;
/// Radius des Mittelpunkts im Fadenkreuz.
const CROSSHAIR_DOT_PX: f32 = 1.5;
/// Farbe des Fadenkreuzes.
const CROSSHAIR: Rgba = Rgba::new(255, 255, 255, 200);

/// Zeichnet Schritt 6 und 8 sowie die modalen Menüs.
pub(crate) struct OverlayRenderer;

impl OverlayRenderer {
    /// Kopfzeile mit Seed und Asteroid.
    pub fn render_header(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>) {
        let layout = &ctx.layout;
        let rect = layout.header();
        panel(canvas, rect);
        let x = rect.min.x + layout.padding;
        let row = |i: usize| ScreenRect::from_xywh(rect.min.x, rect.min.y + i as f32 * layout.row_height, rect.width(), layout.row_height);

        ctx.text_in_row(canvas, &format!("Seed: {}", ctx.scene.coord), row(0), x, TEXT);
        let asteroid = ctx.scene.asteroid.map(|a| a.id.as_str()).unwrap_or("-");
        ctx.text_in_row(canvas, &format!("Asteroid: {asteroid}"), row(1), x, TEXT_DIM);
    }

    /// Biom-Legende links und (bei Nummern-Labels) Feature-Legende rechts.
    pub fn render_legends(
        &self,
        canvas: &mut Canvas,
        ctx: &RenderContext<'_>,
        asteroid: &LoadedAsteroid,
        cache: &mut LegendCache,
    ) -> Result<(), RasterError> {
        let selection = ctx.scene.selection;
        let legends = [
            (ScrollPanel::BiomeLegend, selection.biome),
            (ScrollPanel::FeatureLegend, selection.feature.map(|i| i.saturating_sub(1))),
        ];
        for (which, selected_row) in legends {
            let Some((rect, _rows)) = ctx.scene.panel(which) else {
                continue;
            };
            if rect.height() <= 0.0 {
                continue;
            }
            let scroll = ctx.scene.scroll_of(which);
            panel(canvas, rect);
            if let Some(row) = selected_row {
                highlight_row(canvas, ctx.layout.row(rect, row, scroll), rect);
            }
            let texture = cache.get(which, ctx, asteroid, rect.width())?;
            draw_clipped(canvas, texture, rect, scroll);
        }
        Ok(())
    }

    /// Icon-Leiste mit den vier Menü-Schaltflächen.
    pub fn render_tray(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>) {
        let layout = &ctx.layout;
        panel(canvas, layout.tray());
        let active = ctx.scene.menu.tray_slot();

        for slot in 0..TRAY_SLOTS {
            let rect = layout.tray_icon(slot);
            if active == Some(slot) {
                fill(canvas, rect, ROW_HIGHLIGHT);
            }
            match ctx.assets.icon(UI_ICONS[slot]) {
                Some(texture) => blit_fitted(canvas, texture, rect, FilterMode::Linear),
                None => {
                    stroke(canvas, rect, 1.0, TEXT_DIM);
                    let size = ctx.font.measure(TRAY_FALLBACK[slot], ctx.font_px());
                    let pos = rect.center() - Vec2::new(size.width, size.height) * 0.5;
                    ctx.font.draw_text(canvas, TRAY_FALLBACK[slot], pos.x, pos.y, ctx.font_px(), TEXT);
                }
            }
        }
    }

    /// Offenes Menü: Popup, Hilfe oder Vollbild-Feature-Liste.
    pub fn render_menu(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>) -> Result<(), RasterError> {
        match ctx.scene.menu {
            Menu::None => Ok(()),
            Menu::Help => {
                self.render_help(canvas, ctx);
                Ok(())
            }
            Menu::GeyserList => self.render_geyser_list(canvas, ctx),
            menu @ (Menu::Shot | Menu::Options | Menu::Asteroid) => {
                self.render_popup(canvas, ctx, menu);
                Ok(())
            }
        }
    }

    fn render_popup(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>, menu: Menu) {
        let scene = ctx.scene;
        let layout = &ctx.layout;
        let items = menu.items(scene.options.screenshot_qualities.len(), scene.asteroid_ids.len());
        let Some(rect) = layout.menu(menu, items.len()) else {
            return;
        };
        panel(canvas, rect);

        for (i, item) in items.iter().enumerate() {
            let row = layout.menu_item(rect, i);
            let (text, active) = menu_item_label(ctx, *item);
            if active {
                fill(canvas, row, ROW_HIGHLIGHT);
            }
            ctx.text_in_row(canvas, &text, row, row.min.x + layout.padding, TEXT);
        }
    }

    fn render_help(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>) {
        let layout = &ctx.layout;
        let Some(rect) = layout.menu(Menu::Help, 0) else {
            return;
        };
        panel(canvas, rect);
        let key_x = rect.min.x + layout.padding;
        let action_x = rect.min.x + rect.width() * 0.45;

        let title = layout.menu_item(rect, 0);
        ctx.text_in_row(canvas, "Key bindings", title, key_x, TEXT);
        for (i, (key, action)) in HELP_LINES.iter().enumerate() {
            let row = layout.menu_item(rect, i + 1);
            ctx.text_in_row(canvas, key, row, key_x, TEXT_DIM);
            ctx.text_in_row(canvas, action, row, action_x, TEXT);
        }
    }

    fn render_geyser_list(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>) -> Result<(), RasterError> {
        let scene = ctx.scene;
        let layout = &ctx.layout;
        let list = layout.geyser_list();
        fill(canvas, ScreenRect::from_xywh(0.0, 0.0, scene.viewport.x, scene.viewport.y), Rgba::BLACK.with_alpha(120));
        panel(canvas, list);

        let count = scene.asteroid.map_or(0, |a| a.features.len());
        let title = ScreenRect::from_xywh(list.min.x, list.min.y + layout.padding, list.width(), layout.row_height);
        ctx.text_in_row(canvas, &format!("Features ({count})"), title, list.min.x + layout.padding, TEXT);

        let close = layout.geyser_list_close();
        stroke(canvas, close, 1.0, TEXT_DIM);
        let size = ctx.font.measure("X", ctx.font_px());
        let pos = close.center() - Vec2::new(size.width, size.height) * 0.5;
        ctx.font.draw_text(canvas, "X", pos.x, pos.y, ctx.font_px(), TEXT);

        let (Some(asteroid), body) = (scene.asteroid, layout.geyser_list_body()) else {
            return Ok(());
        };
        if body.width() < 1.0 || body.height() < 1.0 {
            return Ok(());
        }

        // Zeilen in ein eigenes Bild in Körpergröße: beschneidet teilweise sichtbare Zeilen.
        let mut rows = Canvas::new(body.width() as u32, body.height() as u32)?;
        let local = ScreenRect::from_xywh(0.0, 0.0, body.width(), body.height());
        let scroll = scene.scroll.geyser_list;
        let icon_px = layout.row_height - 2.0;
        for (i, (feature, index)) in asteroid.features.iter().zip(&asteroid.feature_indices).enumerate() {
            let row = layout.row(local, i, scroll);
            if row.max.y < 0.0 || row.min.y > local.max.y {
                continue;
            }
            if scene.selection.feature == Some(*index) {
                fill(&mut rows, row, ROW_HIGHLIGHT);
            }
            let icon = ScreenRect::from_xywh(row.min.x, row.min.y + 1.0, icon_px, icon_px);
            match ctx.assets.icon(&feature.icon_key) {
                Some(texture) => blit_fitted(&mut rows, texture, icon, ctx.sampler.filter),
                None => {
                    let color = asteroid.feature_legend.entry(*index).map_or(Rgba::WHITE, |e| e.color);
                    fill(&mut rows, ScreenRect::from_center(icon.center(), Vec2::splat(icon_px * 0.25)), color);
                }
            }
            let text = format!(
                "{:>3}  {}   ({}, {})",
                index, feature.display_name, feature.pos.x, feature.pos.y
            );
            ctx.text_in_row(&mut rows, &text, row, icon.max.x + layout.padding, TEXT);
        }
        canvas.blit(&rows.into_texture(), body.min.x.round() as i32, body.min.y.round() as i32, 1.0, FilterMode::Nearest);
        Ok(())
    }

    /// Info-Panel mit Icon und Text des gewählten Features.
    pub fn render_info(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>) {
        let info = ctx.scene.info;
        if !info.shown {
            return;
        }
        let layout = &ctx.layout;
        let rect = layout.info_panel();
        panel(canvas, rect);
        if info.pinned {
            stroke(canvas, rect, 2.0, TEXT_DIM);
        }

        let icon_px = 4.0 * layout.row_height - layout.padding;
        let icon = ScreenRect::from_xywh(rect.min.x + layout.padding, rect.min.y + layout.padding, icon_px, icon_px);
        let text_x = match ctx.assets.icon(&info.icon_key) {
            Some(texture) => {
                blit_fitted(canvas, texture, icon, ctx.sampler.filter);
                icon.max.x + layout.padding
            }
            None => rect.min.x + layout.padding,
        };
        for (i, line) in info.text.lines().take(4).enumerate() {
            let row = ScreenRect::from_xywh(rect.min.x, rect.min.y + layout.padding + i as f32 * layout.row_height, rect.width(), layout.row_height);
            ctx.text_in_row(canvas, line, row, text_x, if i == 0 { TEXT } else { TEXT_DIM });
        }
    }

    /// Statuszeile; ohne Asteroid zentriert (Lade- oder Fehlermeldung).
    pub fn render_status(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>) {
        let scene = ctx.scene;
        let text = match (scene.status, scene.asteroid) {
            (Some(text), _) => text.to_string(),
            (None, None) => format!("Loading {} ...", scene.coord),
            (None, Some(_)) => return,
        };
        let size = ctx.font.measure(&text, ctx.font_px());
        let layout = &ctx.layout;
        let pad = layout.padding;
        let rect = if scene.asteroid.is_some() {
            let line = layout.status_line();
            ScreenRect::from_xywh(line.min.x, line.min.y, size.width + 2.0 * pad, line.height())
        } else {
            ScreenRect::from_center(
                scene.viewport * 0.5,
                Vec2::new(size.width * 0.5 + pad, layout.row_height * 0.5),
            )
        };
        panel(canvas, rect);
        ctx.text_in_row(canvas, &text, rect, rect.min.x + pad, TEXT);
    }

    /// Fadenkreuz in der Bildmitte mit Welt-Koordinaten und Biom darunter.
    pub fn render_crosshair(&self, canvas: &mut Canvas, ctx: &RenderContext<'_>, asteroid: &LoadedAsteroid) {
        let scene = ctx.scene;
        let center = scene.viewport * 0.5;
        let arm = CROSSHAIR_ARM_PX * scene.ui_scale;
        // Haarlinien ohne Kantenglättung, sonst verwischen sie über zwei Pixel.
        canvas.set_anti_alias(false);
        canvas.stroke_line([center.x - arm, center.y], [center.x + arm, center.y], 1.0, CROSSHAIR);
        canvas.stroke_line([center.x, center.y - arm], [center.x, center.y + arm], 1.0, CROSSHAIR);
        canvas.set_anti_alias(true);
        canvas.stroke_circle(center.x, center.y, arm * 0.5, 1.0, CROSSHAIR);
        canvas.fill_circle(center.x, center.y, CROSSHAIR_DOT_PX * scene.ui_scale, Rgba::RED);

        let world = scene.camera.screen_to_world(center);
        let mut text = format!("x {:.0}, y {:.0}", world.x.floor(), world.y.floor());
        if let Some(biome) = asteroid.biome_at(world) {
            text.push_str("  ");
            text.push_str(biome);
        }
        let pos = center + Vec2::splat(arm + 2.0);
        ctx.font.draw_text(canvas, &text, pos.x + 1.0, pos.y + 1.0, ctx.font_px(), Rgba::BLACK.with_alpha(200));
        ctx.font.draw_text(canvas, &text, pos.x, pos.y, ctx.font_px(), TEXT);
    }
}

fn menu_item_label(ctx: &RenderContext<'_>, item: MenuItem) -> (String, bool) {
    let scene = ctx.scene;
    let check = |on: bool| if on { "[x]" } else { "[ ]" };
    match item {
        MenuItem::Quality(i) => {
            let q = scene.options.screenshot_qualities.get(i).copied().unwrap_or(1);
            (format!("Quality {q}x"), i == scene.shot_quality)
        }
        MenuItem::ToggleBw => (format!("{} Black & white", check(scene.shot_bw)), false),
        MenuItem::Capture => ("Capture".to_string(), false),
        MenuItem::Toggle(toggle) => (
            format!("{} {}", check(scene.display.get(toggle)), toggle.label()),
            false,
        ),
        MenuItem::UiScaleUp => (format!("UI scale + ({:.2})", scene.ui_scale), false),
        MenuItem::UiScaleDown => ("UI scale -".to_string(), false),
        MenuItem::Help => ("Key bindings".to_string(), false),
        MenuItem::Asteroid(i) => {
            let id = scene.asteroid_ids.get(i).map(String::as_str).unwrap_or("?");
            let current = scene.asteroid.is_some_and(|a| a.id == id);
            (id.to_string(), current)
        }
    }
}

/// Hervorhebung einer Zeile, auf das Panel beschnitten.
fn highlight_row(canvas: &mut Canvas, row: ScreenRect, panel: ScreenRect) {
    let clipped = ScreenRect {
        min: row.min.max(panel.min),
        max: row.max.min(panel.max),
    };
    if clipped.width() > 0.0 && clipped.height() > 0.0 {
        fill(canvas, clipped, ROW_HIGHLIGHT);
    }
}

/// Zeichnet eine Textur zentriert und seitenverhältnistreu in `rect`.
fn blit_fitted(canvas: &mut Canvas, texture: &Texture, rect: ScreenRect, filter: FilterMode) {
    let size = Vec2::new(texture.width() as f32, texture.height() as f32);
    let scale = (rect.width() / size.x).min(rect.height() / size.y);
    let (x, y) = centered_origin(rect.center(), size * scale);
    canvas.blit(texture, x, y, scale, filter);
}
