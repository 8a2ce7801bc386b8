//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene<'_> {
    let view = &state.view;
    RenderScene {
        asteroid: state.session.current.as_deref(),
        coord: &state.session.coord,
        asteroid_ids: &state.session.asteroid_ids,
        camera: view.camera,
        viewport: view.viewport_size,
        display: view.display,
        selection: view.selection,
        scroll: view.scroll,
        menu: view.menu,
        info: &view.info,
        status: state.session.status_text(),
        ui_scale: view.ui_scale,
        screenshot_mode: view.screenshot_mode,
        options: &state.options,
        legend_generation: view.legend_generation,
        shot_quality: view.screenshot.quality,
        shot_bw: view.screenshot.bw,
    }
}
