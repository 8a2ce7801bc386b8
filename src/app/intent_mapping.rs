//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::shared::options::{UI_SCALE_MAX, UI_SCALE_MIN, UI_SCALE_STEP};
use crate::shared::MenuItem;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SeedRequested { coord, asteroid } => {
            vec![AppCommand::FetchSeed { coord, asteroid }]
        }
        AppIntent::BundleReceived {
            coord,
            bundle,
            asteroid,
        } => vec![AppCommand::LoadBundle {
            coord,
            bundle,
            asteroid,
        }],
        AppIntent::SeedFailed { message } => vec![AppCommand::ReportLoadError { message }],
        AppIntent::AsteroidSelected { index } => {
            vec![AppCommand::CloseMenus, AppCommand::SwitchAsteroid { index }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { screen, factor } => {
            vec![AppCommand::ZoomCameraAbout { screen, factor }]
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCameraAbout {
            screen: state.view.viewport_size * 0.5,
            factor: state.options.wheel_zoom_factor,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCameraAbout {
            screen: state.view.viewport_size * 0.5,
            factor: 1.0 / state.options.wheel_zoom_factor,
        }],
        AppIntent::FitRequested => vec![AppCommand::FitCamera],
        AppIntent::FeatureClicked { feature } => vec![AppCommand::SelectFeature { feature }],
        AppIntent::BiomeLegendClicked { position } => {
            vec![AppCommand::SetBiomeSelection { position }]
        }
        AppIntent::FeatureLegendClicked { index } => {
            vec![AppCommand::SetFeatureSelection { index }]
        }
        AppIntent::MapClickedEmpty => {
            if state.view.info.shown || state.view.info.pinned {
                vec![AppCommand::DismissInfoPanel]
            } else {
                vec![]
            }
        }
        AppIntent::InfoPanelClicked => vec![AppCommand::DismissInfoPanel],
        AppIntent::PanelScrolled { panel, delta } => {
            vec![AppCommand::ScrollPanel { panel, delta }]
        }
        AppIntent::MenuToggleRequested { menu, time } => {
            vec![AppCommand::ToggleMenu { menu, time }]
        }
        AppIntent::MenuCloseRequested => vec![AppCommand::CloseMenus],
        AppIntent::MenuItemActivated { item } => map_menu_item(state, item),
        AppIntent::DisplayToggleRequested { toggle } => {
            vec![AppCommand::ToggleDisplay { toggle }]
        }
        AppIntent::EscapePressed => {
            if state.view.menu.is_open() {
                vec![AppCommand::CloseMenus]
            } else if state.view.info.shown || state.view.info.pinned {
                vec![AppCommand::DismissInfoPanel]
            } else {
                vec![]
            }
        }
        AppIntent::ScreenshotRequested => vec![AppCommand::RequestScreenshot],
        AppIntent::AssetsArrived { icons } => vec![AppCommand::RecordIconSizes { icons }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

fn map_menu_item(state: &AppState, item: MenuItem) -> Vec<AppCommand> {
    match item {
        MenuItem::Quality(index) => vec![AppCommand::SetScreenshotQuality { index }],
        MenuItem::ToggleBw => vec![AppCommand::ToggleScreenshotBw],
        MenuItem::Capture => vec![AppCommand::CloseMenus, AppCommand::RequestScreenshot],
        MenuItem::Toggle(toggle) => vec![AppCommand::ToggleDisplay { toggle }],
        MenuItem::UiScaleUp => vec![AppCommand::SetUiScale {
            scale: (state.view.ui_scale * UI_SCALE_STEP).min(UI_SCALE_MAX),
        }],
        MenuItem::UiScaleDown => vec![AppCommand::SetUiScale {
            scale: (state.view.ui_scale / UI_SCALE_STEP).max(UI_SCALE_MIN),
        }],
        MenuItem::Help => vec![AppCommand::OpenMenu {
            menu: crate::shared::Menu::Help,
        }],
        MenuItem::Asteroid(index) => {
            vec![AppCommand::CloseMenus, AppCommand::SwitchAsteroid { index }]
        }
    }
}

#[cfg(test)]
mod tests;
