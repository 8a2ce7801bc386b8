//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{RenderScene, SceneRenderer};
use crate::source::SeedSource;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController {
    seed_source: Option<Box<dyn SeedSource>>,
}

impl AppController {
    /// Erstellt einen Controller ohne Seed-Quelle (nur vorab geladene Bundles).
    pub fn new() -> Self {
        Self { seed_source: None }
    }

    /// Erstellt einen Controller mit Seed-Quelle für `FetchSeed`.
    pub fn with_seed_source(source: Box<dyn SeedSource>) -> Self {
        Self {
            seed_source: Some(source),
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Jeder verarbeitete Intent merkt einen Redraw vor.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        state.request_redraw();
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Sitzung ===
            AppCommand::FetchSeed { coord, asteroid } => {
                handlers::session::fetch(state, self.seed_source.as_deref(), coord, asteroid)?
            }
            AppCommand::LoadBundle {
                coord,
                bundle,
                asteroid,
            } => handlers::session::load_bundle(state, coord, bundle, asteroid)?,
            AppCommand::ReportLoadError { message } => {
                handlers::session::report_failure(state, message)
            }
            AppCommand::SwitchAsteroid { index } => {
                handlers::session::switch_asteroid(state, index)?
            }
            AppCommand::RecordIconSizes { icons } => {
                handlers::session::record_icon_sizes(state, icons)
            }

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCameraAbout { screen, factor } => {
                handlers::view::zoom_about(state, screen, factor)
            }
            AppCommand::FitCamera => handlers::view::fit(state),

            // === Selektion ===
            AppCommand::SelectFeature { feature } => {
                handlers::selection::select_feature(state, feature)
            }
            AppCommand::SetBiomeSelection { position } => {
                handlers::selection::set_biome(state, position)
            }
            AppCommand::SetFeatureSelection { index } => {
                handlers::selection::set_feature(state, index)
            }
            AppCommand::DismissInfoPanel => handlers::selection::dismiss_info(state),

            // === Overlays ===
            AppCommand::ToggleMenu { menu, time } => handlers::menu::toggle(state, menu, time),
            AppCommand::OpenMenu { menu } => handlers::menu::open(state, menu),
            AppCommand::CloseMenus => handlers::menu::close_all(state),
            AppCommand::ScrollPanel { panel, delta } => {
                handlers::menu::scroll(state, panel, delta)
            }

            // === Anzeige ===
            AppCommand::ToggleDisplay { toggle } => handlers::view::toggle_display(state, toggle),
            AppCommand::SetUiScale { scale } => handlers::view::set_ui_scale(state, scale),

            // === Screenshot ===
            AppCommand::SetScreenshotQuality { index } => {
                handlers::screenshot::set_quality(state, index)
            }
            AppCommand::ToggleScreenshotBw => handlers::screenshot::toggle_bw(state),
            AppCommand::RequestScreenshot => handlers::screenshot::request(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestRedraw => handlers::view::request_redraw(state),
            AppCommand::RequestExit => handlers::menu::request_exit(state),
        }

        Ok(())
    }

    /// Zeitgesteuerte Schritte eines Ticks: Statuszeile ablaufen lassen und
    /// die Screenshot-Pipeline vorantreiben.
    pub fn tick(&mut self, state: &mut AppState, renderer: &mut dyn SceneRenderer, now: f64) {
        state.now = now;

        let expired = state
            .session
            .status
            .as_ref()
            .and_then(|s| s.until)
            .is_some_and(|until| now >= until);
        if expired {
            state.session.status = None;
            state.request_redraw();
        }

        if let Err(e) = use_cases::screenshot::advance(state, renderer, now) {
            log::error!("Screenshot fehlgeschlagen: {:#}", e);
            state.session.status = Some(super::StatusLine {
                text: format!("Screenshot failed: {e}"),
                until: Some(now + crate::shared::options::STATUS_DURATION_S),
            });
            state.request_redraw();
        }
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene<'a>(&self, state: &'a AppState) -> RenderScene<'a> {
        render_scene::build(state)
    }
}
