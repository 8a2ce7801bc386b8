//! Application-Layer: Controller, State, Events, Interaktion und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod frame_pacer;
pub mod handlers;
pub mod interaction;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Sitzung, View, Optionen).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use frame_pacer::FramePacer;
pub use interaction::InteractionState;
pub use render_scene::build as build_render_scene;
pub use state::{AppState, ScreenshotState, SessionState, StatusLine, ViewState};
