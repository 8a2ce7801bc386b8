//! Application State: zentrale Datenhaltung.
//!
//! Ein einziger `AppState` besitzt Sitzung (Bundle, aktueller Asteroid,
//! Legenden) und Ansicht (Kamera, Schalter, Overlays). Mutiert wird nur im Tick.

mod app_state;
mod session;
mod view;

pub use app_state::AppState;
pub use session::{SessionState, StatusLine};
pub use view::{ScreenshotState, ViewState};
