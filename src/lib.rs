//! Asteroid Map Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod source;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, InteractionState, ViewState};
pub use core::{
    Asteroid, BiomeRegion, Camera2D, Feature, FeatureKind, FeaturePoint, LoadedAsteroid,
    SeedBundle,
};
pub use render::Renderer;
pub use shared::{InputFrame, RenderScene, ViewerOptions};
pub use source::{decode_bundle, Location, SeedSource, SessionError};
