//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod asset_key;
pub mod display;
pub mod input_frame;
pub mod layout;
pub mod options;
mod render_scene;

pub use asset_key::AssetKey;
pub use display::{
    DisplayOptions, DisplayToggle, InfoPanel, Menu, MenuItem, ScrollOffsets, ScrollPanel,
    Selection, HELP_LINES,
};
pub use input_frame::{InputFrame, Key, TouchPoint};
pub use layout::{feature_icon_rect, feature_icon_scale, UiLayout, FEATURE_HIT_HALF_EXTENT};
pub use options::ViewerOptions;
pub use render_scene::{numeric_labels, RenderScene, SceneRenderer};
