//! UI-Layer mit egui.
//!
//! Übersetzt egui-Eingaben in ein host-unabhängiges `InputFrame` und zeigt
//! das vom Renderer komponierte Bild als Textur an. Alle Overlays zeichnet
//! der Renderer selbst.

pub mod frame;
pub mod input;

pub use frame::FrameTexture;
pub use input::InputCollector;
