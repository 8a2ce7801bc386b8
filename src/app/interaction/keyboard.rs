//! Tastenkürzel.

use glam::Vec2;

use super::InteractionState;
use crate::app::AppIntent;
use crate::shared::options::KEY_PAN_STEP_PX;
use crate::shared::{DisplayToggle, InputFrame, Key, Menu, RenderScene};

impl InteractionState {
    /// Übersetzt gedrückte Tasten in Intents.
    ///
    /// Bei offener Feature-Liste werden nur `Esc` und `G` (Schließen) angenommen.
    pub(crate) fn handle_keys(
        &self,
        scene: &RenderScene<'_>,
        input: &InputFrame,
        events: &mut Vec<AppIntent>,
    ) {
        let list_open = scene.menu == Menu::GeyserList;
        let step = KEY_PAN_STEP_PX * scene.ui_scale;

        for &key in &input.keys {
            if list_open && !matches!(key, Key::Escape | Key::G) {
                continue;
            }
            let intent = match key {
                Key::Escape => AppIntent::EscapePressed,
                Key::Plus => AppIntent::ZoomInRequested,
                Key::Minus => AppIntent::ZoomOutRequested,
                Key::Home | Key::F => AppIntent::FitRequested,
                Key::ArrowLeft => AppIntent::CameraPan {
                    delta: Vec2::new(step, 0.0),
                },
                Key::ArrowRight => AppIntent::CameraPan {
                    delta: Vec2::new(-step, 0.0),
                },
                Key::ArrowUp => AppIntent::CameraPan {
                    delta: Vec2::new(0.0, step),
                },
                Key::ArrowDown => AppIntent::CameraPan {
                    delta: Vec2::new(0.0, -step),
                },
                Key::T => AppIntent::DisplayToggleRequested {
                    toggle: DisplayToggle::Textures,
                },
                Key::N => AppIntent::DisplayToggleRequested {
                    toggle: DisplayToggle::Numbers,
                },
                Key::L => AppIntent::DisplayToggleRequested {
                    toggle: DisplayToggle::Legends,
                },
                Key::H => AppIntent::MenuToggleRequested {
                    menu: Menu::Help,
                    time: input.time,
                },
                Key::G => AppIntent::MenuToggleRequested {
                    menu: Menu::GeyserList,
                    time: input.time,
                },
                Key::P => AppIntent::ScreenshotRequested,
            };
            events.push(intent);
        }
    }
}
