//! Maus-Drag (Pan) und Mausrad (Zoom oder Panel-Scroll).

use super::{region_at, InteractionState, MouseDrag, Region};
use crate::app::{AppIntent, AppState};
use crate::shared::options::WHEEL_SCROLL_PX;
use crate::shared::{InputFrame, Menu, RenderScene};

/// Ab dieser Wegstrecke (Pixel) unterdrückt ein Drag den folgenden Klick.
const CLICK_SLOP_PX: f32 = 1.0;

impl InteractionState {
    /// Verarbeitet das Mausrad: Scroll über Panels, sonst Zoom um den Mauszeiger.
    pub(crate) fn handle_wheel(
        &mut self,
        scene: &RenderScene<'_>,
        input: &InputFrame,
        events: &mut Vec<AppIntent>,
    ) {
        if input.wheel == 0.0 {
            return;
        }
        let Some(pointer) = input.pointer else {
            return;
        };
        let sign = input.wheel.signum();

        match region_at(scene, pointer) {
            Region::Panel(panel) => {
                events.push(AppIntent::PanelScrolled {
                    panel,
                    delta: -sign * WHEEL_SCROLL_PX * scene.ui_scale,
                });
            }
            Region::Overlay => {}
            Region::Map => {
                if scene.menu == Menu::GeyserList {
                    return;
                }
                let throttle_s = scene.options.wheel_throttle_ms as f64 / 1000.0;
                if throttle_s > 0.0 {
                    if let Some(last) = self.last_wheel {
                        if input.time >= last && input.time - last < throttle_s {
                            return;
                        }
                    }
                }
                self.last_wheel = Some(input.time);
                let factor = scene.options.wheel_zoom_factor;
                events.push(AppIntent::CameraZoom {
                    screen: pointer,
                    factor: if sign > 0.0 { factor } else { 1.0 / factor },
                });
            }
        }
    }

    /// Verarbeitet die Primärtaste: Drag auf der Karte schwenkt die Kamera,
    /// ein Loslassen ohne nennenswerte Bewegung ist ein Klick.
    pub(crate) fn handle_mouse(
        &mut self,
        state: &AppState,
        scene: &RenderScene<'_>,
        input: &InputFrame,
        events: &mut Vec<AppIntent>,
    ) {
        let Some(pointer) = input.pointer else {
            if input.primary_released {
                self.drag = None;
            }
            return;
        };

        if input.primary_pressed {
            self.drag = Some(MouseDrag {
                last: pointer,
                travelled: 0.0,
                region: region_at(scene, pointer),
            });
        }

        if let Some(drag) = self.drag.as_mut() {
            let delta = pointer - drag.last;
            if delta != glam::Vec2::ZERO {
                drag.travelled += delta.length();
                drag.last = pointer;
                if drag.region == Region::Map && scene.menu != Menu::GeyserList {
                    events.push(AppIntent::CameraPan { delta });
                }
            }
        }

        if input.primary_released {
            if let Some(drag) = self.drag.take() {
                if drag.travelled <= CLICK_SLOP_PX {
                    self.click(state, scene, pointer, input.time, events);
                }
            }
        }
    }
}
