//! Touch-Gesten: Ein-Finger-Pan/Scroll, Zwei-Finger-Pinch, Tap.

use glam::Vec2;

use super::{region_at, InteractionState, Region, TouchGesture};
use crate::app::{AppIntent, AppState};
use crate::shared::{InputFrame, Menu, RenderScene};

/// Ab dieser Verschiebung (Pixel, je Achse) gilt eine Berührung als bewegt.
const TAP_SLOP_PX: f32 = 3.0;

impl InteractionState {
    /// Verarbeitet die aktiven Berührungspunkte.
    pub(crate) fn handle_touch(
        &mut self,
        state: &AppState,
        scene: &RenderScene<'_>,
        input: &InputFrame,
        events: &mut Vec<AppIntent>,
    ) {
        match input.touches.as_slice() {
            [] => {
                if let Some(gesture) = self.touch.take() {
                    if !gesture.moved && !gesture.pinched {
                        self.click(state, scene, gesture.start, input.time, events);
                    }
                }
            }
            [touch] => {
                if input.touches_started.contains(&touch.id)
                    && self.touch.is_some_and(|g| !g.pinched)
                {
                    self.touch = None;
                }
                let gesture = self.touch.get_or_insert_with(|| TouchGesture {
                    start: touch.pos,
                    ..TouchGesture::default()
                });
                let region = *gesture
                    .region
                    .get_or_insert_with(|| region_at(scene, touch.pos));

                let Some(last) = gesture.last.replace(touch.pos) else {
                    return;
                };
                gesture.prev_distance = None;
                let travel = (touch.pos - gesture.start).abs();
                if travel.x > TAP_SLOP_PX || travel.y > TAP_SLOP_PX {
                    gesture.moved = true;
                }
                let delta = touch.pos - last;
                if delta == Vec2::ZERO {
                    return;
                }
                match region {
                    Region::Panel(panel) => events.push(AppIntent::PanelScrolled {
                        panel,
                        delta: -delta.y,
                    }),
                    Region::Map if scene.menu != Menu::GeyserList => {
                        events.push(AppIntent::CameraPan { delta });
                    }
                    Region::Map | Region::Overlay => {}
                }
            }
            [a, b, ..] => {
                let gesture = self.touch.get_or_insert_with(|| TouchGesture {
                    start: a.pos,
                    ..TouchGesture::default()
                });
                gesture.pinched = true;
                gesture.moved = false;
                gesture.last = None;

                let distance = a.pos.distance(b.pos);
                let mid = (a.pos + b.pos) * 0.5;
                if let Some(prev) = gesture.prev_distance {
                    if prev > 0.0 && distance > 0.0 && scene.menu != Menu::GeyserList {
                        events.push(AppIntent::CameraZoom {
                            screen: mid,
                            factor: distance / prev,
                        });
                    }
                }
                gesture.prev_distance = Some(distance);
            }
        }
    }
}
