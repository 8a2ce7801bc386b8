//! egui-Eingaben → `InputFrame`.

use std::collections::BTreeMap;

use glam::Vec2;

use crate::shared::{InputFrame, Key, TouchPoint};

/// Hält aktive Berührungen über Frames hinweg.
///
/// egui liefert Touch-Ereignisse nur als Start/Move/End; das Interaktionsmodul
/// erwartet pro Frame die Menge der aktiven Finger.
#[derive(Debug, Default)]
pub struct InputCollector {
    touches: BTreeMap<u64, Vec2>,
}

impl InputCollector {
    /// Erstellt einen leeren Collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liest die Eingaben des aktuellen egui-Frames.
    ///
    /// Solange Finger aufliegen, werden die von egui emulierten Maustasten ignoriert.
    pub fn collect(&mut self, ctx: &egui::Context, viewport: Vec2) -> InputFrame {
        ctx.input(|i| {
            let mut touches_started = Vec::new();
            for event in &i.events {
                if let egui::Event::Touch { id, phase, pos, .. } = event {
                    let pos = Vec2::new(pos.x, pos.y);
                    match phase {
                        egui::TouchPhase::Start => {
                            self.touches.insert(id.0, pos);
                            touches_started.push(id.0);
                        }
                        egui::TouchPhase::Move => {
                            self.touches.insert(id.0, pos);
                        }
                        egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                            self.touches.remove(&id.0);
                        }
                    }
                }
            }

            let touching = !self.touches.is_empty() || !touches_started.is_empty();
            let keys = KEY_MAP
                .iter()
                .filter(|(egui_key, _)| i.key_pressed(*egui_key))
                .map(|(_, key)| *key)
                .fold(Vec::new(), |mut keys, key| {
                    if !keys.contains(&key) {
                        keys.push(key);
                    }
                    keys
                });

            InputFrame {
                time: i.time,
                viewport,
                minimized: i.viewport().minimized.unwrap_or(false),
                pointer: i.pointer.hover_pos().map(|p| Vec2::new(p.x, p.y)),
                primary_down: !touching && i.pointer.primary_down(),
                primary_pressed: !touching && i.pointer.primary_pressed(),
                primary_released: !touching && i.pointer.primary_released(),
                wheel: if touching { 0.0 } else { i.raw_scroll_delta.y },
                touches: self
                    .touches
                    .iter()
                    .map(|(&id, &pos)| TouchPoint { id, pos })
                    .collect(),
                touches_started,
                keys,
            }
        })
    }
}

/// Zuordnung egui-Taste → Betrachter-Taste.
const KEY_MAP: &[(egui::Key, Key)] = &[
    (egui::Key::Escape, Key::Escape),
    (egui::Key::Plus, Key::Plus),
    (egui::Key::Equals, Key::Plus),
    (egui::Key::Minus, Key::Minus),
    (egui::Key::Home, Key::Home),
    (egui::Key::F, Key::F),
    (egui::Key::ArrowLeft, Key::ArrowLeft),
    (egui::Key::ArrowRight, Key::ArrowRight),
    (egui::Key::ArrowUp, Key::ArrowUp),
    (egui::Key::ArrowDown, Key::ArrowDown),
    (egui::Key::T, Key::T),
    (egui::Key::N, Key::N),
    (egui::Key::L, Key::L),
    (egui::Key::H, Key::H),
    (egui::Key::G, Key::G),
    (egui::Key::P, Key::P),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(collector: &mut InputCollector, events: Vec<egui::Event>) -> InputFrame {
        let ctx = egui::Context::default();
        let raw = egui::RawInput {
            events,
            ..Default::default()
        };
        let mut frame = InputFrame::default();
        let _ = ctx.run(raw, |ctx| {
            frame = collector.collect(ctx, Vec2::new(640.0, 480.0));
        });
        frame
    }

    fn touch(id: u64, phase: egui::TouchPhase, x: f32, y: f32) -> egui::Event {
        egui::Event::Touch {
            device_id: egui::TouchDeviceId(1),
            id: egui::TouchId(id),
            phase,
            pos: egui::pos2(x, y),
            force: None,
        }
    }

    #[test]
    fn touches_persist_until_released() {
        let mut collector = InputCollector::new();

        let frame = run_frame(&mut collector, vec![touch(7, egui::TouchPhase::Start, 10.0, 20.0)]);
        assert_eq!(frame.touches_started, vec![7]);
        assert_eq!(frame.touches.len(), 1);
        assert!(!frame.primary_down);

        let frame = run_frame(&mut collector, vec![touch(7, egui::TouchPhase::Move, 15.0, 20.0)]);
        assert!(frame.touches_started.is_empty());
        assert_eq!(frame.touches[0].pos, Vec2::new(15.0, 20.0));

        let frame = run_frame(&mut collector, vec![touch(7, egui::TouchPhase::End, 15.0, 20.0)]);
        assert!(frame.touches.is_empty());
    }

    #[test]
    fn letter_keys_are_mapped() {
        let mut collector = InputCollector::new();
        let press = |key| egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        let frame = run_frame(&mut collector, vec![press(egui::Key::G), press(egui::Key::Equals)]);
        assert!(frame.key_pressed(Key::G));
        assert!(frame.key_pressed(Key::Plus));
        assert!(!frame.key_pressed(Key::H));
    }
}
