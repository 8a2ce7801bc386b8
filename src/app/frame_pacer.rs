//! Entscheidet pro Tick, ob ein neuer Frame komponiert wird.

use glam::Vec2;

use crate::shared::InputFrame;

/// Spätestens nach dieser Zeit wird auch im Stromsparmodus neu komponiert.
pub const POWER_SAVER_INTERVAL_S: f64 = 3.0;

/// Taktgeber für das Komponieren.
///
/// Im Stromsparmodus wird nur bei Redraw-Anforderung, Größenänderung,
/// Rückkehr aus dem minimierten Zustand oder nach `POWER_SAVER_INTERVAL_S`
/// komponiert, sonst in jedem Tick. Minimiert wird nie komponiert.
#[derive(Debug, Clone, Default)]
pub struct FramePacer {
    last_compose: Option<f64>,
    last_viewport: Vec2,
    was_minimized: bool,
}

impl FramePacer {
    /// Erstellt einen Taktgeber, der beim ersten Tick komponiert.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt `true` zurück, wenn in diesem Tick komponiert werden soll.
    pub fn should_compose(&mut self, input: &InputFrame, power_saver: bool, redraw: bool) -> bool {
        if input.minimized {
            self.was_minimized = true;
            return false;
        }
        let resized = input.viewport != self.last_viewport;
        let restored = std::mem::take(&mut self.was_minimized);
        self.last_viewport = input.viewport;

        let overdue = self
            .last_compose
            .is_none_or(|last| input.time - last >= POWER_SAVER_INTERVAL_S);
        let compose = !power_saver || redraw || resized || restored || overdue;
        if compose {
            self.last_compose = Some(input.time);
        }
        compose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(time: f64) -> InputFrame {
        InputFrame::idle(time, Vec2::new(640.0, 480.0))
    }

    #[test]
    fn power_saver_composes_only_on_demand_or_timeout() {
        let mut pacer = FramePacer::new();

        assert!(pacer.should_compose(&frame(0.0), true, false));
        assert!(!pacer.should_compose(&frame(1.0), true, false));
        assert!(pacer.should_compose(&frame(1.5), true, true));
        assert!(!pacer.should_compose(&frame(4.0), true, false));
        assert!(pacer.should_compose(&frame(4.5), true, false));
    }

    #[test]
    fn without_power_saver_every_tick_composes() {
        let mut pacer = FramePacer::new();
        pacer.should_compose(&frame(0.0), false, false);
        assert!(pacer.should_compose(&frame(0.1), false, false));
    }

    #[test]
    fn minimized_never_composes_and_restore_does() {
        let mut pacer = FramePacer::new();
        pacer.should_compose(&frame(0.0), true, false);

        let minimized = InputFrame {
            minimized: true,
            ..frame(0.5)
        };
        assert!(!pacer.should_compose(&minimized, false, true));
        assert!(pacer.should_compose(&frame(0.6), true, false));
    }

    #[test]
    fn resize_composes() {
        let mut pacer = FramePacer::new();
        pacer.should_compose(&frame(0.0), true, false);
        let resized = InputFrame::idle(0.1, Vec2::new(800.0, 600.0));
        assert!(pacer.should_compose(&resized, true, false));
    }
}
