//! The edit-mode wobble clock.
//!
//! Purely cosmetic: while edit mode is active the tiles sway, and this clock
//! flips the sway direction on a fixed period. It is started when edit mode
//! is entered, stopped when edit mode is left, and carries no state beyond
//! its own phase.

use std::time::Instant;

use crate::config::{WOBBLE_ANGLE_RADIANS, WOBBLE_PERIOD};

#[derive(Debug, Default)]
pub struct Wobble {
    active: bool,
    phase: bool,
    last_flip: Option<Instant>,
}

impl Wobble {
    /// Idempotent: starting an already running clock does not reset it.
    pub fn start(&mut self, now: Instant) {
        if self.active {
            return;
        }
        self.active = true;
        self.phase = false;
        self.last_flip = Some(now);
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.phase = false;
        self.last_flip = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the clock. `now` is injected so tests own the timeline.
    pub fn tick(&mut self, now: Instant) {
        if !self.active {
            return;
        }
        if let Some(last) = self.last_flip {
            if now.duration_since(last) >= WOBBLE_PERIOD {
                self.phase = !self.phase;
                self.last_flip = Some(now);
            }
        }
    }

    /// Current sway in radians; zero while stopped.
    pub fn angle(&self) -> f32 {
        if !self.active {
            0.0
        } else if self.phase {
            WOBBLE_ANGLE_RADIANS
        } else {
            -WOBBLE_ANGLE_RADIANS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_clock_has_no_sway() {
        let w = Wobble::default();
        assert!(!w.is_active());
        assert_eq!(w.angle(), 0.0);
    }

    #[test]
    fn start_and_stop_are_symmetric() {
        let now = Instant::now();
        let mut w = Wobble::default();
        w.start(now);
        assert!(w.is_active());
        assert_ne!(w.angle(), 0.0);
        w.stop();
        assert!(!w.is_active());
        assert_eq!(w.angle(), 0.0);
    }

    #[test]
    fn phase_flips_only_after_the_period() {
        let now = Instant::now();
        let mut w = Wobble::default();
        w.start(now);
        let before = w.angle();

        w.tick(now + WOBBLE_PERIOD / 2);
        assert_eq!(w.angle(), before, "half a period is too soon");

        w.tick(now + WOBBLE_PERIOD);
        assert_eq!(w.angle(), -before, "full period flips the sway");
    }

    #[test]
    fn ticking_a_stopped_clock_does_nothing() {
        let now = Instant::now();
        let mut w = Wobble::default();
        w.tick(now + WOBBLE_PERIOD * 10);
        assert_eq!(w.angle(), 0.0);
    }
}
