use super::*;
use crate::config::TimeControl;

/// Remaining time per side plus the running timestamp.
/// `started_at_ms == 0.0` means the clock has not started yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChessClock {
    pub white_ms: f64,
    pub black_ms: f64,
    pub increment_ms: f64,
    pub started_at_ms: f64,
}

impl Default for ChessClock {
    fn default() -> Self {
        Self::new(TimeControl::default())
    }
}

impl ChessClock {
    pub fn new(time_control: TimeControl) -> Self {
        Self {
            white_ms: time_control.initial_ms,
            black_ms: time_control.initial_ms,
            increment_ms: time_control.increment_ms,
            started_at_ms: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at_ms != 0.0
    }

    pub fn remaining(&self, color: Color) -> f64 {
        match color {
            Color::White => self.white_ms,
            Color::Black => self.black_ms,
        }
    }

    fn remaining_mut(&mut self, color: Color) -> &mut f64 {
        match color {
            Color::White => &mut self.white_ms,
            Color::Black => &mut self.black_ms,
        }
    }

    pub fn add_increment(&mut self, color: Color) {
        let inc = self.increment_ms;
        *self.remaining_mut(color) += inc;
    }

    /// Charges the time elapsed since the last tick to `active`.
    /// Returns true when `active` ran out of time; its clock is clamped to 0.
    pub fn tick(&mut self, active: Color, now_ms: f64) -> bool {
        if !self.is_running() {
            return false;
        }
        let elapsed = (now_ms - self.started_at_ms).max(0.0);
        self.started_at_ms = now_ms;

        let left = self.remaining_mut(active);
        *left -= elapsed;
        if *left <= 0.0 {
            *left = 0.0;
            return true;
        }
        false
    }
}
