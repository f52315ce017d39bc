//! Game and session configuration types.
//!
//! Values are built in code through the named constructors below; reading them
//! from a file is left to the embedding application.

const MINUTE_MS: f64 = 60_000.0;
const SECOND_MS: f64 = 1_000.0;

/// Starting time per side and the increment added after each move, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeControl {
    pub initial_ms: f64,
    pub increment_ms: f64,
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::rapid()
    }
}

impl TimeControl {
    pub fn new(initial_ms: f64, increment_ms: f64) -> Self {
        Self {
            initial_ms,
            increment_ms,
        }
    }

    /// 1 minute, no increment
    pub fn bullet() -> Self {
        Self::new(MINUTE_MS, 0.0)
    }

    /// 3 minutes + 2 seconds
    pub fn blitz() -> Self {
        Self::new(3.0 * MINUTE_MS, 2.0 * SECOND_MS)
    }

    /// 10 minutes, no increment
    pub fn rapid() -> Self {
        Self::new(10.0 * MINUTE_MS, 0.0)
    }

    /// 30 minutes + 30 seconds
    pub fn classical() -> Self {
        Self::new(30.0 * MINUTE_MS, 30.0 * SECOND_MS)
    }
}

/// Configuration of one local session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Clock settings used by every new game
    pub time_control: TimeControl,
    /// Let the local user move for both colors (hot-seat play).
    /// When false, once the clock runs the user may only move their own color.
    pub allow_both_sides: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::online(TimeControl::default())
    }
}

impl SessionConfig {
    /// Two players on one device
    pub fn hot_seat(time_control: TimeControl) -> Self {
        Self {
            time_control,
            allow_both_sides: true,
        }
    }

    /// One local player against a remote peer
    pub fn online(time_control: TimeControl) -> Self {
        Self {
            time_control,
            allow_both_sides: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(TimeControl::bullet().initial_ms, 60_000.0);
        assert_eq!(TimeControl::blitz().increment_ms, 2_000.0);
        assert_eq!(TimeControl::classical().initial_ms, 1_800_000.0);
        assert_eq!(TimeControl::default(), TimeControl::rapid());
    }

    #[test]
    fn test_hot_seat_config() {
        let config = SessionConfig::hot_seat(TimeControl::blitz());
        assert!(config.allow_both_sides);
        assert_eq!(config.time_control, TimeControl::blitz());
    }

    #[test]
    fn test_online_config() {
        let config = SessionConfig::online(TimeControl::bullet());
        assert!(!config.allow_both_sides);
        assert_eq!(SessionConfig::default().allow_both_sides, false);
    }
}
