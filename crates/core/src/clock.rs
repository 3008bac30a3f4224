//! Countdown game clock driven by fixed-timestep ticks.

use std::fmt;

use crate::types::DEFAULT_CLOCK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameClock {
    total_ms: u32,
    remaining_ms: u32,
    paused: bool,
}

impl GameClock {
    pub fn new(total_ms: u32) -> Self {
        Self {
            total_ms,
            remaining_ms: total_ms,
            paused: false,
        }
    }

    /// Advance by `elapsed_ms`. Returns true on the tick that runs the clock out.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.remaining_ms == 0 {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.remaining_ms == 0
    }

    pub fn remaining_ms(&self) -> u32 {
        self.remaining_ms
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Back to the full duration, running.
    pub fn reset(&mut self) {
        self.remaining_ms = self.total_ms;
        self.paused = false;
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(DEFAULT_CLOCK_MS)
    }
}

/// `mm:ss`, rounding partial seconds up so the clock reads 0:00 only once expired.
impl fmt::Display for GameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.remaining_ms.div_ceil(1000);
        write!(f, "{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reads_ten_minutes() {
        assert_eq!(GameClock::default().to_string(), "10:00");
    }

    #[test]
    fn test_partial_seconds_round_up() {
        let mut clock = GameClock::new(61_000);
        clock.tick(1);
        assert_eq!(clock.to_string(), "01:01");
        clock.tick(999);
        assert_eq!(clock.to_string(), "01:00");
    }

    #[test]
    fn test_expiry_reported_once() {
        let mut clock = GameClock::new(32);
        assert!(!clock.tick(16));
        assert!(clock.tick(16));
        assert!(!clock.tick(16));
        assert!(clock.is_expired());
        assert_eq!(clock.to_string(), "00:00");
    }

    #[test]
    fn test_pause_freezes_time() {
        let mut clock = GameClock::new(1000);
        clock.toggle_pause();
        clock.tick(500);
        assert_eq!(clock.remaining_ms(), 1000);
        clock.toggle_pause();
        clock.tick(500);
        assert_eq!(clock.remaining_ms(), 500);
    }

    #[test]
    fn test_reset_restores_and_resumes() {
        let mut clock = GameClock::new(1000);
        clock.tick(400);
        clock.toggle_pause();
        clock.reset();
        assert_eq!(clock.remaining_ms(), 1000);
        assert!(!clock.is_paused());
    }
}
