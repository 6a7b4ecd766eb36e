//! Countdown timer state.

/// Seconds before unattended launch.
pub const COUNTDOWN_SECONDS: u32 = 20;

/// Remaining seconds plus whether ticks are being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    active: bool,
}

impl Countdown {
    /// A running countdown at the full delay.
    pub fn new() -> Self {
        Self {
            remaining: COUNTDOWN_SECONDS,
            active: true,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Count one elapsed second. Returns true when the countdown reaches zero.
    ///
    /// Inactive countdowns ignore ticks.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }

    /// Back to the full delay, counting.
    pub fn restart(&mut self) {
        self.remaining = COUNTDOWN_SECONDS;
        self.active = true;
    }

    /// Back to the full delay, but only while counting.
    pub fn reset_if_active(&mut self) {
        if self.active {
            self.remaining = COUNTDOWN_SECONDS;
        }
    }

    /// Stop counting; the remaining value stays frozen.
    pub fn stop(&mut self) {
        self.active = false;
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_down_to_zero_and_stays() {
        let mut countdown = Countdown::new();
        for _ in 0..COUNTDOWN_SECONDS - 1 {
            assert!(!countdown.tick());
        }
        assert!(countdown.tick());
        assert_eq!(countdown.remaining(), 0);

        countdown.tick();
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn stopped_countdown_is_frozen() {
        let mut countdown = Countdown::new();
        countdown.tick();
        countdown.stop();
        countdown.tick();
        countdown.reset_if_active();

        assert_eq!(countdown.remaining(), COUNTDOWN_SECONDS - 1);
        assert!(!countdown.is_active());
    }

    #[test]
    fn restart_reactivates() {
        let mut countdown = Countdown::new();
        countdown.tick();
        countdown.stop();
        countdown.restart();

        assert!(countdown.is_active());
        assert_eq!(countdown.remaining(), COUNTDOWN_SECONDS);
    }
}
