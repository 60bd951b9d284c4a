//! Host-style timers driven by simulated time.
//!
//! A [`Timer`] mirrors the browser's `setInterval` / `setTimeout` pair but is
//! advanced explicitly with the fixed step delta, so sequences built on it
//! are reproducible in tests without a wall clock.

/// Repeating interval or one-shot delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    period: f32,
    elapsed: f32,
    repeating: bool,
    armed: bool,
}

impl Timer {
    /// A repeating timer firing every `period` seconds, armed immediately.
    pub fn interval(period: f32) -> Self {
        Self {
            period,
            elapsed: 0.0,
            repeating: true,
            armed: true,
        }
    }

    /// A one-shot timer firing once after `delay` seconds, armed immediately.
    pub fn timeout(delay: f32) -> Self {
        Self {
            period: delay,
            elapsed: 0.0,
            repeating: false,
            armed: true,
        }
    }

    /// A one-shot timer that does nothing until [`Timer::arm`] is called.
    pub fn disarmed_timeout(delay: f32) -> Self {
        Self {
            armed: false,
            ..Self::timeout(delay)
        }
    }

    /// Restart the countdown from zero.
    pub fn arm(&mut self) {
        self.elapsed = 0.0;
        self.armed = true;
    }

    /// Stop the timer. Pending time is discarded.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Advance by `dt` seconds and return how many times the timer fired.
    /// A one-shot timer fires at most once and disarms itself.
    pub fn tick(&mut self, dt: f32) -> u32 {
        if !self.armed {
            return 0;
        }
        self.elapsed += dt;
        if self.elapsed < self.period {
            return 0;
        }
        if !self.repeating {
            self.cancel();
            return 1;
        }
        if self.period <= 0.0 {
            self.elapsed = 0.0;
            return 1;
        }
        let fired = (self.elapsed / self.period) as u32;
        self.elapsed -= fired as f32 * self.period;
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn interval_fires_on_cadence() {
        let mut t = Timer::interval(0.05);
        assert_eq!(t.tick(0.03), 0);
        assert_eq!(t.tick(0.03), 1);
        assert_eq!(t.tick(0.03), 0);
        assert_eq!(t.tick(0.03), 1);
        assert!(t.is_armed());
    }

    #[test]
    fn interval_reports_multiple_firings_in_long_tick() {
        let mut t = Timer::interval(0.05);
        assert_eq!(t.tick(0.16), 3);
    }

    #[test]
    fn timeout_fires_once_then_disarms() {
        let mut t = Timer::timeout(2.0);
        assert_eq!(t.tick(1.5), 0);
        assert_eq!(t.tick(1.0), 1);
        assert!(!t.is_armed());
        assert_eq!(t.tick(5.0), 0);
    }

    #[test]
    fn cancelled_timer_stays_silent() {
        let mut t = Timer::interval(0.05);
        t.cancel();
        assert_eq!(t.tick(1.0), 0);
    }

    #[test]
    fn disarmed_timeout_waits_for_arm() {
        let mut t = Timer::disarmed_timeout(0.1);
        assert_eq!(t.tick(1.0), 0);
        t.arm();
        assert_eq!(t.tick(0.04), 0);
        assert_eq!(t.tick(0.07), 1);
    }

    proptest! {
        #[test]
        fn interval_fire_count_tracks_elapsed_time(
            steps in prop::collection::vec(0.0f32..0.3, 0..200),
        ) {
            let mut t = Timer::interval(0.05);
            let fired: u32 = steps.iter().map(|dt| t.tick(*dt)).sum();
            let total: f32 = steps.iter().sum();
            let expected = total / 0.05;
            prop_assert!((fired as f32 - expected).abs() <= 1.0 + expected * 1e-3);
        }

        #[test]
        fn timeout_fires_at_most_once(
            steps in prop::collection::vec(0.0f32..1.0, 0..50),
        ) {
            let mut t = Timer::timeout(2.0);
            let fired: u32 = steps.iter().map(|dt| t.tick(*dt)).sum();
            prop_assert!(fired <= 1);
            let total: f32 = steps.iter().sum();
            if total >= 2.01 {
                prop_assert_eq!(fired, 1);
            }
        }
    }
}
