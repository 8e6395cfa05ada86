//! Cursor blink scheduling.
//!
//! The timer is owned by the event loop rather than running on its own
//! thread: the loop asks how long it may sleep, and after waking tells the
//! timer the current time to learn whether a toggle is due. Dropping the app
//! drops the timer; nothing leaks.

use std::time::{Duration, Instant};

pub const BLINK_INTERVAL: Duration = Duration::from_millis(530);

/// Deadline-based blink timer. Disabled while reduced motion is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlinkTimer {
    next_toggle: Option<Instant>,
}

impl BlinkTimer {
    pub fn new(enabled: bool, now: Instant) -> Self {
        Self {
            next_toggle: enabled.then(|| now + BLINK_INTERVAL),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.next_toggle.is_some()
    }

    /// Enable or disable blinking. Enabling restarts the cadence from `now`;
    /// disabling drops the pending deadline.
    pub fn set_enabled(&mut self, enabled: bool, now: Instant) {
        self.next_toggle = match (enabled, self.next_toggle) {
            (true, None) => Some(now + BLINK_INTERVAL),
            (true, existing @ Some(_)) => existing,
            (false, _) => None,
        };
    }

    /// How long the event loop may sleep before the next toggle is due.
    /// `None` when disabled.
    pub fn timeout(&self, now: Instant) -> Option<Duration> {
        self.next_toggle
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns true when a toggle is due, advancing the deadline. A late
    /// wakeup schedules the next toggle relative to `now` rather than trying
    /// to catch up.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next_toggle {
            Some(deadline) if now >= deadline => {
                self.next_toggle = Some(now + BLINK_INTERVAL);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_at_cadence() {
        let start = Instant::now();
        let mut timer = BlinkTimer::new(true, start);

        assert!(!timer.tick(start));
        assert!(!timer.tick(start + Duration::from_millis(529)));
        assert!(timer.tick(start + BLINK_INTERVAL));

        // Next toggle is one interval after the last tick.
        let after = start + BLINK_INTERVAL;
        assert!(!timer.tick(after + Duration::from_millis(100)));
        assert!(timer.tick(after + BLINK_INTERVAL));
    }

    #[test]
    fn test_disabled_never_toggles() {
        let start = Instant::now();
        let mut timer = BlinkTimer::new(false, start);

        assert!(!timer.is_enabled());
        assert_eq!(timer.timeout(start), None);
        assert!(!timer.tick(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_enable_disable_mid_session() {
        let start = Instant::now();
        let mut timer = BlinkTimer::new(true, start);

        timer.set_enabled(false, start);
        assert!(!timer.tick(start + Duration::from_secs(1)));

        let resumed = start + Duration::from_secs(2);
        timer.set_enabled(true, resumed);
        assert!(!timer.tick(resumed + Duration::from_millis(100)));
        assert!(timer.tick(resumed + BLINK_INTERVAL));
    }

    #[test]
    fn test_enabling_twice_keeps_existing_deadline() {
        let start = Instant::now();
        let mut timer = BlinkTimer::new(true, start);

        timer.set_enabled(true, start + Duration::from_millis(500));
        // Deadline unchanged: still due at start + interval.
        assert!(timer.tick(start + BLINK_INTERVAL));
    }

    #[test]
    fn test_timeout_saturates_when_overdue() {
        let start = Instant::now();
        let timer = BlinkTimer::new(true, start);
        assert_eq!(
            timer.timeout(start + Duration::from_secs(5)),
            Some(Duration::ZERO)
        );
    }
}
