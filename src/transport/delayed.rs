// src/transport/delayed.rs
//! A cancellable, fire-once delayed action driven by a polled clock.

use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone, Copy)]
pub struct DelayedAction {
    deadline: Option<Instant>,
}

impl DelayedAction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the action to fire `delay` after `now`, replacing any earlier deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarm. Returns whether the action was armed.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// True if armed and `now` is still before the deadline.
    pub fn is_pending_at(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|d| now < d)
    }

    /// Disarm and return true if the deadline has passed.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn fires_once_after_deadline() {
        let t0 = Instant::now();
        let mut action = DelayedAction::new();
        action.schedule(t0, WINDOW);

        assert!(!action.fire_if_due(t0 + Duration::from_millis(299)));
        assert!(action.fire_if_due(t0 + WINDOW));
        assert!(!action.fire_if_due(t0 + Duration::from_secs(5)));
        assert!(!action.is_armed());
    }

    #[test]
    fn cancel_prevents_firing() {
        let t0 = Instant::now();
        let mut action = DelayedAction::new();
        action.schedule(t0, WINDOW);

        assert!(action.is_pending_at(t0 + Duration::from_millis(100)));
        assert!(action.cancel());
        assert!(!action.cancel());
        assert!(!action.fire_if_due(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn reschedule_moves_deadline() {
        let t0 = Instant::now();
        let mut action = DelayedAction::new();
        action.schedule(t0, WINDOW);
        action.schedule(t0 + Duration::from_millis(200), WINDOW);

        assert!(!action.fire_if_due(t0 + WINDOW));
        assert_eq!(action.deadline(), Some(t0 + Duration::from_millis(500)));
    }
}
