//! Trailing-edge debounce with caller-supplied time.
//!
//! # Invariants
//! - At most one value is pending; a new push cancels the previous one.
//! - A pending value is released once, after `quiet` has elapsed since the
//!   latest push.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Queues `value`, replacing any pending value and restarting the timer.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Releases the pending value when its quiet period has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = self
            .deadline()
            .is_some_and(|deadline| now >= deadline);
        if ready {
            self.flush()
        } else {
            None
        }
    }

    /// Releases the pending value immediately.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending value becomes ready.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|(_, queued_at)| *queued_at + self.quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::Debouncer;
    use std::time::{Duration, Instant};

    #[test]
    fn rapid_pushes_collapse_into_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.push("s", start);
        debouncer.push("su", start + Duration::from_millis(100));
        debouncer.push("sum", start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("sum")
        );
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn flush_and_cancel_clear_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.push(1, start);
        assert_eq!(debouncer.flush(), Some(1));

        debouncer.push(2, start);
        debouncer.cancel();
        assert_eq!(debouncer.deadline(), None);
        assert_eq!(debouncer.flush(), None);
    }
}
