/// Cancel-and-reschedule single-shot timer for collapsing typing bursts.
///
/// The host event loop owns time: it passes `Instant`s in and polls for
/// expiry, so no thread or async runtime is involved.
use std::time::{Duration, Instant};

/// Holds at most one pending value that fires after a quiet period.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules `value` to fire `delay` after `now`.
    ///
    /// Any pending value is replaced and its deadline discarded.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Returns the pending value once its deadline has been reached.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.deadline().is_some_and(|deadline| now >= deadline);
        if due {
            self.flush()
        } else {
            None
        }
    }

    /// Takes the pending value immediately, regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    /// Drops the pending value without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, d)| *d)
    }
}
