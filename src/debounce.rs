//! Trailing-edge debouncer driven by an explicit clock.
//!
//! The debouncer holds at most one pending argument set. Every
//! [`Debouncer::schedule`] replaces the pending arguments and pushes the
//! deadline out to `now + window`; [`Debouncer::poll`] hands the arguments back
//! once the deadline has passed. Nothing here reads the system clock, so
//! callers (the TUI's timer task, or tests) decide what "now" is.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<T> {
    args: T,
    deadline: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Record a call at `now`, superseding any pending one
    pub fn schedule(&mut self, args: T, now: Instant) {
        self.pending = Some(Pending {
            args,
            deadline: now + self.window,
        });
    }

    /// Take the pending arguments if the quiet window has elapsed by `now`
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    /// When the pending call will fire, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending call without running it
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.args)
    }

    /// Take the pending call immediately, ignoring the deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.args)
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(Duration::from_millis(400))
    }
}
