//! Lookup debouncer
//!
//! Holds at most one pending query with a deadline. Scheduling a new query
//! replaces the previous one, so only the last keystroke in a burst fires.

use std::time::{Duration, Instant};

use crate::query::Query;

/// Default quiet period before a lookup is issued
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(Instant, Query)>,
}

impl Debouncer {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(debounce_ms),
            pending: None,
        }
    }

    /// Replace any pending query with `query`, due `delay` after `now`
    pub fn schedule(&mut self, query: Query, now: Instant) {
        self.pending = Some((now + self.delay, query));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending query becomes due, if there is one
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the pending query if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<Query> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => {
                self.pending.take().map(|(_, query)| query)
            }
            _ => None,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(text: &str) -> Query {
        Query::parse(text, 1).unwrap()
    }

    #[test]
    fn test_not_due_before_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300);
        debouncer.schedule(query("pa"), start);

        assert!(debouncer.take_due(start + Duration::from_millis(299)).is_none());
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_due_at_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300);
        debouncer.schedule(query("pa"), start);

        let due = debouncer.take_due(start + Duration::from_millis(300));
        assert_eq!(due, Some(query("pa")));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_deadline_is_delay_after_schedule() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300);
        assert!(debouncer.deadline().is_none());

        debouncer.schedule(query("pa"), start);
        assert_eq!(debouncer.deadline(), Some(start + Duration::from_millis(300)));
    }

    #[test]
    fn test_fires_only_once() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(100);
        debouncer.schedule(query("pa"), start);

        let later = start + Duration::from_millis(500);
        assert!(debouncer.take_due(later).is_some());
        assert!(debouncer.take_due(later).is_none());
    }

    #[test]
    fn test_reschedule_replaces_pending_query_and_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(300);
        debouncer.schedule(query("pa"), start);
        debouncer.schedule(query("par"), start + Duration::from_millis(200));

        // First deadline passed, but it was replaced
        assert!(debouncer.take_due(start + Duration::from_millis(300)).is_none());
        assert_eq!(
            debouncer.take_due(start + Duration::from_millis(500)),
            Some(query("par"))
        );
    }

    #[test]
    fn test_cancel_drops_pending_query() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(0);
        debouncer.schedule(query("pa"), start);
        debouncer.cancel();

        assert!(debouncer.take_due(start + Duration::from_secs(1)).is_none());
        assert!(debouncer.deadline().is_none());
    }

    #[test]
    fn test_zero_delay_is_due_immediately() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(0);
        debouncer.schedule(query("pa"), start);
        assert!(debouncer.take_due(start).is_some());
    }
}
