//! Matcher seam used by the scorers.
//!
//! Scoring code never calls the boundary or date helpers directly; it goes
//! through `TextMatcher` so the boundary set and dictionaries can be swapped in
//! tests. Diagnostics go to an injected `MatchObserver` (no-op by default) so the
//! predicate itself stays side-effect free.

use std::sync::Arc;

use crate::text::boundary::count_term;
use crate::text::dates::{extract_dates, extract_employment_ranges, DateMention, EmploymentRange};
use crate::text::synonyms::{MatchVia, SynonymResolver};

pub trait TextMatcher: Send + Sync {
    /// Boundary-safe, synonym-aware presence check.
    fn term_exists(&self, term: &str, text: &str) -> bool;

    /// Exact boundary-safe occurrences of `term` itself (no synonyms).
    fn count_occurrences(&self, term: &str, text: &str) -> usize;

    fn extract_dates(&self, text: &str) -> Vec<DateMention>;

    fn employment_ranges(&self, text: &str) -> Vec<EmploymentRange> {
        extract_employment_ranges(text)
    }

    /// Synonym table backing `term_exists`.
    fn synonyms(&self) -> &SynonymResolver;
}

/// Receives one event per `term_exists` call.
pub trait MatchObserver: Send + Sync {
    fn on_lookup(&self, term: &str, via: Option<MatchVia>);
}

#[derive(Debug, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
    fn on_lookup(&self, _term: &str, _via: Option<MatchVia>) {}
}

/// Emits a `trace`-level event per lookup. Enable with `FITCHECK_TRACE_MATCHING`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
    fn on_lookup(&self, term: &str, via: Option<MatchVia>) {
        tracing::trace!(term, matched = via.is_some(), via = ?via, "term lookup");
    }
}

/// Default matcher: custom boundary set + synonym table.
#[derive(Clone)]
pub struct BoundaryMatcher {
    synonyms: SynonymResolver,
    observer: Arc<dyn MatchObserver>,
}

impl Default for BoundaryMatcher {
    fn default() -> Self {
        Self {
            synonyms: SynonymResolver::default(),
            observer: Arc::new(NoopObserver),
        }
    }
}

impl BoundaryMatcher {
    pub fn new(synonyms: SynonymResolver) -> Self {
        Self {
            synonyms,
            ..Self::default()
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn MatchObserver>) -> Self {
        self.observer = observer;
        self
    }
}

impl TextMatcher for BoundaryMatcher {
    fn term_exists(&self, term: &str, text: &str) -> bool {
        let via = self.synonyms.resolve(term, text);
        self.observer.on_lookup(term, via);
        via.is_some()
    }

    fn count_occurrences(&self, term: &str, text: &str) -> usize {
        count_term(text, term)
    }

    fn extract_dates(&self, text: &str) -> Vec<DateMention> {
        extract_dates(text)
    }

    fn synonyms(&self) -> &SynonymResolver {
        &self.synonyms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingObserver {
        events: Mutex<Vec<(String, bool)>>,
    }

    impl MatchObserver for RecordingObserver {
        fn on_lookup(&self, term: &str, via: Option<MatchVia>) {
            self.events
                .lock()
                .unwrap()
                .push((term.to_string(), via.is_some()));
        }
    }

    #[test]
    fn test_default_matcher_term_exists() {
        let m = BoundaryMatcher::default();
        assert!(m.term_exists("AWS", "Deployed on Amazon Web Services"));
        assert!(!m.term_exists("REST", "RESTful endpoints"));
    }

    #[test]
    fn test_count_ignores_synonyms() {
        let m = BoundaryMatcher::default();
        assert_eq!(m.count_occurrences("AWS", "Amazon Web Services and AWS"), 1);
    }

    #[test]
    fn test_observer_receives_lookups() {
        let observer = Arc::new(RecordingObserver::default());
        let m = BoundaryMatcher::default().with_observer(observer.clone());
        m.term_exists("Python", "Python 3");
        m.term_exists("Java", "Python 3");
        let events = observer.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![("Python".to_string(), true), ("Java".to_string(), false)]
        );
    }

    #[test]
    fn test_extract_dates_delegates() {
        let m = BoundaryMatcher::default();
        assert_eq!(m.extract_dates("Jan 2020 - 05/2021").len(), 2);
    }
}
