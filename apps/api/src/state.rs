use std::sync::Arc;

use crate::config::Config;
use crate::rules::RuleCache;
use crate::scoring::{AtsScorer, ResumeScorer};
use crate::text::matcher::{BoundaryMatcher, TextMatcher, TracingObserver};
use crate::text::synonyms::SynonymResolver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Matcher shared by the resume scorer and the cover-letter scorer.
    pub matcher: Arc<dyn TextMatcher>,
    /// Pluggable resume scorer. Default: AtsScorer over `matcher`.
    pub resume_scorer: Arc<dyn ResumeScorer>,
    pub rules: Arc<RuleCache>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let mut matcher = BoundaryMatcher::new(SynonymResolver::default());
        if config.trace_matching {
            matcher = matcher.with_observer(Arc::new(TracingObserver));
        }
        let matcher: Arc<dyn TextMatcher> = Arc::new(matcher);
        let resume_scorer = Arc::new(AtsScorer::new(Arc::clone(&matcher)));
        let rules = Arc::new(RuleCache::new(config.rules_dir.clone(), config.rules_ttl));

        AppState {
            config,
            matcher,
            resume_scorer,
            rules,
        }
    }
}
