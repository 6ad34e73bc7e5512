//! Synonym Resolver: abbreviation ↔ full-term equivalence for skill matching.
//!
//! `term_exists` is called for every (skill, zone) pair during a scoring pass, so
//! lookups walk a static table with `eq_ignore_ascii_case` instead of building
//! lowercase keys.

use once_cell::sync::Lazy;

use crate::text::boundary::contains_term;

/// Abbreviation → one or more expansions. Keys and values are lowercase.
pub type SynonymTable = &'static [(&'static str, &'static [&'static str])];

pub const DEFAULT_SYNONYMS: SynonymTable = &[
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud platform", "google cloud"]),
    ("k8s", &["kubernetes"]),
    ("js", &["javascript"]),
    ("ts", &["typescript"]),
    ("ml", &["machine learning"]),
    ("ai", &["artificial intelligence"]),
    ("nlp", &["natural language processing"]),
    ("llm", &["large language model", "large language models"]),
    ("dl", &["deep learning"]),
    ("ci/cd", &["continuous integration", "continuous delivery", "continuous deployment"]),
    ("db", &["database"]),
    ("rdbms", &["relational database"]),
    ("postgres", &["postgresql"]),
    ("mongo", &["mongodb"]),
    ("api", &["application programming interface"]),
    ("ui", &["user interface"]),
    ("ux", &["user experience"]),
    ("oop", &["object-oriented programming", "object oriented programming"]),
    ("tdd", &["test-driven development", "test driven development"]),
    ("qa", &["quality assurance"]),
    ("sre", &["site reliability engineering"]),
    ("iac", &["infrastructure as code"]),
    ("etl", &["extract, transform, load", "extract transform load"]),
    ("bi", &["business intelligence"]),
    ("saas", &["software as a service"]),
    ("seo", &["search engine optimization"]),
    ("sem", &["search engine marketing"]),
    ("crm", &["customer relationship management"]),
    ("erp", &["enterprise resource planning"]),
    ("kpi", &["key performance indicator", "key performance indicators"]),
    ("roi", &["return on investment"]),
    ("fp&a", &["financial planning and analysis", "financial planning & analysis"]),
    ("gaap", &["generally accepted accounting principles"]),
    ("hr", &["human resources"]),
    ("b2b", &["business to business", "business-to-business"]),
    ("pmp", &["project management professional"]),
    ("azure", &["microsoft azure"]),
    ("spark", &["apache spark"]),
    ("kafka", &["apache kafka"]),
];

/// Resolves terms against a synonym table with boundary-safe matching.
#[derive(Debug, Clone, Copy)]
pub struct SynonymResolver {
    table: SynonymTable,
}

impl Default for SynonymResolver {
    fn default() -> Self {
        Self {
            table: DEFAULT_SYNONYMS,
        }
    }
}

static DEFAULT_RESOLVER: Lazy<SynonymResolver> = Lazy::new(SynonymResolver::default);

/// Boundary-safe, synonym-aware term lookup using the default table.
pub fn term_exists(term: &str, text: &str) -> bool {
    DEFAULT_RESOLVER.term_exists(term, text)
}

/// Which rule produced a positive `term_exists` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVia {
    Direct,
    Expansion,
    Abbreviation,
}

impl SynonymResolver {
    pub fn new(table: SynonymTable) -> Self {
        Self { table }
    }

    /// Checks, in order: the term itself, the expansions of an abbreviation,
    /// then the abbreviation of a known expansion.
    pub fn term_exists(&self, term: &str, text: &str) -> bool {
        self.resolve(term, text).is_some()
    }

    /// Same as `term_exists`, reporting which rule matched.
    pub fn resolve(&self, term: &str, text: &str) -> Option<MatchVia> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        if contains_term(text, term) {
            return Some(MatchVia::Direct);
        }
        if let Some(expansions) = self.expansions_of(term) {
            if expansions.iter().any(|e| contains_term(text, e)) {
                return Some(MatchVia::Expansion);
            }
        }
        if let Some(abbr) = self.abbreviation_of(term) {
            if contains_term(text, abbr) {
                return Some(MatchVia::Abbreviation);
            }
        }
        None
    }

    /// Expansions when `term` is a known abbreviation.
    pub fn expansions_of(&self, term: &str) -> Option<&'static [&'static str]> {
        let term = term.trim();
        self.table
            .iter()
            .find(|(abbr, _)| abbr.eq_ignore_ascii_case(term))
            .map(|(_, expansions)| *expansions)
    }

    /// Abbreviation when `term` equals one of the known expansions.
    pub fn abbreviation_of(&self, term: &str) -> Option<&'static str> {
        let term = term.trim();
        self.table
            .iter()
            .find(|(_, expansions)| expansions.iter().any(|e| e.eq_ignore_ascii_case(term)))
            .map(|(abbr, _)| *abbr)
    }

    /// True if `term` participates in any equivalence class.
    pub fn has_equivalent(&self, term: &str) -> bool {
        self.expansions_of(term).is_some() || self.abbreviation_of(term).is_some()
    }

    /// Collapses a term to its equivalence-class key (the lowercase abbreviation
    /// when one exists), used for deduplicating extracted skills.
    pub fn canonical_key(&self, term: &str) -> String {
        let term = term.trim();
        if let Some(abbr) = self.abbreviation_of(term) {
            return abbr.to_string();
        }
        term.to_lowercase()
    }
}
