//! Checks whether a user's revision feedback was actually applied to a draft.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text::boundary::contains_term;
use crate::text::tokens::{is_stopword, words};

/// Verbs and nouns that describe the edit rather than its subject.
const INSTRUCTION_WORDS: &[&str] = &[
    "make", "add", "remove", "delete", "drop", "change", "please", "less", "update", "use",
    "include", "mention", "emphasize", "emphasise", "highlight", "rewrite", "shorten", "expand",
    "section", "resume", "bullet", "bullets", "instead", "should", "want", "need", "like",
    "replace", "put", "move", "keep", "try", "more", "cover", "letter", "shorter", "longer",
    "concise", "cut", "omit",
];

const REMOVAL_WORDS: &[&str] = &["remove", "delete", "drop", "cut", "omit"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackVerification {
    pub feedback: String,
    pub applied: bool,
    pub matched_terms: Vec<String>,
    pub draft_changed: bool,
}

/// Significant terms: at least three characters, not a stopword, not edit vocabulary.
pub fn significant_terms(feedback: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    words(feedback)
        .into_iter()
        .filter(|w| w.chars().count() >= 3 && !is_stopword(w) && !INSTRUCTION_WORDS.contains(&w.as_str()))
        .filter(|w| seen.insert(w.clone()))
        .collect()
}

pub fn verify_feedback(feedback: &str, previous: &str, draft: &str) -> FeedbackVerification {
    let terms = significant_terms(feedback);
    let draft_changed = previous.trim() != draft.trim();
    let removal = words(feedback).iter().any(|w| REMOVAL_WORDS.contains(&w.as_str()));

    let (applied, matched_terms) = if removal {
        // Applied once the terms that were present before are gone.
        let removed: Vec<String> = terms
            .iter()
            .filter(|t| contains_term(previous, t) && !contains_term(draft, t))
            .cloned()
            .collect();
        let applied = draft_changed && (terms.is_empty() || !removed.is_empty());
        (applied, removed)
    } else {
        let matched: Vec<String> = terms
            .iter()
            .filter(|t| contains_term(draft, t))
            .cloned()
            .collect();
        let newly_present = matched.iter().any(|t| !contains_term(previous, t));
        let majority = matched.len() * 2 > terms.len();
        let applied = (terms.is_empty() && draft_changed)
            || newly_present
            || (majority && draft_changed);
        (applied, matched)
    };

    FeedbackVerification {
        feedback: feedback.to_string(),
        applied,
        matched_terms,
        draft_changed,
    }
}

/// Verifies each feedback item independently against the same pair of drafts.
pub fn verify_feedback_history<S: AsRef<str>>(
    items: &[S],
    previous: &str,
    draft: &str,
) -> Vec<FeedbackVerification> {
    items
        .iter()
        .map(|item| verify_feedback(item.as_ref(), previous, draft))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREVIOUS: &str = "Built billing services in Go.\nWorked with PostgreSQL.";

    #[test]
    fn test_new_terms_applied() {
        let draft = "Built billing services in Go and Kubernetes.\nWorked with PostgreSQL.";
        let result = verify_feedback("Please mention Kubernetes more", PREVIOUS, draft);
        assert!(result.applied);
        assert_eq!(result.matched_terms, vec!["kubernetes"]);
    }

    #[test]
    fn test_unchanged_draft_not_applied() {
        let result = verify_feedback("Highlight Kubernetes", PREVIOUS, PREVIOUS);
        assert!(!result.applied);
        assert!(!result.draft_changed);
    }

    #[test]
    fn test_structural_feedback_applied_when_draft_changes() {
        let draft = "Built billing services in Go.";
        let result = verify_feedback("Make it shorter", PREVIOUS, draft);
        assert!(result.matched_terms.is_empty());
        assert!(result.applied);
    }

    #[test]
    fn test_majority_of_existing_terms_with_change() {
        let draft = "Built billing services in Go, cutting costs.\nWorked with PostgreSQL.";
        let result = verify_feedback("Emphasize billing and PostgreSQL", PREVIOUS, draft);
        assert!(result.applied);
        assert_eq!(result.matched_terms, vec!["billing", "postgresql"]);
    }

    #[test]
    fn test_removal_feedback() {
        let draft = "Built billing services in Go.";
        assert!(verify_feedback("Remove PostgreSQL", PREVIOUS, draft).applied);
        assert!(!verify_feedback("Remove the billing mention", PREVIOUS, draft).applied);
    }

    #[test]
    fn test_history_is_verified_per_item() {
        let draft = "Built billing services in Go and Kubernetes.\nWorked with PostgreSQL.";
        let results = verify_feedback_history(&["Add Kubernetes", "Add Terraform"], PREVIOUS, draft);
        assert_eq!(results.len(), 2);
        assert!(results[0].applied);
        assert!(!results[1].applied);
    }
}
