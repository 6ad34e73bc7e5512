//! Scope-inflation detector.
//!
//! Each draft bullet is paired with its most similar original bullet
//! (Jaccard word overlap ≥ 0.3). For paired bullets the leading verb tiers are
//! compared (1 = supporting, 2 = building, 3 = owning/leading) and newly added
//! scope amplifiers are reported. Draft bullets with no pair are reported as
//! unmatched: wholly new content the candidate should confirm.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::text::boundary::contains_term;
use crate::text::tokens::{is_stopword, words};
use crate::validation::ValidationResult;

pub const PAIRING_THRESHOLD: f64 = 0.3;

/// Supporting-role verbs.
const TIER_1_VERBS: &[&str] = &[
    "assisted", "supported", "helped", "contributed", "participated", "collaborated", "worked",
    "aided", "partnered", "shadowed", "joined", "observed", "learned", "tested", "documented",
];

/// Hands-on building verbs.
const TIER_2_VERBS: &[&str] = &[
    "built", "developed", "implemented", "created", "designed", "engineered", "wrote", "delivered",
    "shipped", "deployed", "automated", "optimized", "improved", "migrated", "integrated",
    "refactored", "launched", "maintained", "configured", "coded", "programmed", "analyzed",
    "reduced", "increased",
];

/// Ownership and leadership verbs.
const TIER_3_VERBS: &[&str] = &[
    "led", "owned", "spearheaded", "architected", "directed", "headed", "drove", "founded",
    "established", "pioneered", "orchestrated", "championed", "managed", "oversaw", "supervised",
    "steered",
];

/// Words and phrases that widen claimed scope.
pub const SCOPE_AMPLIFIERS: &[&str] = &[
    "single-handedly", "singlehandedly", "enterprise-wide", "company-wide", "organization-wide",
    "org-wide", "flagship", "solely", "sole owner", "industry-leading", "world-class",
    "first-ever", "mission-critical", "globally", "revolutionized", "transformed", "entire company",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeIssue {
    VerbInflation,
    ScopeAmplifier,
    Unmatched,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeFlag {
    pub issue: ScopeIssue,
    pub severity: Severity,
    pub draft_bullet: String,
    pub original_bullet: Option<String>,
    pub detail: String,
}

/// Lines that start with a bullet marker or "1." numbering, marker stripped.
pub fn extract_bullets(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim_start();
            let rest = if let Some(rest) = trimmed
                .strip_prefix(['-', '*', '•', '·', '▪', '◦', '‣'])
            {
                rest
            } else {
                let digits = trimmed.chars().take_while(char::is_ascii_digit).count();
                if digits == 0 {
                    return None;
                }
                trimmed[digits..].strip_prefix(['.', ')'])?
            };
            let rest = rest.trim();
            (!rest.is_empty()).then(|| rest.to_string())
        })
        .collect()
}

/// Tier of the bullet's leading verb, if it is a known one.
pub fn verb_tier(bullet: &str) -> Option<(u8, String)> {
    let verb = words(bullet).into_iter().next()?;
    let tier = if TIER_3_VERBS.contains(&verb.as_str()) {
        3
    } else if TIER_2_VERBS.contains(&verb.as_str()) {
        2
    } else if TIER_1_VERBS.contains(&verb.as_str()) {
        1
    } else {
        return None;
    };
    Some((tier, verb))
}

fn word_set(text: &str) -> HashSet<String> {
    words(text).into_iter().filter(|w| !is_stopword(w)).collect()
}

pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

pub fn detect_scope_inflation(original: &str, draft: &str) -> ValidationResult<ScopeFlag> {
    let originals: Vec<(String, HashSet<String>)> = extract_bullets(original)
        .into_iter()
        .map(|b| {
            let set = word_set(&b);
            (b, set)
        })
        .collect();
    let mut result = ValidationResult::default();

    for bullet in extract_bullets(draft) {
        let set = word_set(&bullet);
        let best = originals
            .iter()
            .map(|(orig, orig_set)| (orig, jaccard(&set, orig_set)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .filter(|(_, similarity)| *similarity >= PAIRING_THRESHOLD);

        let Some((paired, _)) = best else {
            result.warnings.push(format!("New bullet with no source in the original: \"{bullet}\""));
            result.flagged_items.push(ScopeFlag {
                issue: ScopeIssue::Unmatched,
                severity: Severity::Low,
                draft_bullet: bullet,
                original_bullet: None,
                detail: "No similar bullet in the original".to_string(),
            });
            continue;
        };

        if let (Some((from, from_verb)), Some((to, to_verb))) = (verb_tier(paired), verb_tier(&bullet)) {
            let severity = match (from, to) {
                (1, 3) => Some(Severity::High),
                (1, 2) => Some(Severity::Medium),
                _ => None,
            };
            if let Some(severity) = severity {
                let detail = format!("\"{from_verb}\" (tier {from}) became \"{to_verb}\" (tier {to})");
                result.warnings.push(format!("Scope inflation: {detail}"));
                result.flagged_items.push(ScopeFlag {
                    issue: ScopeIssue::VerbInflation,
                    severity,
                    draft_bullet: bullet.clone(),
                    original_bullet: Some(paired.clone()),
                    detail,
                });
            }
        }

        for amplifier in SCOPE_AMPLIFIERS {
            if contains_term(&bullet, amplifier) && !contains_term(paired, amplifier) {
                let detail = format!("adds \"{amplifier}\"");
                result.warnings.push(format!("Scope amplifier {detail}: \"{bullet}\""));
                result.flagged_items.push(ScopeFlag {
                    issue: ScopeIssue::ScopeAmplifier,
                    severity: Severity::Medium,
                    draft_bullet: bullet.clone(),
                    original_bullet: Some(paired.clone()),
                    detail,
                });
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supporting_to_leading_is_high() {
        let result = detect_scope_inflation(
            "- Assisted with the payments API migration to Rust",
            "- Led the payments API migration to Rust",
        );
        assert_eq!(result.flagged_items.len(), 1);
        let flag = &result.flagged_items[0];
        assert_eq!(flag.issue, ScopeIssue::VerbInflation);
        assert_eq!(flag.severity, Severity::High);
    }

    #[test]
    fn test_supporting_to_building_is_medium() {
        let result = detect_scope_inflation(
            "- Helped with the payments API migration",
            "- Built the payments API migration",
        );
        assert_eq!(result.flagged_items[0].severity, Severity::Medium);
    }

    #[test]
    fn test_same_tier_is_clean() {
        let result = detect_scope_inflation(
            "- Built the billing service in Go",
            "- Developed the billing service in Go",
        );
        assert!(result.passed(), "{:?}", result.flagged_items);
    }

    #[test]
    fn test_amplifier_added() {
        let result = detect_scope_inflation(
            "- Built the billing service in Go",
            "- Single-handedly built the flagship billing service in Go",
        );
        let amplifiers: Vec<&str> = result
            .flagged_items
            .iter()
            .filter(|f| f.issue == ScopeIssue::ScopeAmplifier)
            .map(|f| f.detail.as_str())
            .collect();
        assert_eq!(amplifiers, vec!["adds \"single-handedly\"", "adds \"flagship\""]);
    }

    #[test]
    fn test_unmatched_bullet() {
        let result = detect_scope_inflation(
            "- Built the billing service in Go",
            "- Built the billing service in Go\n- Presented at KubeCon on service meshes",
        );
        assert_eq!(result.flagged_items.len(), 1);
        assert_eq!(result.flagged_items[0].issue, ScopeIssue::Unmatched);
    }

    #[test]
    fn test_bullet_markers() {
        let bullets = extract_bullets("• one\n* two\n3. three\n4) four\nplain line\n-\n2020 - Present");
        assert_eq!(bullets, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn test_jaccard() {
        let a = word_set("built billing service");
        let b = word_set("built payments service");
        assert_eq!(jaccard(&a, &b), 0.5);
    }
}
