//! Supplementary Factors tier and keyword-density reporting.
//!
//! Four checks of 25 points: acronym + expansion dual inclusion for the top
//! matched skills, keyword-stuffing guard, consistent date format, and
//! contact-channel completeness.

use serde::{Deserialize, Serialize};

use crate::scoring::hard_skills::SkillPlacement;
use crate::text::contact::ContactChannels;
use crate::text::dates::DateFormat;
use crate::text::matcher::TextMatcher;
use crate::text::tokens::word_count;

const CHECK_POINTS: f64 = 25.0;

/// Density (percent of total words) above which a term counts as stuffed.
pub const STUFFING_THRESHOLD: f64 = 3.0;

/// Matched skills checked for acronym/expansion dual inclusion.
pub const DUAL_FORM_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensity {
    pub term: String,
    pub count: usize,
    /// Percent, two decimals.
    pub density: f64,
    pub over_stuffed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryChecks {
    pub dual_form: f64,
    pub stuffing_guard: f64,
    pub date_format: f64,
    pub contact_channels: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplementaryTier {
    pub score: f64,
    pub checks: SupplementaryChecks,
    /// Top skills written in only one of their abbreviation / expansion forms.
    pub missing_dual_forms: Vec<String>,
    pub over_stuffed: Vec<String>,
}

/// Boundary-safe count ÷ total words × 100 for each term.
pub fn keyword_density(
    terms: &[String],
    text: &str,
    matcher: &dyn TextMatcher,
) -> Vec<KeywordDensity> {
    let words = word_count(text);
    terms
        .iter()
        .map(|term| {
            let count = matcher.count_occurrences(term, text);
            let density = if words == 0 {
                0.0
            } else {
                (count as f64 / words as f64 * 100.0 * 100.0).round() / 100.0
            };
            KeywordDensity {
                term: term.clone(),
                count,
                density,
                over_stuffed: density > STUFFING_THRESHOLD,
            }
        })
        .collect()
}

/// Top skills that have a known abbreviation/expansion but appear in only one form.
pub fn missing_dual_forms(
    top: &[&SkillPlacement],
    text: &str,
    matcher: &dyn TextMatcher,
) -> (usize, Vec<String>) {
    let synonyms = matcher.synonyms();
    let mut eligible = 0;
    let mut missing = Vec::new();

    for placement in top {
        let skill = placement.skill.as_str();
        let (abbreviation, expansions): (Option<&str>, Vec<&str>) =
            if let Some(expansions) = synonyms.expansions_of(skill) {
                (Some(skill), expansions.to_vec())
            } else if let Some(abbr) = synonyms.abbreviation_of(skill) {
                (Some(abbr), synonyms.expansions_of(abbr).map(<[_]>::to_vec).unwrap_or_default())
            } else {
                (None, Vec::new())
            };
        let Some(abbreviation) = abbreviation else {
            continue;
        };
        eligible += 1;

        let has_abbr = matcher.count_occurrences(abbreviation, text) > 0;
        let has_expansion = expansions
            .iter()
            .any(|e| matcher.count_occurrences(e, text) > 0);
        if !(has_abbr && has_expansion) {
            missing.push(placement.skill.clone());
        }
    }
    (eligible, missing)
}

pub fn score_supplementary(
    top: &[&SkillPlacement],
    densities: &[KeywordDensity],
    formats: &[DateFormat],
    contact: ContactChannels,
    text: &str,
    matcher: &dyn TextMatcher,
) -> SupplementaryTier {
    let (eligible, missing_dual_forms) = missing_dual_forms(top, text, matcher);
    let dual_form = if eligible == 0 {
        CHECK_POINTS
    } else {
        CHECK_POINTS * (eligible - missing_dual_forms.len()) as f64 / eligible as f64
    };

    let over_stuffed: Vec<String> = densities
        .iter()
        .filter(|d| d.over_stuffed)
        .map(|d| d.term.clone())
        .collect();

    let checks = SupplementaryChecks {
        dual_form,
        stuffing_guard: if over_stuffed.is_empty() { CHECK_POINTS } else { 0.0 },
        date_format: match formats.len() {
            0 | 1 => CHECK_POINTS,
            2 => CHECK_POINTS / 2.0,
            _ => 0.0,
        },
        contact_channels: CHECK_POINTS * contact.count() as f64 / 3.0,
    };
    let score = checks.dual_form + checks.stuffing_guard + checks.date_format + checks.contact_channels;

    SupplementaryTier {
        score: crate::scoring::round1(score),
        checks,
        missing_dual_forms,
        over_stuffed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::Zone;
    use crate::text::matcher::BoundaryMatcher;

    fn placement(skill: &str) -> SkillPlacement {
        SkillPlacement {
            skill: skill.to_string(),
            best_zone: Zone::Skills,
            occurrences: 1,
            points: 1.5,
        }
    }

    #[test]
    fn test_keyword_density_rounding_and_flag() {
        let text = "Rust Rust Rust Rust and Go"; // 6 words
        let d = keyword_density(&["Rust".to_string()], text, &BoundaryMatcher::default());
        assert_eq!(d[0].count, 4);
        assert_eq!(d[0].density, 66.67);
        assert!(d[0].over_stuffed);
    }

    #[test]
    fn test_density_of_empty_text() {
        let d = keyword_density(&["Rust".to_string()], "", &BoundaryMatcher::default());
        assert_eq!(d[0].density, 0.0);
        assert!(!d[0].over_stuffed);
    }

    #[test]
    fn test_dual_form_detection() {
        let m = BoundaryMatcher::default();
        let aws = placement("AWS");
        let k8s = placement("Kubernetes");
        let rust = placement("Rust");
        let top = vec![&aws, &k8s, &rust];
        let (eligible, missing) =
            missing_dual_forms(&top, "Amazon Web Services (AWS) and Kubernetes", &m);
        assert_eq!(eligible, 2);
        assert_eq!(missing, vec!["Kubernetes"]);
    }

    #[test]
    fn test_full_supplementary_score() {
        let m = BoundaryMatcher::default();
        let aws = placement("AWS");
        let text = "jane@example.com (555) 123-4567 linkedin.com/in/jane AWS (Amazon Web Services)";
        let tier = score_supplementary(
            &[&aws],
            &[],
            &[DateFormat::MonthAbbrev],
            ContactChannels::detect(text),
            text,
            &m,
        );
        assert_eq!(tier.score, 100.0);
    }

    #[test]
    fn test_partial_supplementary_score() {
        let m = BoundaryMatcher::default();
        let densities = vec![KeywordDensity {
            term: "Rust".to_string(),
            count: 9,
            density: 4.5,
            over_stuffed: true,
        }];
        let tier = score_supplementary(
            &[],
            &densities,
            &[DateFormat::MonthAbbrev, DateFormat::Numeric],
            ContactChannels {
                email: true,
                phone: false,
                linkedin: false,
            },
            "",
            &m,
        );
        assert_eq!(tier.checks.stuffing_guard, 0.0);
        assert_eq!(tier.checks.date_format, 12.5);
        assert_eq!(tier.over_stuffed, vec!["Rust"]);
        assert_eq!(tier.score, crate::scoring::round1(25.0 + 12.5 + 25.0 / 3.0));
    }
}
