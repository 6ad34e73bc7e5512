//! Experience Relevance tier: are overlapping skills backed by experience
//! content, or only listed?

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resume::{ParsedResume, Zone};
use crate::scoring::round1;
use crate::text::matcher::TextMatcher;

const CONTEXTUAL_WEIGHT: f64 = 1.5;
const BARE_LIST_WEIGHT: f64 = 1.0;
const QUANTIFIED_BONUS: f64 = 5.0;

static QUANTIFIED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d+(?:\.\d+)?\s?%|[$€£]\s?\d[\d,]*(?:\.\d+)?\s?(?:k|m|b|mm|thousand|million|billion)?\b|\b(?:team|group|org(?:anization)?) of \d+|\b\d+\+?\s+(?:engineers|developers|people|members|reports|direct reports|users|customers|clients|stakeholders|countries|markets)\b|\b\d+(?:\.\d+)?x\b",
    )
    .expect("quantified achievement regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceTier {
    pub score: f64,
    /// Found in experience-zone content.
    pub contextual: Vec<String>,
    /// Found only in the skills zone.
    pub bare_list: Vec<String>,
    pub has_quantified_achievement: bool,
}

/// Percentages, currency amounts, team sizes and multipliers.
pub fn has_quantified_achievement(text: &str) -> bool {
    QUANTIFIED_RE.is_match(text)
}

pub fn score_experience_relevance(
    overlap: &[String],
    parsed: &ParsedResume,
    tailored: &str,
    matcher: &dyn TextMatcher,
) -> ExperienceTier {
    let experience = parsed.zone_text(Zone::Experience);
    let skills = parsed.zone_text(Zone::Skills);

    let mut tier = ExperienceTier {
        has_quantified_achievement: has_quantified_achievement(tailored),
        ..ExperienceTier::default()
    };

    for skill in overlap {
        if matcher.term_exists(skill, &experience) {
            tier.contextual.push(skill.clone());
        } else if matcher.term_exists(skill, &skills) {
            tier.bare_list.push(skill.clone());
        }
    }

    let base = if overlap.is_empty() {
        100.0
    } else {
        let earned = tier.contextual.len() as f64 * CONTEXTUAL_WEIGHT
            + tier.bare_list.len() as f64 * BARE_LIST_WEIGHT;
        earned / (overlap.len() as f64 * CONTEXTUAL_WEIGHT) * 100.0
    };
    let bonus = if tier.has_quantified_achievement {
        QUANTIFIED_BONUS
    } else {
        0.0
    };
    tier.score = round1((base + bonus).min(100.0));
    tier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::parse_resume;
    use crate::text::matcher::BoundaryMatcher;

    fn score(overlap: &[&str], resume: &str) -> ExperienceTier {
        let overlap: Vec<String> = overlap.iter().map(|s| s.to_string()).collect();
        score_experience_relevance(&overlap, &parse_resume(resume), resume, &BoundaryMatcher::default())
    }

    #[test]
    fn test_contextual_beats_bare_list() {
        let resume = "Jane\n\nSkills\nPython, Rust\n\nExperience\nRewrote billing in Rust";
        let tier = score(&["Python", "Rust"], resume);
        assert_eq!(tier.contextual, vec!["Rust"]);
        assert_eq!(tier.bare_list, vec!["Python"]);
        // (1.5 + 1.0) / 3.0
        assert_eq!(tier.score, 83.3);
    }

    #[test]
    fn test_quantified_bonus_is_capped() {
        let resume = "Jane\n\nExperience\nCut latency 40% with Rust";
        let tier = score(&["Rust"], resume);
        assert!(tier.has_quantified_achievement);
        assert_eq!(tier.score, 100.0);
    }

    #[test]
    fn test_bonus_applies_below_cap() {
        let resume = "Jane\n\nSkills\nGo\n\nExperience\nManaged a team of 6";
        let tier = score(&["Go"], resume);
        assert_eq!(tier.score, round1(100.0 / 1.5 + 5.0));
    }

    #[test]
    fn test_no_overlap_is_vacuous_100() {
        assert_eq!(score(&[], "Jane\n\nSkills\nPython").score, 100.0);
    }

    #[test]
    fn test_quantified_patterns() {
        assert!(has_quantified_achievement("grew ARR to $1.2M"));
        assert!(has_quantified_achievement("mentored 4 engineers"));
        assert!(has_quantified_achievement("3x throughput"));
        assert!(!has_quantified_achievement("improved reliability significantly"));
        assert!(!has_quantified_achievement("since 2019"));
    }
}
