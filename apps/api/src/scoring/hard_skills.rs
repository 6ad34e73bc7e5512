//! Hard-Skill Match tier.
//!
//! Only the overlap (JD skills the candidate's original resume already has)
//! is scored. For each overlapping skill found in the tailored text:
//!
//!   points = best zone multiplier × frequency factor
//!   frequency factor = 1.0 (≥1) + 0.5 (≥2) + 0.25 (≥3), capped at 1.75
//!
//! and the tier is Σ points / (overlap × realistic best case) × 100, where the
//! realistic best case is a skills-section placement mentioned twice.

use serde::{Deserialize, Serialize};

use crate::resume::{ParsedResume, Zone};
use crate::scoring::round1;
use crate::text::matcher::TextMatcher;

/// Skills-section placement (1.5) × two mentions (1.5).
pub const REALISTIC_BEST_CASE: f64 = 1.5 * 1.5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillPlacement {
    pub skill: String,
    pub best_zone: Zone,
    /// Exact boundary-safe occurrences; a synonym-only hit counts as one.
    pub occurrences: usize,
    pub points: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HardSkillTier {
    pub score: f64,
    /// Overlapping skills present in the tailored text, JD order.
    pub matched: Vec<SkillPlacement>,
    /// In the original resume but dropped from the tailored text (penalized).
    pub missing: Vec<String>,
    /// Never in the original resume (informational).
    pub skills_gap: Vec<String>,
}

impl HardSkillTier {
    /// Skills present in the original resume.
    pub fn overlap(&self) -> Vec<String> {
        let mut overlap: Vec<String> = self.matched.iter().map(|m| m.skill.clone()).collect();
        overlap.extend(self.missing.iter().cloned());
        overlap
    }

    pub fn overlap_count(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Matched skills ordered by points, highest first (stable on JD order).
    pub fn top_matched(&self, n: usize) -> Vec<&SkillPlacement> {
        let mut ranked: Vec<&SkillPlacement> = self.matched.iter().collect();
        ranked.sort_by(|a, b| b.points.total_cmp(&a.points));
        ranked.truncate(n);
        ranked
    }
}

pub fn frequency_factor(occurrences: usize) -> f64 {
    let mut factor = 0.0;
    if occurrences >= 1 {
        factor += 1.0;
    }
    if occurrences >= 2 {
        factor += 0.5;
    }
    if occurrences >= 3 {
        factor += 0.25;
    }
    factor
}

pub fn score_hard_skills(
    jd_skills: &[String],
    parsed: &ParsedResume,
    tailored: &str,
    original: &str,
    matcher: &dyn TextMatcher,
) -> HardSkillTier {
    let mut tier = HardSkillTier::default();

    for skill in jd_skills {
        if !matcher.term_exists(skill, original) {
            tier.skills_gap.push(skill.clone());
            continue;
        }

        let best_zone = parsed
            .sections
            .iter()
            .filter(|s| matcher.term_exists(skill, &s.content))
            .map(|s| s.zone)
            .max_by(|a, b| a.multiplier().total_cmp(&b.multiplier()));

        let Some(best_zone) = best_zone else {
            tier.missing.push(skill.clone());
            continue;
        };

        let occurrences = matcher.count_occurrences(skill, tailored).max(1);
        let points = best_zone.multiplier() * frequency_factor(occurrences);
        tier.matched.push(SkillPlacement {
            skill: skill.clone(),
            best_zone,
            occurrences,
            points,
        });
    }

    let overlap = tier.overlap_count();
    tier.score = if overlap == 0 {
        0.0
    } else {
        let earned: f64 = tier.matched.iter().map(|m| m.points).sum();
        round1((earned / (overlap as f64 * REALISTIC_BEST_CASE) * 100.0).min(100.0))
    };
    tier
}
