//! ATS Scoring Engine: pluggable, trait-based resume scorer.
//!
//! Default: `AtsScorer` (boundary-safe matcher, deterministic, no I/O).
//! `AppState` holds an `Arc<dyn ResumeScorer>`.
//!
//! Flow: parse zones → parsing gate → six tiers → weighted total →
//! keyword density → recommendations. The JD-coverage figure is informational
//! and computed regardless of the gate.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::jd::ProcessedJd;
use crate::resume::{parse_resume, Zone};
use crate::scoring::experience::{score_experience_relevance, ExperienceTier};
use crate::scoring::hard_skills::{score_hard_skills, HardSkillTier};
use crate::scoring::parsing_gate::evaluate_parsing_gate;
use crate::scoring::recommendations::build_recommendations;
use crate::scoring::round1;
use crate::scoring::structure::{score_structure, StructureTier};
use crate::scoring::supplementary::{
    keyword_density, score_supplementary, KeywordDensity, SupplementaryTier, DUAL_FORM_TOP_N,
};
use crate::scoring::title_alignment::{score_title_alignment, TitleAlignmentTier};
use crate::text::matcher::{BoundaryMatcher, TextMatcher};
use crate::text::tokens::word_count;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeights {
    pub hard_skill_match: f64,
    pub job_title_alignment: f64,
    pub experience_relevance: f64,
    pub soft_skill_match: f64,
    pub structural_compliance: f64,
    pub supplementary_factors: f64,
}

pub const TIER_WEIGHTS: TierWeights = TierWeights {
    hard_skill_match: 0.35,
    job_title_alignment: 0.15,
    experience_relevance: 0.20,
    soft_skill_match: 0.05,
    structural_compliance: 0.15,
    supplementary_factors: 0.10,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoftSkillTier {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TierScores {
    pub hard_skill_match: HardSkillTier,
    pub job_title_alignment: TitleAlignmentTier,
    pub experience_relevance: ExperienceTier,
    pub soft_skill_match: SoftSkillTier,
    pub structural_compliance: StructureTier,
    pub supplementary_factors: SupplementaryTier,
}

impl TierScores {
    pub fn weighted_total(&self, w: &TierWeights) -> f64 {
        self.hard_skill_match.score * w.hard_skill_match
            + self.job_title_alignment.score * w.job_title_alignment
            + self.experience_relevance.score * w.experience_relevance
            + self.soft_skill_match.score * w.soft_skill_match
            + self.structural_compliance.score * w.structural_compliance
            + self.supplementary_factors.score * w.supplementary_factors
    }

    /// The six tier scores in weight order.
    pub fn scores(&self) -> [f64; 6] {
        [
            self.hard_skill_match.score,
            self.job_title_alignment.score,
            self.experience_relevance.score,
            self.soft_skill_match.score,
            self.structural_compliance.score,
            self.supplementary_factors.score,
        ]
    }
}

/// Coverage of every JD hard skill by the tailored text, regardless of background.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JdCoverageDetail {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub name: String,
    pub zone: Zone,
    pub words: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringDebug {
    pub scorer_backend: String,
    pub weights: TierWeights,
    pub word_count: usize,
    pub original_supplied: bool,
    pub sections: Vec<SectionSummary>,
    pub overlap: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScoreResult {
    /// 0–100 optimization score against the candidate's own original resume.
    pub total_score: f64,
    pub jd_coverage_score: f64,
    pub jd_coverage_detail: JdCoverageDetail,
    pub passed_parsing_gate: bool,
    pub parsing_fail_reasons: Vec<String>,
    pub tier_scores: TierScores,
    pub keyword_density: Vec<KeywordDensity>,
    pub recommendations: Vec<String>,
    pub scoring_debug: ScoringDebug,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, tailored: &str, jd: &ProcessedJd, original: Option<&str>) -> AtsScoreResult;

    /// Name reported in `scoring_debug`, for transparency.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// AtsScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AtsScorer {
    matcher: Arc<dyn TextMatcher>,
    weights: TierWeights,
}

impl Default for AtsScorer {
    fn default() -> Self {
        Self::new(Arc::new(BoundaryMatcher::default()))
    }
}

impl AtsScorer {
    pub fn new(matcher: Arc<dyn TextMatcher>) -> Self {
        Self {
            matcher,
            weights: TIER_WEIGHTS,
        }
    }

    pub fn matcher(&self) -> &dyn TextMatcher {
        self.matcher.as_ref()
    }
}

impl ResumeScorer for AtsScorer {
    fn score(&self, tailored: &str, jd: &ProcessedJd, original: Option<&str>) -> AtsScoreResult {
        let matcher = self.matcher.as_ref();
        let parsed = parse_resume(tailored);
        let original_supplied = original.is_some_and(|o| !o.trim().is_empty());
        // Without an original, the tailored text is its own baseline.
        let original = original.filter(|o| !o.trim().is_empty()).unwrap_or(tailored);

        let jd_coverage_detail = jd_coverage(&jd.extracted_skills.hard, tailored, matcher);
        let jd_coverage_score = coverage_score(&jd_coverage_detail);

        let scoring_debug = |overlap: Vec<String>| ScoringDebug {
            scorer_backend: self.backend().to_string(),
            weights: self.weights,
            word_count: word_count(tailored),
            original_supplied,
            sections: parsed
                .sections
                .iter()
                .map(|s| SectionSummary {
                    name: s.name.clone(),
                    zone: s.zone,
                    words: word_count(&s.content),
                })
                .collect(),
            overlap,
        };

        let gate = evaluate_parsing_gate(tailored, &parsed, matcher);
        if !gate.passed {
            warn!(reasons = ?gate.reasons, "resume failed parsing gate");
            return AtsScoreResult {
                total_score: 0.0,
                jd_coverage_score,
                jd_coverage_detail,
                passed_parsing_gate: false,
                recommendations: gate
                    .reasons
                    .iter()
                    .map(|r| format!("Fix before scoring: {r}."))
                    .collect(),
                parsing_fail_reasons: gate.reasons,
                tier_scores: TierScores::default(),
                keyword_density: Vec::new(),
                scoring_debug: scoring_debug(Vec::new()),
            };
        }

        let hard = score_hard_skills(&jd.extracted_skills.hard, &parsed, tailored, original, matcher);
        let overlap = hard.overlap();
        let title = score_title_alignment(&jd.job_title, &parsed, tailored);
        let experience = score_experience_relevance(&overlap, &parsed, tailored, matcher);
        let soft = score_soft_skills(&jd.extracted_skills.soft, tailored, matcher);
        let structure = score_structure(tailored, &parsed, matcher);

        let matched_terms: Vec<String> = hard.matched.iter().map(|m| m.skill.clone()).collect();
        let keyword_density = keyword_density(&matched_terms, tailored, matcher);
        let supplementary = score_supplementary(
            &hard.top_matched(DUAL_FORM_TOP_N),
            &keyword_density,
            &structure.date_formats,
            structure.contact,
            tailored,
            matcher,
        );

        let tier_scores = TierScores {
            hard_skill_match: hard,
            job_title_alignment: title,
            experience_relevance: experience,
            soft_skill_match: soft,
            structural_compliance: structure,
            supplementary_factors: supplementary,
        };
        let total_score = round1(tier_scores.weighted_total(&self.weights).clamp(0.0, 100.0));
        let recommendations = build_recommendations(&jd.job_title, tailored, &tier_scores);

        debug!(tiers = ?tier_scores.scores(), "tier breakdown");
        info!(
            total_score,
            jd_coverage_score,
            overlap = overlap.len(),
            recommendations = recommendations.len(),
            "scored resume"
        );

        AtsScoreResult {
            total_score,
            jd_coverage_score,
            jd_coverage_detail,
            passed_parsing_gate: true,
            parsing_fail_reasons: Vec::new(),
            tier_scores,
            keyword_density,
            recommendations,
            scoring_debug: scoring_debug(overlap),
        }
    }

    fn backend(&self) -> &'static str {
        "ats"
    }
}

/// Scores with the default boundary matcher.
pub fn score_resume(tailored: &str, jd: &ProcessedJd, original: Option<&str>) -> AtsScoreResult {
    AtsScorer::default().score(tailored, jd, original)
}

/// Fraction of JD soft skills present; 100 when the JD names none.
pub fn score_soft_skills(soft: &[String], text: &str, matcher: &dyn TextMatcher) -> SoftSkillTier {
    let (matched, missing): (Vec<String>, Vec<String>) = soft
        .iter()
        .cloned()
        .partition(|skill| matcher.term_exists(skill, text));
    let score = if soft.is_empty() {
        100.0
    } else {
        round1(matched.len() as f64 / soft.len() as f64 * 100.0)
    };
    SoftSkillTier {
        score,
        matched,
        missing,
    }
}

fn jd_coverage(skills: &[String], text: &str, matcher: &dyn TextMatcher) -> JdCoverageDetail {
    let (matched, missing): (Vec<String>, Vec<String>) = skills
        .iter()
        .cloned()
        .partition(|skill| matcher.term_exists(skill, text));
    JdCoverageDetail {
        total: skills.len(),
        matched,
        missing,
    }
}

fn coverage_score(detail: &JdCoverageDetail) -> f64 {
    if detail.total == 0 {
        0.0
    } else {
        round1(detail.matched.len() as f64 / detail.total as f64 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jd::process_jd;

    const JD: &str = "Backend Engineer\n\nRequirements:\n- Experience with Python and Java\n- Strong communication skills\n\nBenefits:\n- Health insurance";

    const ORIGINAL: &str = "Jane Doe\nBackend Engineer\njane@example.com | (555) 123-4567\n\n\
Skills\nPython, SQL\n\nExperience\nAcme, Jan 2020 – Present\n- Built Python services, cutting latency 30%\n\n\
Education\nState University";

    const TAILORED: &str = "Jane Doe\nBackend Engineer\njane@example.com | (555) 123-4567\n\n\
Summary\nBackend engineer focused on Python, with strong communication.\n\n\
Skills\nPython, Java, SQL\n\nExperience\nAcme, Jan 2020 – Present\n- Built Python services in Java shops, cutting latency 30%\n\n\
Education\nState University";

    #[test]
    fn test_overlap_vs_gap_end_to_end() {
        let jd = process_jd(JD, None);
        let result = score_resume(TAILORED, &jd, Some(ORIGINAL));
        let hard = &result.tier_scores.hard_skill_match;
        assert_eq!(hard.skills_gap, vec!["Java"]);
        assert!(hard.missing.is_empty());
        assert_eq!(hard.overlap_count(), 1);
        assert_eq!(result.jd_coverage_detail.matched.len(), 2, "coverage ignores background");
        assert_eq!(result.jd_coverage_score, 100.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let jd = process_jd(JD, None);
        let a = score_resume(TAILORED, &jd, Some(ORIGINAL));
        let b = score_resume(TAILORED, &jd, Some(ORIGINAL));
        assert_eq!(a, b);
        assert!(a.passed_parsing_gate);
        assert!(a.total_score > 0.0 && a.total_score <= 100.0);
        assert!(a.recommendations.len() <= 5);
    }

    #[test]
    fn test_gate_failure_zeroes_everything() {
        let jd = process_jd(JD, None);
        let result = score_resume("i write python code and enjoy it a lot", &jd, None);
        assert!(!result.passed_parsing_gate);
        assert_eq!(result.total_score, 0.0);
        assert!(result.tier_scores.scores().iter().all(|&s| s == 0.0));
        assert_eq!(result.parsing_fail_reasons.len(), 3);
    }

    #[test]
    fn test_weights_sum_to_one() {
        let w = TIER_WEIGHTS;
        let sum = w.hard_skill_match
            + w.job_title_alignment
            + w.experience_relevance
            + w.soft_skill_match
            + w.structural_compliance
            + w.supplementary_factors;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_soft_skills_tier() {
        let m = BoundaryMatcher::default();
        let soft = vec!["Communication".to_string(), "Leadership".to_string()];
        let tier = score_soft_skills(&soft, "Strong communication", &m);
        assert_eq!(tier.score, 50.0);
        assert_eq!(tier.missing, vec!["Leadership"]);
        assert_eq!(score_soft_skills(&[], "anything", &m).score, 100.0);
    }

    #[test]
    fn test_missing_original_uses_tailored_as_baseline() {
        let jd = process_jd(JD, None);
        let result = score_resume(TAILORED, &jd, None);
        assert!(result.tier_scores.hard_skill_match.skills_gap.is_empty());
        assert!(!result.scoring_debug.original_supplied);
    }

    #[test]
    fn test_custom_scorer_through_trait_object() {
        let scorer: Arc<dyn ResumeScorer> = Arc::new(AtsScorer::default());
        let jd = process_jd(JD, None);
        assert_eq!(scorer.score(TAILORED, &jd, None).scoring_debug.scorer_backend, "ats");
    }
}
