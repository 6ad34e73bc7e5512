//! JD processing pipeline: normalize → segment → extract skills and metadata.
//!
//! A `ProcessedJd` is built once per job description and handed to both
//! scorers. It also travels over the HTTP boundary, so `validate` checks the
//! structural invariants of one that a caller sends back.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::jd::metadata::{extract_metadata, JdMetadata};
use crate::jd::segmenter::{join_relevant, segment_jd, JdSections};
use crate::jd::skills::{extract_skills, ExtractedSkills};
use crate::text::normalizer::normalize_jd_text;
use crate::text::tokens::word_count;

/// Longest first line still treated as a job title when none is supplied.
const MAX_FALLBACK_TITLE_WORDS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdDebug {
    pub total_words: usize,
    pub relevant_words: usize,
    pub noise_words: usize,
    /// Share of words outside relevant segments, 0–100, one decimal.
    pub noise_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedJd {
    pub cleaned_text: String,
    pub sections: JdSections,
    pub extracted_skills: ExtractedSkills,
    pub metadata: JdMetadata,
    pub job_title: String,
    pub debug: JdDebug,
}

#[derive(Debug, Error, PartialEq)]
pub enum JdValidationError {
    #[error("noise percentage {0} is outside 0-100")]
    NoisePercentage(f64),

    #[error("empty {0} skill entry")]
    EmptySkill(&'static str),

    #[error("duplicate {kind} skill '{skill}'")]
    DuplicateSkill { kind: &'static str, skill: String },

    #[error("full relevant text does not match the relevant segments")]
    RelevantTextMismatch,

    #[error("segment flagged relevant={relevant} but field {field} says otherwise")]
    SegmentRelevance { field: String, relevant: bool },

    #[error("word counts are inconsistent: {relevant} relevant of {total} total")]
    WordCounts { relevant: usize, total: usize },
}

pub fn process_jd(raw: &str, title: Option<&str>) -> ProcessedJd {
    let cleaned_text = normalize_jd_text(raw);
    let sections = segment_jd(&cleaned_text);

    // An all-noise posting still yields skills from the whole text.
    let analysis_text = if sections.full_relevant_text.trim().is_empty() {
        cleaned_text.as_str()
    } else {
        sections.full_relevant_text.as_str()
    };
    let extracted_skills = extract_skills(analysis_text);
    let metadata = extract_metadata(analysis_text);

    let job_title = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback_title(&cleaned_text));

    let total_words = word_count(&cleaned_text);
    let relevant_words = word_count(&sections.full_relevant_text).min(total_words);
    let noise_words = total_words - relevant_words;
    let noise_percentage = if total_words == 0 {
        0.0
    } else {
        (noise_words as f64 / total_words as f64 * 1000.0).round() / 10.0
    };

    info!(
        hard_skills = extracted_skills.hard.len(),
        soft_skills = extracted_skills.soft.len(),
        segments = sections.segments.len(),
        fallback = sections.used_fallback,
        noise_percentage,
        "processed job description"
    );

    ProcessedJd {
        cleaned_text,
        sections,
        extracted_skills,
        metadata,
        job_title,
        debug: JdDebug {
            total_words,
            relevant_words,
            noise_words,
            noise_percentage,
        },
    }
}

/// First non-empty line when it reads like a title rather than a sentence.
fn fallback_title(cleaned: &str) -> String {
    cleaned
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .filter(|l| word_count(l) <= MAX_FALLBACK_TITLE_WORDS && !l.ends_with('.'))
        .map(|l| l.trim_matches(|c: char| matches!(c, '#' | '*' | '_') || c.is_whitespace()).to_string())
        .unwrap_or_default()
}

impl ProcessedJd {
    /// Structural checks for a `ProcessedJd` received from a caller.
    pub fn validate(&self) -> Result<(), JdValidationError> {
        let pct = self.debug.noise_percentage;
        if !(0.0..=100.0).contains(&pct) || pct.is_nan() {
            return Err(JdValidationError::NoisePercentage(pct));
        }
        if self.debug.relevant_words > self.debug.total_words
            || self.debug.relevant_words + self.debug.noise_words != self.debug.total_words
        {
            return Err(JdValidationError::WordCounts {
                relevant: self.debug.relevant_words,
                total: self.debug.total_words,
            });
        }

        check_skills("hard", &self.extracted_skills.hard)?;
        check_skills("soft", &self.extracted_skills.soft)?;

        for segment in &self.sections.segments {
            if segment.relevant != segment.field.is_relevant() {
                return Err(JdValidationError::SegmentRelevance {
                    field: format!("{:?}", segment.field),
                    relevant: segment.relevant,
                });
            }
        }
        if join_relevant(&self.sections.segments) != self.sections.full_relevant_text {
            return Err(JdValidationError::RelevantTextMismatch);
        }
        Ok(())
    }
}

fn check_skills(kind: &'static str, skills: &[String]) -> Result<(), JdValidationError> {
    let mut seen: Vec<String> = Vec::with_capacity(skills.len());
    for skill in skills {
        if skill.trim().is_empty() {
            return Err(JdValidationError::EmptySkill(kind));
        }
        let key = skill.to_lowercase();
        if seen.contains(&key) {
            return Err(JdValidationError::DuplicateSkill {
                kind,
                skill: skill.clone(),
            });
        }
        seen.push(key);
    }
    Ok(())
}
