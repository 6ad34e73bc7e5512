//! Cover-Letter Scoring Engine: six prose-oriented tiers.
//!
//! Keyword Reinforcement 30%, Pain-Point Coverage 30%, Length 10%,
//! No-Duplication 10%, Paragraph Structure 10%, Authentic Voice 10%.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::jd::ProcessedJd;
use crate::scoring::round1;
use crate::text::matcher::TextMatcher;
use crate::text::tokens::{content_words, split_paragraphs, split_sentences, word_count};

const TOP_SKILLS: usize = 5;
/// Share of a requirement's content words the letter must echo.
const PAIN_POINT_WORD_SHARE: f64 = 0.4;
/// Content words shorter than this are ignored for pain-point coverage.
const PAIN_POINT_MIN_WORD_LEN: usize = 4;
const DUPLICATE_OVERLAP: f64 = 0.85;
const DUPLICATE_MIN_WORDS: usize = 5;
const DUPLICATE_PENALTY: f64 = 20.0;
const CLICHE_PENALTY: f64 = 15.0;
const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterWeights {
    pub keyword_reinforcement: f64,
    pub pain_point_coverage: f64,
    pub length_compliance: f64,
    pub no_duplication: f64,
    pub structural_compliance: f64,
    pub authentic_voice: f64,
}

pub const COVER_LETTER_WEIGHTS: CoverLetterWeights = CoverLetterWeights {
    keyword_reinforcement: 0.30,
    pain_point_coverage: 0.30,
    length_compliance: 0.10,
    no_duplication: 0.10,
    structural_compliance: 0.10,
    authentic_voice: 0.10,
};

/// Phrases that read as machine-written filler.
pub const CLICHE_PHRASES: &[&str] = &[
    "i am writing to express my interest",
    "i am excited to apply",
    "i am thrilled",
    "passionate about leveraging",
    "proven track record",
    "hit the ground running",
    "think outside the box",
    "team player",
    "synergy",
    "dynamic environment",
    "fast-paced environment",
    "results-driven",
    "detail-oriented professional",
    "i believe i would be a great fit",
    "perfect fit",
    "unique blend",
    "delve",
    "tapestry",
    "in today's rapidly evolving",
    "testament to",
    "go above and beyond",
    "wealth of experience",
    "thank you for considering my application",
];

static REQUIREMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:must|required|requirements?|you will|you'll|responsible for|experience (?:with|in)|proficien(?:t|cy)|ability to|able to|strong|expertise|knowledge of|familiar(?:ity)? with|need|looking for|should)\b",
    )
    .expect("requirement language regex")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordReinforcement {
    pub score: f64,
    pub top_skills: Vec<String>,
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PainPointCoverage {
    pub score: f64,
    pub requirements: usize,
    pub addressed: usize,
    pub unaddressed: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LengthCompliance {
    pub score: f64,
    pub word_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoDuplication {
    pub score: f64,
    pub duplicated_sentences: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStructure {
    pub score: f64,
    pub paragraphs: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthenticVoice {
    pub score: f64,
    pub cliches: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterTiers {
    pub keyword_reinforcement: KeywordReinforcement,
    pub pain_point_coverage: PainPointCoverage,
    pub length_compliance: LengthCompliance,
    pub no_duplication: NoDuplication,
    pub structural_compliance: ParagraphStructure,
    pub authentic_voice: AuthenticVoice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterScoreResult {
    pub total_score: f64,
    pub tier_scores: CoverLetterTiers,
    pub recommendations: Vec<String>,
}

pub fn score_cover_letter(
    letter: &str,
    jd: &ProcessedJd,
    resume: &str,
    matcher: &dyn TextMatcher,
) -> CoverLetterScoreResult {
    let tiers = CoverLetterTiers {
        keyword_reinforcement: keyword_reinforcement(letter, jd, matcher),
        pain_point_coverage: pain_point_coverage(letter, jd, matcher),
        length_compliance: length_compliance(letter),
        no_duplication: no_duplication(letter, resume),
        structural_compliance: paragraph_structure(letter),
        authentic_voice: authentic_voice(letter),
    };

    let w = COVER_LETTER_WEIGHTS;
    let total_score = round1(
        tiers.keyword_reinforcement.score * w.keyword_reinforcement
            + tiers.pain_point_coverage.score * w.pain_point_coverage
            + tiers.length_compliance.score * w.length_compliance
            + tiers.no_duplication.score * w.no_duplication
            + tiers.structural_compliance.score * w.structural_compliance
            + tiers.authentic_voice.score * w.authentic_voice,
    );
    let recommendations = recommendations(&tiers);

    info!(total_score, words = tiers.length_compliance.word_count, "scored cover letter");

    CoverLetterScoreResult {
        total_score,
        tier_scores: tiers,
        recommendations,
    }
}

/// Top JD hard skills by frequency in the JD text; ties keep JD order.
pub fn top_jd_skills(jd: &ProcessedJd, matcher: &dyn TextMatcher, n: usize) -> Vec<String> {
    let mut ranked: Vec<(usize, &String)> = jd
        .extracted_skills
        .hard
        .iter()
        .map(|s| (matcher.count_occurrences(s, &jd.cleaned_text), s))
        .collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().take(n).map(|(_, s)| s.clone()).collect()
}

fn keyword_reinforcement(letter: &str, jd: &ProcessedJd, matcher: &dyn TextMatcher) -> KeywordReinforcement {
    let top_skills = top_jd_skills(jd, matcher, TOP_SKILLS);
    let (found, missing): (Vec<String>, Vec<String>) = top_skills
        .iter()
        .cloned()
        .partition(|s| matcher.term_exists(s, letter));
    let score = if top_skills.is_empty() {
        100.0
    } else {
        round1(found.len() as f64 / top_skills.len() as f64 * 100.0)
    };
    KeywordReinforcement {
        score,
        top_skills,
        found,
        missing,
    }
}

fn pain_point_coverage(letter: &str, jd: &ProcessedJd, matcher: &dyn TextMatcher) -> PainPointCoverage {
    let source = if jd.sections.full_relevant_text.trim().is_empty() {
        &jd.cleaned_text
    } else {
        &jd.sections.full_relevant_text
    };
    let letter_words = content_words(letter, PAIN_POINT_MIN_WORD_LEN);

    let mut tier = PainPointCoverage::default();
    for sentence in split_sentences(source) {
        if word_count(&sentence) < 4 {
            continue;
        }
        let skills: Vec<&String> = jd
            .extracted_skills
            .hard
            .iter()
            .filter(|s| matcher.term_exists(s, &sentence))
            .collect();
        if skills.is_empty() && !REQUIREMENT_RE.is_match(&sentence) {
            continue;
        }
        tier.requirements += 1;

        let skill_hit = skills.iter().any(|s| matcher.term_exists(s, letter));
        let words = content_words(&sentence, PAIN_POINT_MIN_WORD_LEN);
        let shared = words.iter().filter(|w| letter_words.contains(*w)).count();
        let word_hit = !words.is_empty() && shared as f64 / words.len() as f64 >= PAIN_POINT_WORD_SHARE;

        if skill_hit || word_hit {
            tier.addressed += 1;
        } else {
            tier.unaddressed.push(sentence.trim().to_string());
        }
    }
    tier.score = if tier.requirements == 0 {
        100.0
    } else {
        round1(tier.addressed as f64 / tier.requirements as f64 * 100.0)
    };
    tier
}

fn length_compliance(letter: &str) -> LengthCompliance {
    let words = word_count(letter);
    let score = match words {
        250..=400 => 100.0,
        200..=249 | 401..=500 => 70.0,
        _ => 30.0,
    };
    LengthCompliance {
        score,
        word_count: words,
    }
}

fn no_duplication(letter: &str, resume: &str) -> NoDuplication {
    let resume_words: HashSet<String> = content_words(resume, 1);
    let duplicated_sentences: Vec<String> = split_sentences(letter)
        .into_iter()
        .filter(|sentence| {
            let words = content_words(sentence, 1);
            if words.len() < DUPLICATE_MIN_WORDS {
                return false;
            }
            let shared = words.iter().filter(|w| resume_words.contains(*w)).count();
            shared as f64 / words.len() as f64 > DUPLICATE_OVERLAP
        })
        .map(|s| s.trim().to_string())
        .collect();
    NoDuplication {
        score: (100.0 - DUPLICATE_PENALTY * duplicated_sentences.len() as f64).max(0.0),
        duplicated_sentences,
    }
}

fn paragraph_structure(letter: &str) -> ParagraphStructure {
    let paragraphs = split_paragraphs(letter).len();
    let score = match paragraphs {
        3 | 4 => 100.0,
        2 | 5 => 60.0,
        _ => 20.0,
    };
    ParagraphStructure { score, paragraphs }
}

fn authentic_voice(letter: &str) -> AuthenticVoice {
    let lower = letter.to_lowercase();
    let cliches: Vec<String> = CLICHE_PHRASES
        .iter()
        .filter(|p| lower.contains(*p))
        .map(|p| p.to_string())
        .collect();
    AuthenticVoice {
        score: (100.0 - CLICHE_PENALTY * cliches.len() as f64).max(0.0),
        cliches,
    }
}

fn recommendations(tiers: &CoverLetterTiers) -> Vec<String> {
    let mut recs = Vec::new();
    if !tiers.keyword_reinforcement.missing.is_empty() {
        recs.push(format!(
            "Mention the role's key skills you actually have: {}.",
            tiers.keyword_reinforcement.missing.join(", ")
        ));
    }
    if tiers.pain_point_coverage.score < 60.0 {
        recs.push(format!(
            "Address more of the job's core requirements; {} of {} are covered.",
            tiers.pain_point_coverage.addressed, tiers.pain_point_coverage.requirements
        ));
    }
    if tiers.length_compliance.score < 100.0 {
        recs.push(format!(
            "Aim for 250-400 words; the letter has {}.",
            tiers.length_compliance.word_count
        ));
    }
    if !tiers.no_duplication.duplicated_sentences.is_empty() {
        recs.push("Rephrase sentences copied from your resume; tell the story behind them instead.".to_string());
    }
    if tiers.structural_compliance.score < 100.0 {
        recs.push(format!(
            "Use 3-4 paragraphs; the letter has {}.",
            tiers.structural_compliance.paragraphs
        ));
    }
    if !tiers.authentic_voice.cliches.is_empty() {
        recs.push(format!(
            "Replace generic phrases: {}.",
            tiers.authentic_voice.cliches.join(", ")
        ));
    }
    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}
