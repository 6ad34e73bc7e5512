//! Job-Title Alignment tier: a discrete ladder over normalized titles.
//!
//! | score | condition                                              |
//! |-------|--------------------------------------------------------|
//! | 100   | normalized title is a phrase in the normalized headline |
//! | 95    | every core title word appears in the headline           |
//! | 85    | every core word appears across headline + summary       |
//! | 60    | at least half of the core words appear in the headline  |
//! | 30    | the normalized title appears anywhere in the document   |
//! | 0     | none of the above                                       |
//! | 50    | no title supplied                                       |

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::resume::{ParsedResume, Zone};
use crate::text::tokens::is_stopword;

/// Seniority and level words that carry no role information.
const TITLE_NOISE_WORDS: &[&str] = &[
    "senior", "sr", "junior", "jr", "lead", "principal", "staff", "i", "ii", "iii", "iv", "v",
    "level", "mid", "entry", "associate", "intern",
];

const NO_TITLE_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleMatch {
    NoTitle,
    ExactPhrase,
    AllWordsInHeadline,
    AllWordsInHeadlineAndSummary,
    HalfWordsInHeadline,
    ElsewhereInDocument,
    #[default]
    NoMatch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitleAlignmentTier {
    pub score: f64,
    pub match_kind: TitleMatch,
    pub normalized_title: String,
    pub normalized_headline: String,
}

/// Lowercases, turns separators into spaces, and drops seniority noise words.
pub fn normalize_title(title: &str) -> String {
    title
        .to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.')))
        .map(|w| w.trim_matches('.'))
        .filter(|w| !w.is_empty() && !TITLE_NOISE_WORDS.contains(w))
        .collect::<Vec<_>>()
        .join(" ")
}

fn core_words(normalized: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    normalized
        .split(' ')
        .filter(|w| !w.is_empty() && !is_stopword(w))
        .filter(|w| seen.insert(*w))
        .collect()
}

fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    !phrase.is_empty() && format!(" {haystack} ").contains(&format!(" {phrase} "))
}

pub fn score_title_alignment(
    jd_title: &str,
    parsed: &ParsedResume,
    full_text: &str,
) -> TitleAlignmentTier {
    let normalized_title = normalize_title(jd_title);
    let normalized_headline = normalize_title(parsed.headline());

    let (score, match_kind) = if normalized_title.is_empty() {
        (NO_TITLE_SCORE, TitleMatch::NoTitle)
    } else {
        ladder(&normalized_title, &normalized_headline, parsed, full_text)
    };

    TitleAlignmentTier {
        score,
        match_kind,
        normalized_title,
        normalized_headline,
    }
}

fn ladder(
    title: &str,
    headline: &str,
    parsed: &ParsedResume,
    full_text: &str,
) -> (f64, TitleMatch) {
    if contains_phrase(headline, title) {
        return (100.0, TitleMatch::ExactPhrase);
    }

    let core = core_words(title);
    let headline_words: HashSet<&str> = headline.split(' ').collect();
    let in_headline = core.iter().filter(|w| headline_words.contains(*w)).count();

    if !core.is_empty() && in_headline == core.len() {
        return (95.0, TitleMatch::AllWordsInHeadline);
    }

    let summary = normalize_title(&parsed.zone_text(Zone::Summary));
    let combined: HashSet<&str> = headline.split(' ').chain(summary.split(' ')).collect();
    if !core.is_empty() && core.iter().all(|w| combined.contains(*w)) {
        return (85.0, TitleMatch::AllWordsInHeadlineAndSummary);
    }

    if !core.is_empty() && in_headline * 2 >= core.len() {
        return (60.0, TitleMatch::HalfWordsInHeadline);
    }

    if contains_phrase(&normalize_title(full_text), title) {
        return (30.0, TitleMatch::ElsewhereInDocument);
    }

    (0.0, TitleMatch::NoMatch)
}
