//! Skill extraction from the relevant JD text.
//!
//! Three passes, unioned:
//! 1. dictionary lookup (technical dictionaries, ambiguous tokens gated on context)
//! 2. list patterns ("experience with X, Y, Z", parenthetical lists, "N+ years of <area>")
//! 3. soft-skill dictionary
//!
//! With fewer than 3 technical hits, the marketing / finance / data / design-PM
//! dictionaries are consulted as well. Results are deduplicated on the synonym
//! class key and returned sorted by that key.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::jd::dictionary::{
    domain_dictionaries, is_known_hard_skill, is_soft_skill, technical_dictionaries,
    AMBIGUOUS_TECH, CASE_SENSITIVE, SOFT_SKILLS, TECH_CONTEXT_CUES,
};
use crate::jd::metadata::extract_years;
use crate::text::boundary::{contains_term, find_boundary_matches};
use crate::text::synonyms::SynonymResolver;
use crate::text::tokens::is_stopword;

/// Minimum technical hits before the domain dictionaries are skipped.
const DOMAIN_FALLBACK_THRESHOLD: usize = 3;

/// Characters scanned before an ambiguous token for a context cue.
const CONTEXT_WINDOW: usize = 40;

/// Characters scanned on each side of an ambiguous token for a neighbouring skill.
const ADJACENCY_WINDOW: usize = 30;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedSkills {
    pub hard: Vec<String>,
    pub soft: Vec<String>,
}

static LIST_INTRO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:experience (?:with|in|using)|proficien(?:t|cy) (?:in|with)|knowledge of|familiarity with|familiar with|expertise in|skilled in|hands-on with|background in)\s+([^.;:\n]{2,160})",
    )
    .expect("list intro regex")
});

static PAREN_LIST_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()\n]{3,160})\)").expect("parenthetical list regex"));

static LIST_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i),|;|\s+and\s+|\s+or\s+|\s+&\s+").expect("list split regex"));

/// Ordered, deduplicating collector keyed on synonym class.
struct SkillSet<'a> {
    synonyms: &'a SynonymResolver,
    skills: BTreeMap<String, String>,
}

impl<'a> SkillSet<'a> {
    fn new(synonyms: &'a SynonymResolver) -> Self {
        Self {
            synonyms,
            skills: BTreeMap::new(),
        }
    }

    fn insert(&mut self, display: &str) {
        let display = display.trim();
        if display.is_empty() {
            return;
        }
        self.skills
            .entry(self.synonyms.canonical_key(display))
            .or_insert_with(|| display.to_string());
    }

    fn len(&self) -> usize {
        self.skills.len()
    }

    fn into_vec(self) -> Vec<String> {
        self.skills.into_values().collect()
    }
}

pub fn extract_skills(text: &str) -> ExtractedSkills {
    extract_skills_with(text, &SynonymResolver::default())
}

pub fn extract_skills_with(text: &str, synonyms: &SynonymResolver) -> ExtractedSkills {
    let mut hard = SkillSet::new(synonyms);

    // Pass 1: technical dictionaries.
    let mut accepted: Vec<&'static str> = Vec::new();
    for dict in technical_dictionaries() {
        for &skill in dict {
            if dictionary_hit(text, skill) {
                accepted.push(skill);
                hard.insert(skill);
            }
        }
    }
    for &token in AMBIGUOUS_TECH {
        if ambiguous_hit(text, token, &accepted) {
            hard.insert(token);
        }
    }

    if hard.len() < DOMAIN_FALLBACK_THRESHOLD {
        for dict in domain_dictionaries() {
            for &skill in dict {
                if dictionary_hit(text, skill) {
                    hard.insert(skill);
                }
            }
        }
    }

    // Pass 2: list-introducing patterns.
    for item in pattern_items(text) {
        hard.insert(&item);
    }

    // Pass 3: soft skills.
    let mut soft = SkillSet::new(synonyms);
    for &skill in SOFT_SKILLS {
        if contains_term(text, skill) {
            soft.insert(skill);
        }
    }

    ExtractedSkills {
        hard: hard.into_vec(),
        soft: soft.into_vec(),
    }
}

fn dictionary_hit(text: &str, skill: &str) -> bool {
    if CASE_SENSITIVE.contains(&skill) {
        exact_case_positions(text, skill).next().is_some()
    } else {
        contains_term(text, skill)
    }
}

fn exact_case_positions<'a>(text: &'a str, term: &'a str) -> impl Iterator<Item = usize> + 'a {
    find_boundary_matches(text, term).filter(move |&pos| &text[pos..pos + term.len()] == term)
}

/// Short ambiguous tokens need their canonical case plus either a context cue
/// shortly before them or another accepted skill nearby.
fn ambiguous_hit(text: &str, token: &str, accepted: &[&str]) -> bool {
    exact_case_positions(text, token).any(|pos| {
        let before = window_before(text, pos, CONTEXT_WINDOW).to_lowercase();
        if TECH_CONTEXT_CUES.iter().any(|cue| before.contains(cue)) {
            return true;
        }
        let around = window_around(text, pos, token.len(), ADJACENCY_WINDOW);
        accepted
            .iter()
            .any(|skill| *skill != token && contains_term(around, skill))
    })
}

fn window_before(text: &str, pos: usize, chars: usize) -> &str {
    let start = text[..pos]
        .char_indices()
        .rev()
        .nth(chars.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    &text[start..pos]
}

fn window_around(text: &str, pos: usize, len: usize, chars: usize) -> &str {
    let start = text[..pos]
        .char_indices()
        .rev()
        .nth(chars.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    let end = text[pos + len..]
        .char_indices()
        .nth(chars)
        .map_or(text.len(), |(i, _)| pos + len + i);
    &text[start..end]
}

/// Candidate skills from list-introducing phrases, parenthetical lists and
/// years-of-experience areas.
fn pattern_items(text: &str) -> Vec<String> {
    let mut items = Vec::new();

    for caps in LIST_INTRO_RE.captures_iter(text) {
        if let Some(list) = caps.get(1) {
            items.extend(split_list(list.as_str()));
        }
    }
    for caps in PAREN_LIST_RE.captures_iter(text) {
        if let Some(list) = caps.get(1) {
            if list.as_str().contains(',') {
                items.extend(split_list(list.as_str()));
            }
        }
    }
    for req in extract_years(text) {
        if let Some(area) = req.area {
            if accept_item(&area) {
                items.push(area);
            }
        }
    }
    items
}

fn split_list(list: &str) -> Vec<String> {
    let list = PAREN_LIST_RE.replace_all(list, " ");
    LIST_SPLIT_RE
        .split(&list)
        .map(clean_item)
        .filter(|item| accept_item(item))
        .collect()
}

/// Words that end a list item ("PySpark is required", "Kafka in production").
const ITEM_TAIL_STOP: &[&str] = &[
    "is", "are", "required", "preferred", "desired", "plus", "would", "will", "to", "for", "in",
    "with", "at", "strongly", "ideally", "experience",
];

fn clean_item(raw: &str) -> String {
    let mut item = raw.trim().trim_matches(|c: char| matches!(c, '.' | ')' | '(' | ':')).trim();
    for prefix in ["e.g. ", "eg ", "i.e. ", "such as ", "including ", "the ", "a ", "an "] {
        if item.len() > prefix.len()
            && item.is_char_boundary(prefix.len())
            && item[..prefix.len()].eq_ignore_ascii_case(prefix)
        {
            item = item[prefix.len()..].trim();
        }
    }
    item.split_whitespace()
        .take_while(|w| !ITEM_TAIL_STOP.contains(&w.to_lowercase().as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Keeps list items that look like a technology name rather than prose.
fn accept_item(item: &str) -> bool {
    let words: Vec<&str> = item.split_whitespace().collect();
    if words.is_empty() || words.len() > 3 || item.chars().count() < 2 || item.chars().count() > 40 {
        return false;
    }
    if is_soft_skill(item) || words.iter().all(|w| is_stopword(&w.to_lowercase())) {
        return false;
    }
    is_known_hard_skill(item) || looks_technical(item)
}

/// "PostgreSQL", "GraphQL", "S3", "C++", "SQL": inner capitals, digits, symbols,
/// or an all-caps token.
fn looks_technical(item: &str) -> bool {
    item.split_whitespace().any(|word| {
        let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
        let inner_upper = word.chars().skip(1).any(|c| c.is_uppercase())
            && word.chars().any(|c| c.is_lowercase());
        let all_caps = letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase());
        let has_digit = word.chars().any(|c| c.is_ascii_digit()) && !letters.is_empty();
        let has_symbol = word.chars().any(|c| matches!(c, '+' | '#' | '.' | '/')) && !letters.is_empty();
        inner_upper || all_caps || has_digit || has_symbol
    })
}
