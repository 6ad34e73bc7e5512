//! Structural Compliance tier: five checks worth up to 20 points each, minus a
//! flat penalty for decorative characters.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::resume::{ParsedResume, Zone};
use crate::text::contact::ContactChannels;
use crate::text::dates::{DateFormat, EmploymentRange};
use crate::text::matcher::TextMatcher;
use crate::text::tokens::word_count;

const CHECK_POINTS: f64 = 20.0;
const DECORATIVE_PENALTY: f64 = 15.0;

pub const IDEAL_WORDS: (usize, usize) = (400, 1500);
pub const ACCEPTABLE_WORDS: (usize, usize) = (250, 1800);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureChecks {
    pub headings: f64,
    pub reverse_chronological: f64,
    pub date_format: f64,
    pub contact: f64,
    pub word_count: f64,
    pub decorative_penalty: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureTier {
    pub score: f64,
    pub checks: StructureChecks,
    pub heading_zones: usize,
    pub reverse_chronological: bool,
    pub date_formats: Vec<DateFormat>,
    pub contact: ContactChannels,
    pub word_count: usize,
    pub decorative_chars: Vec<char>,
}

/// Emoji, dingbats, box drawing and other symbol blocks that ATS parsers mangle.
pub fn is_decorative(c: char) -> bool {
    matches!(
        c as u32,
        0x2500..=0x259F      // box drawing, block elements
            | 0x2600..=0x27BF // misc symbols, dingbats
            | 0x2B00..=0x2BFF // misc symbols and arrows
            | 0x1F000..=0x1FAFF // emoji and pictographs
            | 0xFE0F           // emoji presentation selector
    )
}

/// Distinct date formats used in the text.
pub fn date_formats(text: &str, matcher: &dyn TextMatcher) -> Vec<DateFormat> {
    matcher
        .extract_dates(text)
        .into_iter()
        .map(|d| d.format)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// True when employment ranges run newest-first. Ranges come from the
/// experience zone, or the whole document when that zone has fewer than two.
/// Fewer than two ranges anywhere is vacuously in order.
pub fn is_reverse_chronological(
    parsed: &ParsedResume,
    full_text: &str,
    matcher: &dyn TextMatcher,
) -> bool {
    let mut ranges = matcher.employment_ranges(&parsed.zone_text(Zone::Experience));
    if ranges.len() < 2 {
        ranges = matcher.employment_ranges(full_text);
    }
    starts_descending(&ranges)
}

fn starts_descending(ranges: &[EmploymentRange]) -> bool {
    ranges
        .windows(2)
        .all(|pair| pair[0].start_index() >= pair[1].start_index())
}

pub fn score_structure(
    tailored: &str,
    parsed: &ParsedResume,
    matcher: &dyn TextMatcher,
) -> StructureTier {
    let heading_zones = parsed.heading_zone_count();
    let reverse_chronological = is_reverse_chronological(parsed, tailored, matcher);
    let formats = date_formats(tailored, matcher);
    let contact = ContactChannels::detect(tailored);
    let words = word_count(tailored);

    let mut decorative_chars: Vec<char> = tailored.chars().filter(|&c| is_decorative(c)).collect();
    decorative_chars.sort_unstable();
    decorative_chars.dedup();

    let checks = StructureChecks {
        headings: match heading_zones {
            0 => 0.0,
            1 | 2 => CHECK_POINTS / 2.0,
            _ => CHECK_POINTS,
        },
        reverse_chronological: if reverse_chronological { CHECK_POINTS } else { 0.0 },
        date_format: match formats.len() {
            0 | 1 => CHECK_POINTS,
            2 => CHECK_POINTS / 2.0,
            _ => 0.0,
        },
        contact: match (contact.email, contact.phone) {
            (true, true) => CHECK_POINTS,
            (false, false) => 0.0,
            _ => CHECK_POINTS / 2.0,
        },
        word_count: if (IDEAL_WORDS.0..=IDEAL_WORDS.1).contains(&words) {
            CHECK_POINTS
        } else if (ACCEPTABLE_WORDS.0..=ACCEPTABLE_WORDS.1).contains(&words) {
            CHECK_POINTS / 2.0
        } else {
            0.0
        },
        decorative_penalty: if decorative_chars.is_empty() { 0.0 } else { DECORATIVE_PENALTY },
    };

    let earned = checks.headings
        + checks.reverse_chronological
        + checks.date_format
        + checks.contact
        + checks.word_count
        - checks.decorative_penalty;

    StructureTier {
        score: earned.clamp(0.0, 100.0),
        checks,
        heading_zones,
        reverse_chronological,
        date_formats: formats,
        contact,
        word_count: words,
        decorative_chars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::parse_resume;
    use crate::text::matcher::BoundaryMatcher;

    fn structure(text: &str) -> StructureTier {
        score_structure(text, &parse_resume(text), &BoundaryMatcher::default())
    }

    fn padded(body: &str, words: usize) -> String {
        format!("{body}\n{}", "word ".repeat(words))
    }

    const WELL_FORMED: &str = "Jane Doe\njane@example.com | (555) 123-4567\n\n\
Summary\nBackend engineer.\n\nSkills\nRust, Go\n\n\
Experience\nAcme, Jan 2021 – Present\n- Built things\nBeta, Mar 2017 – Dec 2020\n- Built more things\n\n\
Education\nState University";

    #[test]
    fn test_well_formed_resume_full_marks() {
        let tier = structure(&padded(WELL_FORMED, 450));
        assert_eq!(tier.checks.headings, 20.0);
        assert!(tier.reverse_chronological);
        assert_eq!(tier.checks.date_format, 20.0);
        assert_eq!(tier.checks.contact, 20.0);
        assert_eq!(tier.checks.word_count, 20.0);
        assert_eq!(tier.score, 100.0);
    }

    #[test]
    fn test_chronological_order_is_flagged() {
        let text = "Experience\nBeta, Mar 2017 – Dec 2020\nAcme, Jan 2021 – Present";
        let tier = structure(text);
        assert!(!tier.reverse_chronological);
        assert_eq!(tier.checks.reverse_chronological, 0.0);
    }

    #[test]
    fn test_numeric_ranges_oldest_first_are_flagged() {
        let tier = structure("Experience\nBeta\n01/2015 - 12/2017\nAcme\n01/2018 - Present");
        assert!(!tier.reverse_chronological);
        assert_eq!(tier.checks.reverse_chronological, 0.0);

        let tier = structure("Experience\nAcme\n01/2018 - Present\nBeta\n01/2015 - 12/2017");
        assert!(tier.reverse_chronological);
    }

    #[test]
    fn test_single_range_is_vacuously_ordered() {
        assert!(structure("Experience\nAcme, Jan 2021 – Present").reverse_chronological);
    }

    #[test]
    fn test_mixed_date_formats_partial() {
        let tier = structure("Experience\nJanuary 2021 - Present\n03/2017 - 12/2020");
        assert_eq!(tier.date_formats.len(), 2);
        assert_eq!(tier.checks.date_format, 10.0);
    }

    #[test]
    fn test_word_count_bands() {
        assert_eq!(structure(&padded("Skills", 300)).checks.word_count, 10.0);
        assert_eq!(structure(&padded("Skills", 100)).checks.word_count, 0.0);
        assert_eq!(structure(&padded("Skills", 2000)).checks.word_count, 0.0);
    }

    #[test]
    fn test_decorative_penalty() {
        let clean = structure(&padded(WELL_FORMED, 450)).score;
        let fancy = structure(&padded(&format!("{WELL_FORMED}\n★ Award winner 🚀"), 450));
        assert_eq!(fancy.checks.decorative_penalty, 15.0);
        assert_eq!(fancy.score, clean - 15.0);
        assert_eq!(fancy.decorative_chars.len(), 2);
    }

    #[test]
    fn test_plain_bullets_are_not_decorative() {
        assert!(!is_decorative('•'));
        assert!(!is_decorative('-'));
        assert!(is_decorative('✓'));
    }

    #[test]
    fn test_score_never_negative() {
        let tier = structure("🚀");
        assert!(tier.score >= 0.0);
    }
}
