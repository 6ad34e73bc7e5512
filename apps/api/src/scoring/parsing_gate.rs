//! Tier 0: binary parsing gate.
//!
//! Fails when the document has none of {standard heading, email/phone, date},
//! or when tab density suggests a table layout. A failed gate zeroes the whole
//! score; it is a data result, not an error.

use serde::{Deserialize, Serialize};

use crate::resume::ParsedResume;
use crate::text::contact::{has_email, has_phone};
use crate::text::matcher::TextMatcher;

/// Tab count below which density is never considered extreme.
const MIN_TABS_FOR_TABLE: usize = 10;
/// Average tabs per non-empty line above which the layout reads as a table.
const MAX_TABS_PER_LINE: f64 = 2.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsingGateResult {
    pub passed: bool,
    pub reasons: Vec<String>,
    pub has_standard_heading: bool,
    pub has_contact: bool,
    pub has_date: bool,
    pub tab_count: usize,
}

pub fn evaluate_parsing_gate(
    text: &str,
    parsed: &ParsedResume,
    matcher: &dyn TextMatcher,
) -> ParsingGateResult {
    let has_standard_heading = !parsed.headings.is_empty();
    let has_contact = has_email(text) || has_phone(text);
    let has_date = !matcher.extract_dates(text).is_empty();

    let tab_count = text.matches('\t').count();
    let lines = text.lines().filter(|l| !l.trim().is_empty()).count().max(1);
    let tab_heavy =
        tab_count >= MIN_TABS_FOR_TABLE && tab_count as f64 / lines as f64 > MAX_TABS_PER_LINE;

    let mut reasons = Vec::new();
    if !has_standard_heading && !has_contact && !has_date {
        reasons.push("No standard section headings found".to_string());
        reasons.push("No email address or phone number found".to_string());
        reasons.push("No recognizable dates (Month YYYY or MM/YYYY) found".to_string());
    }
    if tab_heavy {
        reasons.push(format!(
            "Heavy tab usage ({tab_count} tabs) suggests a table layout that ATS parsers cannot read"
        ));
    }

    ParsingGateResult {
        passed: reasons.is_empty(),
        reasons,
        has_standard_heading,
        has_contact,
        has_date,
        tab_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::parse_resume;
    use crate::text::matcher::BoundaryMatcher;

    fn gate(text: &str) -> ParsingGateResult {
        evaluate_parsing_gate(text, &parse_resume(text), &BoundaryMatcher::default())
    }

    #[test]
    fn test_gate_fails_with_all_three_reasons() {
        let result = gate("I am a hard working person who likes computers and people.");
        assert!(!result.passed);
        assert_eq!(result.reasons.len(), 3, "{:?}", result.reasons);
    }

    #[test]
    fn test_any_single_signal_passes() {
        assert!(gate("Experience\nBuilt things").passed);
        assert!(gate("jane@example.com\nBuilt things").passed);
        assert!(gate("Acme, Jan 2020\nBuilt things").passed);
    }

    #[test]
    fn test_tab_heavy_layout_fails() {
        let row = "Skill\tLevel\tYears\tNotes\n";
        let text = format!("Experience\n{}", row.repeat(5));
        let result = gate(&text);
        assert!(!result.passed);
        assert_eq!(result.reasons.len(), 1);
        assert!(result.reasons[0].contains("tab"));
    }

    #[test]
    fn test_occasional_tabs_are_fine() {
        assert!(gate("Experience\nAcme\tJan 2020\nBeta\tMar 2018").passed);
    }
}
