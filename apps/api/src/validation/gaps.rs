//! Employment-gap detector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::text::dates::{extract_employment_ranges, format_month_year, month_index, RangeEnd};
use crate::validation::ValidationResult;

/// Gaps longer than this many months are reported.
pub const MAX_GAP_MONTHS: i32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentGap {
    /// "December 2021"
    pub gap_start: String,
    pub gap_end: String,
    pub months: i32,
    pub suggestion: String,
}

/// Ranges are walked from the most recent end date backwards; a gap is the
/// distance between a role's end and the earliest start already covered by
/// later roles, so overlapping roles never produce one.
pub fn detect_employment_gaps(text: &str) -> ValidationResult<EmploymentGap> {
    let mut ranges = extract_employment_ranges(text);
    ranges.sort_by(|a, b| b.end_index().cmp(&a.end_index()));

    let mut result = ValidationResult::default();
    let Some(first) = ranges.first() else {
        return result;
    };
    let mut covered_from = first.start;

    for range in ranges.iter().skip(1) {
        let RangeEnd::Date(end) = range.end else {
            // Open-ended roles still cover everything since their start.
            covered_from = covered_from.min(range.start);
            continue;
        };
        let months = month_index(covered_from) - range.end_index();
        if months > MAX_GAP_MONTHS {
            result.flagged_items.push(gap(end, covered_from, months));
            result.warnings.push(format!(
                "{months}-month gap between {} and {}",
                format_month_year(end),
                format_month_year(covered_from)
            ));
        }
        covered_from = covered_from.min(range.start);
    }
    result
}

fn gap(end: NaiveDate, next_start: NaiveDate, months: i32) -> EmploymentGap {
    EmploymentGap {
        gap_start: format_month_year(end),
        gap_end: format_month_year(next_start),
        months,
        suggestion: format!(
            "Consider briefly explaining the {months}-month gap (education, caregiving, freelance work or a career break) in your summary or cover letter."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_roles_have_no_gap() {
        let text = "Senior Engineer, Acme\nJanuary 2022 – Present\n\nEngineer, Initech\nJune 2019 – December 2021";
        assert!(detect_employment_gaps(text).passed());
    }

    #[test]
    fn test_eight_month_gap() {
        let text = "Senior Engineer, Acme\nAugust 2022 - Present\n\nEngineer, Initech\nJune 2019 - December 2021";
        let result = detect_employment_gaps(text);
        assert_eq!(result.flagged_items.len(), 1);
        let gap = &result.flagged_items[0];
        assert_eq!(gap.months, 8);
        assert_eq!(gap.gap_start, "December 2021");
        assert_eq!(gap.gap_end, "August 2022");
        assert!(gap.suggestion.contains("8-month"));
    }

    #[test]
    fn test_short_gap_is_ignored() {
        let text = "Mar 2022 to Present\nJun 2019 to Dec 2021";
        assert!(detect_employment_gaps(text).passed(), "three months is within tolerance");
    }

    #[test]
    fn test_overlapping_roles_cover_each_other() {
        // The middle role overlaps the current one.
        let text = "Jan 2023 - Present\nMar 2020 - Jun 2023\nJan 2016 - Feb 2020";
        assert!(detect_employment_gaps(text).passed());
    }

    #[test]
    fn test_concurrent_current_roles_cover_the_span() {
        let text = "Lead, Acme\nJan 2023 - Present\n\nAdvisor, Board\nJan 2015 - Present\n\nEngineer, Initech\nJan 2010 - Dec 2014";
        let result = detect_employment_gaps(text);
        assert!(result.passed(), "{:?}", result.warnings);
    }

    #[test]
    fn test_numeric_ranges() {
        let result = detect_employment_gaps("Acme\n01/2023 - Present\n\nBeta\n01/2015 - 06/2022");
        assert_eq!(result.flagged_items.len(), 1);
        assert_eq!(result.flagged_items[0].months, 7);
        assert_eq!(result.flagged_items[0].gap_start, "June 2022");
    }

    #[test]
    fn test_no_ranges() {
        let result = detect_employment_gaps("No dates here at all.");
        assert!(result.passed());
        assert!(result.warnings.is_empty());
    }
}
