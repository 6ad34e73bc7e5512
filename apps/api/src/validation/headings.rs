//! Heading validator: heading-styled lines outside the approved vocabulary.

use serde::{Deserialize, Serialize};

use crate::resume::headings::{classify_heading, is_heading_like, strip_heading_markup};
use crate::validation::ValidationResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlaggedHeading {
    pub heading: String,
    /// 1-based line number in the draft.
    pub line_number: usize,
}

/// The first non-empty line is the candidate's name and is never a heading.
pub fn validate_headings(draft: &str) -> ValidationResult<FlaggedHeading> {
    let mut result = ValidationResult::default();

    let lines = draft
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1);

    for (index, line) in lines {
        if !is_heading_like(line) || classify_heading(line).is_some() {
            continue;
        }
        let heading = strip_heading_markup(line).to_string();
        if heading.is_empty() {
            continue;
        }
        result.warnings.push(format!(
            "\"{heading}\" is not a standard section heading; ATS parsers may not recognise it"
        ));
        result.flagged_items.push(FlaggedHeading {
            heading,
            line_number: index + 1,
        });
    }
    result
}
