//! Approved section-heading vocabulary shared by the zone parser, the
//! structural scorer and the heading validator.

use crate::resume::zones::Zone;

/// Lowercase approved headings and the zone each one opens.
pub const APPROVED_HEADINGS: &[(&str, Zone)] = &[
    ("summary", Zone::Summary),
    ("professional summary", Zone::Summary),
    ("career summary", Zone::Summary),
    ("executive summary", Zone::Summary),
    ("profile", Zone::Summary),
    ("professional profile", Zone::Summary),
    ("objective", Zone::Summary),
    ("career objective", Zone::Summary),
    ("about me", Zone::Summary),
    ("skills", Zone::Skills),
    ("technical skills", Zone::Skills),
    ("core skills", Zone::Skills),
    ("key skills", Zone::Skills),
    ("core competencies", Zone::Skills),
    ("competencies", Zone::Skills),
    ("skills & expertise", Zone::Skills),
    ("skills and expertise", Zone::Skills),
    ("technologies", Zone::Skills),
    ("tools & technologies", Zone::Skills),
    ("tools and technologies", Zone::Skills),
    ("experience", Zone::Experience),
    ("work experience", Zone::Experience),
    ("professional experience", Zone::Experience),
    ("relevant experience", Zone::Experience),
    ("employment history", Zone::Experience),
    ("work history", Zone::Experience),
    ("career history", Zone::Experience),
    ("projects", Zone::Experience),
    ("key projects", Zone::Experience),
    ("selected projects", Zone::Experience),
    ("volunteer experience", Zone::Experience),
    ("leadership experience", Zone::Experience),
    ("education", Zone::Education),
    ("education & training", Zone::Education),
    ("education and training", Zone::Education),
    ("certifications", Zone::Education),
    ("licenses & certifications", Zone::Education),
    ("licenses and certifications", Zone::Education),
    ("certifications & training", Zone::Education),
    ("training", Zone::Education),
    ("awards", Zone::Education),
    ("honors & awards", Zone::Education),
    ("honors and awards", Zone::Education),
    ("publications", Zone::Education),
    ("languages", Zone::Education),
    ("additional information", Zone::Education),
];

/// Acronym-sized lines ("AWS", "SQL") are never ad-hoc headings.
const MAX_ACRONYM_LEN: usize = 4;
const MAX_HEADING_WORDS: usize = 5;

/// Strips markdown `#`, bold/italic markers and a trailing colon.
pub fn strip_heading_markup(line: &str) -> &str {
    line.trim()
        .trim_start_matches(|c: char| c == '#' || c.is_whitespace())
        .trim_matches(|c: char| matches!(c, '*' | '_') || c.is_whitespace())
        .trim_end_matches(':')
        .trim_matches(|c: char| matches!(c, '*' | '_') || c.is_whitespace())
}

/// Zone for an approved heading written exactly (case-insensitive, markup stripped).
pub fn approved_zone(line: &str) -> Option<Zone> {
    let text = strip_heading_markup(line);
    APPROVED_HEADINGS
        .iter()
        .find(|(heading, _)| heading.eq_ignore_ascii_case(text))
        .map(|(_, zone)| *zone)
}

/// Classifies a resume line as a section heading.
///
/// Exact approved headings always count. An all-caps line is accepted as an
/// ad-hoc heading only if, lowercased, it overlaps an approved heading; lines
/// with digits or commas (dates, locations) and short acronyms are rejected.
pub fn classify_heading(line: &str) -> Option<Zone> {
    if let Some(zone) = approved_zone(line) {
        return Some(zone);
    }
    let text = strip_heading_markup(line);
    if !is_all_caps_candidate(text) {
        return None;
    }
    let lower = text.to_lowercase();
    APPROVED_HEADINGS
        .iter()
        .filter(|(heading, _)| lower.contains(heading) || heading.contains(lower.as_str()))
        .max_by_key(|(heading, _)| heading.len())
        .map(|(_, zone)| *zone)
}

fn is_all_caps_candidate(text: &str) -> bool {
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() <= MAX_ACRONYM_LEN && !text.contains(' ') {
        return false;
    }
    !letters.is_empty()
        && text.chars().next().is_some_and(char::is_alphabetic)
        && letters.iter().all(|c| c.is_uppercase())
        && text.split_whitespace().count() <= MAX_HEADING_WORDS
        && !text.chars().any(|c| c.is_ascii_digit())
        && !text.contains(',')
        && !text.contains('|')
        && !text.contains('@')
}

/// True for lines formatted like a heading: markdown `#`, fully bold-wrapped,
/// or an all-caps short line.
pub fn is_heading_like(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return false;
    }
    if trimmed.starts_with('#') {
        return true;
    }
    let bold = (trimmed.starts_with("**") && trimmed.trim_end_matches(':').ends_with("**") && trimmed.len() > 4)
        || (trimmed.starts_with("__") && trimmed.trim_end_matches(':').ends_with("__") && trimmed.len() > 4);
    if bold {
        let inner = strip_heading_markup(trimmed);
        return !inner.is_empty() && !inner.contains("**");
    }
    is_all_caps_candidate(strip_heading_markup(trimmed))
}
