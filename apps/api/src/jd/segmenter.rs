//! JD Segmenter: splits cleaned JD text into relevant and noise sections.
//!
//! Header lines are matched against a fixed catalog. Text before the first
//! header is the role overview. With no headers at all, each sentence is
//! classified on its own (salary / benefits / EEO patterns → noise), so
//! segmentation always produces something.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::tokens::split_sentences;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionField {
    RoleOverview,
    Responsibilities,
    Requirements,
    Preferred,
    Skills,
    AboutCompany,
    Benefits,
    Compensation,
    Location,
    EqualOpportunity,
    HowToApply,
    /// Sentence-level noise from the fallback classifier.
    Boilerplate,
}

impl SectionField {
    pub fn is_relevant(self) -> bool {
        matches!(
            self,
            SectionField::RoleOverview
                | SectionField::Responsibilities
                | SectionField::Requirements
                | SectionField::Preferred
                | SectionField::Skills
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdSegment {
    pub field: SectionField,
    /// Header line as written; `None` for the leading overview and fallback segments.
    pub header: Option<String>,
    pub relevant: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdSections {
    pub segments: Vec<JdSegment>,
    pub full_relevant_text: String,
    /// True when no header was found and sentence classification was used.
    pub used_fallback: bool,
}

const HEADER_CATALOG: &[(&str, SectionField)] = &[
    // relevant
    ("about the role", SectionField::RoleOverview),
    ("about this role", SectionField::RoleOverview),
    ("about the position", SectionField::RoleOverview),
    ("the role", SectionField::RoleOverview),
    ("role overview", SectionField::RoleOverview),
    ("position overview", SectionField::RoleOverview),
    ("position summary", SectionField::RoleOverview),
    ("job summary", SectionField::RoleOverview),
    ("job description", SectionField::RoleOverview),
    ("the opportunity", SectionField::RoleOverview),
    ("your role", SectionField::RoleOverview),
    ("overview", SectionField::RoleOverview),
    ("key responsibilities", SectionField::Responsibilities),
    ("responsibilities", SectionField::Responsibilities),
    ("what you'll do", SectionField::Responsibilities),
    ("what you will do", SectionField::Responsibilities),
    ("what you'll be doing", SectionField::Responsibilities),
    ("your impact", SectionField::Responsibilities),
    ("in this role", SectionField::Responsibilities),
    ("day to day", SectionField::Responsibilities),
    ("duties", SectionField::Responsibilities),
    ("minimum qualifications", SectionField::Requirements),
    ("basic qualifications", SectionField::Requirements),
    ("required qualifications", SectionField::Requirements),
    ("qualifications", SectionField::Requirements),
    ("requirements", SectionField::Requirements),
    ("what you'll bring", SectionField::Requirements),
    ("what you bring", SectionField::Requirements),
    ("what we're looking for", SectionField::Requirements),
    ("what we are looking for", SectionField::Requirements),
    ("who you are", SectionField::Requirements),
    ("you have", SectionField::Requirements),
    ("must have", SectionField::Requirements),
    ("required skills", SectionField::Requirements),
    ("preferred qualifications", SectionField::Preferred),
    ("nice to have", SectionField::Preferred),
    ("nice-to-have", SectionField::Preferred),
    ("bonus points", SectionField::Preferred),
    ("preferred", SectionField::Preferred),
    ("technical skills", SectionField::Skills),
    ("tech stack", SectionField::Skills),
    ("our stack", SectionField::Skills),
    ("skills", SectionField::Skills),
    // noise
    ("about us", SectionField::AboutCompany),
    ("about the company", SectionField::AboutCompany),
    ("company overview", SectionField::AboutCompany),
    ("who we are", SectionField::AboutCompany),
    ("our company", SectionField::AboutCompany),
    ("our mission", SectionField::AboutCompany),
    ("benefits", SectionField::Benefits),
    ("perks", SectionField::Benefits),
    ("what we offer", SectionField::Benefits),
    ("why join us", SectionField::Benefits),
    ("compensation", SectionField::Compensation),
    ("salary", SectionField::Compensation),
    ("pay range", SectionField::Compensation),
    ("base salary", SectionField::Compensation),
    ("total rewards", SectionField::Compensation),
    ("location", SectionField::Location),
    ("work location", SectionField::Location),
    ("work environment", SectionField::Location),
    ("equal employment opportunity", SectionField::EqualOpportunity),
    ("equal opportunity", SectionField::EqualOpportunity),
    ("eeo", SectionField::EqualOpportunity),
    ("diversity", SectionField::EqualOpportunity),
    ("our commitment", SectionField::EqualOpportunity),
    ("how to apply", SectionField::HowToApply),
    ("application process", SectionField::HowToApply),
    ("accommodations", SectionField::HowToApply),
    ("accommodation", SectionField::HowToApply),
];

/// Catalog sorted longest phrase first so "about the role" wins over "overview".
static SORTED_CATALOG: Lazy<Vec<(&'static str, SectionField)>> = Lazy::new(|| {
    let mut catalog = HEADER_CATALOG.to_vec();
    catalog.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
    catalog
});

static NOISE_SENTENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(\$\s?\d|\bsalary\b|\bcompensation\b|\bper (?:hour|year|annum)\b|\bbenefits?\b|\b401\s?\(?k\)?|\bpto\b|paid time off|health insurance|\bdental\b|vision insurance|equal opportunity|equal employment|without regard to|sexual orientation|gender identity|veteran status|\bdisabilit(?:y|ies)\b|reasonable accommodation|e-verify|background check)",
    )
    .expect("noise sentence regex")
});

/// Splits cleaned JD text into ordered segments.
pub fn segment_jd(cleaned: &str) -> JdSections {
    let mut segments: Vec<JdSegment> = Vec::new();
    let mut current = JdSegment {
        field: SectionField::RoleOverview,
        header: None,
        relevant: true,
        text: String::new(),
    };
    let mut headers_found = 0usize;

    for line in cleaned.lines() {
        if let Some((field, header, remainder)) = detect_header(line) {
            headers_found += 1;
            push_segment(&mut segments, current);
            current = JdSegment {
                field,
                header: Some(header),
                relevant: field.is_relevant(),
                text: remainder,
            };
        } else {
            append_line(&mut current.text, line);
        }
    }
    push_segment(&mut segments, current);

    if headers_found == 0 {
        segments = classify_sentences(cleaned);
    }

    let full_relevant_text = join_relevant(&segments);
    JdSections {
        segments,
        full_relevant_text,
        used_fallback: headers_found == 0,
    }
}

/// Concatenation of every relevant segment, blank-line separated.
pub fn join_relevant(segments: &[JdSegment]) -> String {
    segments
        .iter()
        .filter(|s| s.relevant)
        .map(|s| s.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Returns `(field, header text, same-line remainder)` if `line` is a section header.
fn detect_header(line: &str) -> Option<(SectionField, String, String)> {
    let stripped = line
        .trim()
        .trim_start_matches(|c: char| matches!(c, '#' | '*' | '_') || c.is_whitespace())
        .trim_end_matches(|c: char| matches!(c, '*' | '_') || c.is_whitespace());
    if stripped.is_empty() {
        return None;
    }

    for (phrase, field) in SORTED_CATALOG.iter() {
        let Some(head) = stripped.get(..phrase.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(phrase) {
            continue;
        }
        let rest = &stripped[phrase.len()..];
        if rest
            .chars()
            .next()
            .is_some_and(|c| c.is_alphanumeric() || c == '\'')
        {
            continue;
        }

        let rest_trimmed = rest.trim_start_matches(|c: char| matches!(c, '*' | '_') || c == ' ');
        if let Some(after_colon) = rest_trimmed.strip_prefix(':') {
            let remainder = after_colon
                .trim_start_matches(|c: char| matches!(c, '*' | '_'))
                .trim()
                .to_string();
            return Some((*field, head.trim().to_string(), remainder));
        }
        if rest_trimmed.trim().is_empty() {
            return Some((*field, head.trim().to_string(), String::new()));
        }

        // Short title-like lines: "Requirements & Qualifications", "Perks and Benefits".
        let phrase_words = phrase.split_whitespace().count();
        let line_words = stripped.split_whitespace().count();
        if line_words <= phrase_words + 2 && !stripped.ends_with('.') {
            return Some((*field, stripped.trim_end_matches(':').to_string(), String::new()));
        }
    }
    None
}

fn classify_sentences(cleaned: &str) -> Vec<JdSegment> {
    let mut segments: Vec<JdSegment> = Vec::new();
    for sentence in split_sentences(cleaned) {
        let relevant = !NOISE_SENTENCE_RE.is_match(&sentence);
        match segments.last_mut() {
            Some(last) if last.relevant == relevant => {
                last.text.push(' ');
                last.text.push_str(&sentence);
            }
            _ => segments.push(JdSegment {
                field: if relevant {
                    SectionField::RoleOverview
                } else {
                    SectionField::Boilerplate
                },
                header: None,
                relevant,
                text: sentence,
            }),
        }
    }
    segments
}

fn push_segment(segments: &mut Vec<JdSegment>, mut segment: JdSegment) {
    segment.text = segment.text.trim().to_string();
    if !segment.text.is_empty() {
        segments.push(segment);
    }
}

fn append_line(buf: &mut String, line: &str) {
    if !buf.is_empty() {
        buf.push('\n');
    }
    buf.push_str(line);
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRUCTURED_JD: &str = "Backend Engineer\nWe are building credit infrastructure.\n\nResponsibilities:\nBuild APIs in Python.\nOwn services end to end.\n\nRequirements\n5+ years of Python experience.\nExperience with PostgreSQL.\n\nBenefits\nUnlimited PTO and health insurance.\n\nEqual Opportunity Employer\nWe do not discriminate.";

    #[test]
    fn test_headers_split_into_fields() {
        let sections = segment_jd(STRUCTURED_JD);
        assert!(!sections.used_fallback);
        let fields: Vec<SectionField> = sections.segments.iter().map(|s| s.field).collect();
        assert_eq!(
            fields,
            vec![
                SectionField::RoleOverview,
                SectionField::Responsibilities,
                SectionField::Requirements,
                SectionField::Benefits,
                SectionField::EqualOpportunity,
            ]
        );
    }

    #[test]
    fn test_relevant_text_excludes_noise() {
        let sections = segment_jd(STRUCTURED_JD);
        assert!(sections.full_relevant_text.contains("PostgreSQL"));
        assert!(sections.full_relevant_text.contains("credit infrastructure"));
        assert!(!sections.full_relevant_text.contains("PTO"));
        assert!(!sections.full_relevant_text.contains("discriminate"));
    }

    #[test]
    fn test_inline_header_keeps_remainder() {
        let sections = segment_jd("Location: Remote, US\nQualifications: Rust, Go");
        assert_eq!(sections.segments[0].field, SectionField::Location);
        assert_eq!(sections.segments[0].text, "Remote, US");
        assert!(!sections.segments[0].relevant);
        assert_eq!(sections.segments[1].field, SectionField::Requirements);
        assert_eq!(sections.full_relevant_text, "Rust, Go");
    }

    #[test]
    fn test_markdown_header() {
        let sections = segment_jd("## **What You'll Do**\nShip features");
        assert_eq!(sections.segments[0].field, SectionField::Responsibilities);
        assert_eq!(sections.segments[0].header.as_deref(), Some("What You'll Do"));
    }

    #[test]
    fn test_sentence_starting_with_header_word_is_not_header() {
        let sections = segment_jd("Responsibilities include building data pipelines for the team.");
        assert!(sections.used_fallback);
    }

    #[test]
    fn test_fallback_classifies_sentences() {
        let jd = "You will build APIs in Go. The salary range is $120,000 - $150,000. You will mentor engineers.";
        let sections = segment_jd(jd);
        assert!(sections.used_fallback);
        assert_eq!(sections.segments.len(), 3);
        assert!(sections.segments[0].relevant);
        assert!(!sections.segments[1].relevant);
        assert!(sections.full_relevant_text.contains("mentor"));
        assert!(!sections.full_relevant_text.contains("salary"));
    }

    #[test]
    fn test_empty_input() {
        let sections = segment_jd("");
        assert!(sections.segments.is_empty());
        assert_eq!(sections.full_relevant_text, "");
    }

    #[test]
    fn test_phrase_must_end_at_word_boundary() {
        // "Skillset" must not be treated as the "skills" header.
        let sections = segment_jd("Skillset\nRust");
        assert!(sections.used_fallback);
    }
}
