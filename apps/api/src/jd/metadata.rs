//! Structured JD metadata: years of experience, degree, certifications.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::jd::dictionary::CERTIFICATIONS;
use crate::text::boundary::contains_term;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearsRequirement {
    pub min: u32,
    pub area: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Associate,
    Bachelor,
    Master,
    Doctorate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeRequirement {
    pub level: DegreeLevel,
    pub field: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JdMetadata {
    pub years_of_experience: Vec<YearsRequirement>,
    pub degree: Option<DegreeRequirement>,
    pub certifications: Vec<String>,
}

static YEARS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,2})\s*\+?\s*(?:(?:-|to)\s*\d{1,2}\s*\+?\s*)?(?:years?|yrs?)\b\.?([^.;\n()]{0,60})",
    )
    .expect("years regex")
});

static DEGREE_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(ph\.?\s?d|doctorate|doctoral|master(?:'s|s)?|mba|bachelor(?:'s|s)?|associate(?:'s|s)?\s+degree)")
        .expect("degree regex")
});

/// Abbreviated degrees are only trusted in capitals ("BS in", not "ms office").
static DEGREE_ABBREV_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(B\.S\.?|BS|B\.A\.?|BA|M\.S\.?|MS)(?:\s*/\s*(?:MS|M\.S\.?|PhD))?\s+(?:degree\s+)?(?:in|of)\b")
        .expect("degree abbreviation regex")
});

static FIELD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[.']?\s*(?:degree\s+)?(?:/\s*\S+\s+)?(?:degree\s+)?(?:in|of)\s+([A-Za-z][A-Za-z &/-]{1,60})")
        .expect("degree field regex")
});

/// Leading words that carry no subject ("of professional experience in ...").
const AREA_LEAD_FILLER: &[&str] = &[
    "of", "professional", "relevant", "hands-on", "industry", "working", "practical",
    "commercial", "proven", "direct", "progressive", "experience", "in", "with", "as", "a", "an",
    "the", "building", "developing", "using", "doing",
];

/// Words that end an area phrase.
const AREA_STOP: &[&str] = &[
    "experience", "and", "or", "required", "preferred", "is", "are", "plus", "with", "including",
    "such", "at", "for", "to", "working", "in", "a", "an", "the", "of", "as", "ideally",
];

const FIELD_STOP: &[&str] = &[
    "or", "and", "preferred", "required", "related", "equivalent", "plus", "with", "from", "is",
];

pub fn extract_metadata(text: &str) -> JdMetadata {
    JdMetadata {
        years_of_experience: extract_years(text),
        degree: extract_degree(text),
        certifications: extract_certifications(text),
    }
}

/// "N+ years (of) <area>" requirements, deduplicated in document order.
pub fn extract_years(text: &str) -> Vec<YearsRequirement> {
    let mut out: Vec<YearsRequirement> = Vec::new();
    for caps in YEARS_RE.captures_iter(text) {
        let Some(min) = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok()) else {
            continue;
        };
        if min == 0 || min > 40 {
            continue;
        }
        let area = caps.get(2).and_then(|m| area_from_tail(m.as_str()));
        let requirement = YearsRequirement { min, area };
        if !out.contains(&requirement) {
            out.push(requirement);
        }
    }
    out
}

fn area_from_tail(tail: &str) -> Option<String> {
    let words: Vec<&str> = tail
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .filter(|w| !w.is_empty())
        .collect();

    let start = words
        .iter()
        .position(|w| !AREA_LEAD_FILLER.contains(&w.to_lowercase().as_str()))?;

    let area: Vec<&str> = words[start..]
        .iter()
        .take_while(|w| !AREA_STOP.contains(&w.to_lowercase().as_str()))
        .take(4)
        .copied()
        .collect();

    if area.is_empty() {
        None
    } else {
        Some(area.join(" "))
    }
}

/// Degree requirement from the first degree mention in the text.
pub fn extract_degree(text: &str) -> Option<DegreeRequirement> {
    let word_hit = DEGREE_WORD_RE
        .find_iter(text)
        .find(|m| is_degree_mention(text, m.as_str(), m.end()));
    let abbrev_hit = DEGREE_ABBREV_RE.find(text);

    let hit = match (word_hit, abbrev_hit) {
        (Some(w), Some(a)) => {
            if a.start() < w.start() {
                a
            } else {
                w
            }
        }
        (Some(w), None) => w,
        (None, Some(a)) => a,
        (None, None) => return None,
    };

    let level = degree_level(hit.as_str())?;
    let tail_start = if hit.as_str().to_ascii_lowercase().ends_with(" in")
        || hit.as_str().to_ascii_lowercase().ends_with(" of")
    {
        hit.end() - 3
    } else {
        hit.end()
    };
    let field = FIELD_RE
        .captures(&text[tail_start..])
        .and_then(|c| c.get(1))
        .and_then(|m| trim_field(m.as_str()));

    Some(DegreeRequirement { level, field })
}

/// "Master" alone is only a degree when followed by degree/in/of ("Scrum Master" is not).
fn is_degree_mention(text: &str, matched: &str, end: usize) -> bool {
    let lower = matched.to_ascii_lowercase();
    if !lower.starts_with("master") || lower.ends_with('s') {
        return true;
    }
    let after = text[end..].trim_start().to_ascii_lowercase();
    after.starts_with("degree") || after.starts_with("in ") || after.starts_with("of ")
}

fn degree_level(raw: &str) -> Option<DegreeLevel> {
    let lower = raw.to_ascii_lowercase();
    let lower = lower.trim_start();
    if lower.starts_with("ph") || lower.starts_with("doctor") {
        Some(DegreeLevel::Doctorate)
    } else if lower.starts_with("master") || lower.starts_with("mba") || lower.starts_with("m.s") || lower.starts_with("ms") {
        Some(DegreeLevel::Master)
    } else if lower.starts_with("bachelor") || lower.starts_with("b.") || lower.starts_with("bs") || lower.starts_with("ba") {
        Some(DegreeLevel::Bachelor)
    } else if lower.starts_with("associate") {
        Some(DegreeLevel::Associate)
    } else {
        None
    }
}

fn trim_field(raw: &str) -> Option<String> {
    let words: Vec<&str> = raw
        .split_whitespace()
        .take_while(|w| !FIELD_STOP.contains(&w.to_lowercase().as_str()))
        .collect();
    let field = words.join(" ");
    let field = field.trim_matches(|c: char| c == '/' || c == '-' || c == '&' || c.is_whitespace());
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

/// Certification dictionary hits; a name contained in a longer hit is dropped
/// ("AWS Certified" under "AWS Certified Solutions Architect").
pub fn extract_certifications(text: &str) -> Vec<String> {
    let hits: Vec<&str> = CERTIFICATIONS
        .iter()
        .copied()
        .filter(|cert| contains_term(text, cert))
        .collect();

    let mut certs: Vec<String> = hits
        .iter()
        .filter(|cert| {
            !hits.iter().any(|other| {
                other.len() > cert.len() && other.to_lowercase().contains(&cert.to_lowercase())
            })
        })
        .map(|c| c.to_string())
        .collect();
    certs.sort();
    certs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_with_area() {
        let years = extract_years("5+ years of experience with Python. 3+ years of software engineering experience");
        assert_eq!(
            years,
            vec![
                YearsRequirement { min: 5, area: Some("Python".to_string()) },
                YearsRequirement { min: 3, area: Some("software engineering".to_string()) },
            ]
        );
    }

    #[test]
    fn test_years_without_area() {
        let years = extract_years("Minimum 4 years of experience.");
        assert_eq!(years, vec![YearsRequirement { min: 4, area: None }]);
    }

    #[test]
    fn test_years_range_uses_lower_bound() {
        let years = extract_years("2-4 years building distributed systems");
        assert_eq!(years[0].min, 2);
        assert_eq!(years[0].area.as_deref(), Some("distributed systems"));
    }

    #[test]
    fn test_degree_with_field() {
        let degree = extract_degree("Bachelor's degree in Computer Science or related field").unwrap();
        assert_eq!(degree.level, DegreeLevel::Bachelor);
        assert_eq!(degree.field.as_deref(), Some("Computer Science"));
    }

    #[test]
    fn test_degree_abbreviation() {
        let degree = extract_degree("BS in Electrical Engineering required").unwrap();
        assert_eq!(degree.level, DegreeLevel::Bachelor);
        assert_eq!(degree.field.as_deref(), Some("Electrical Engineering"));
    }

    #[test]
    fn test_degree_ignores_ms_office() {
        assert!(extract_degree("Comfortable with MS Office and ms teams").is_none());
    }

    #[test]
    fn test_scrum_master_is_not_a_degree() {
        assert!(extract_degree("Scrum Master certification is a plus").is_none());
        let degree = extract_degree("Master degree in Statistics").unwrap();
        assert_eq!(degree.level, DegreeLevel::Master);
    }

    #[test]
    fn test_phd() {
        let degree = extract_degree("PhD in Machine Learning preferred").unwrap();
        assert_eq!(degree.level, DegreeLevel::Doctorate);
        assert_eq!(degree.field.as_deref(), Some("Machine Learning"));
    }

    #[test]
    fn test_certifications_drop_contained_names() {
        let certs = extract_certifications("AWS Certified Solutions Architect and PMP preferred");
        assert_eq!(certs, vec!["AWS Certified Solutions Architect", "PMP"]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extract_metadata(""), JdMetadata::default());
    }
}
