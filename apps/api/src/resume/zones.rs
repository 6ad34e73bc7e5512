//! Resume Zone Parser: splits resume text into weighted zones.
//!
//! The first 1–5 non-empty lines before any heading form the headline. Any
//! further pre-heading lines are kept as a summary-zone "preamble" so no text
//! is dropped. Content after a heading accumulates until the next heading.

use serde::{Deserialize, Serialize};

use crate::resume::headings::{classify_heading, strip_heading_markup};

const MAX_HEADLINE_LINES: usize = 5;

pub const HEADLINE_SECTION: &str = "headline";
pub const PREAMBLE_SECTION: &str = "preamble";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Headline,
    Summary,
    Skills,
    Experience,
    Education,
}

impl Zone {
    pub const ALL: [Zone; 5] = [
        Zone::Headline,
        Zone::Summary,
        Zone::Skills,
        Zone::Experience,
        Zone::Education,
    ];

    /// 1 = headline … 5 = education.
    pub fn number(self) -> u8 {
        match self {
            Zone::Headline => 1,
            Zone::Summary => 2,
            Zone::Skills => 3,
            Zone::Experience => 4,
            Zone::Education => 5,
        }
    }

    /// Keyword placement weight.
    pub fn multiplier(self) -> f64 {
        match self {
            Zone::Headline => 3.0,
            Zone::Summary => 2.0,
            Zone::Skills => 1.5,
            Zone::Experience => 1.0,
            Zone::Education => 0.75,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSection {
    pub name: String,
    pub content: String,
    pub zone: Zone,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    /// Document order.
    pub sections: Vec<ResumeSection>,
    /// Zone of every recognised heading, in document order.
    pub headings: Vec<Zone>,
}

impl ParsedResume {
    /// All content of one zone, newline-joined.
    pub fn zone_text(&self, zone: Zone) -> String {
        self.sections
            .iter()
            .filter(|s| s.zone == zone)
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn headline(&self) -> &str {
        self.sections
            .iter()
            .find(|s| s.name == HEADLINE_SECTION)
            .map_or("", |s| s.content.as_str())
    }

    /// Distinct zones opened by a heading.
    pub fn heading_zone_count(&self) -> usize {
        let mut zones = self.headings.clone();
        zones.sort();
        zones.dedup();
        zones.len()
    }
}

pub fn parse_resume(text: &str) -> ParsedResume {
    let mut preamble: Vec<&str> = Vec::new();
    let mut sections: Vec<ResumeSection> = Vec::new();
    let mut headings: Vec<Zone> = Vec::new();
    let mut current: Option<ResumeSection> = None;

    for line in text.lines() {
        if let Some(zone) = classify_heading(line) {
            if let Some(done) = current.take() {
                sections.push(finish(done));
            }
            headings.push(zone);
            current = Some(ResumeSection {
                name: strip_heading_markup(line).to_string(),
                content: String::new(),
                zone,
            });
            continue;
        }
        match current.as_mut() {
            Some(section) => {
                if !section.content.is_empty() {
                    section.content.push('\n');
                }
                section.content.push_str(line);
            }
            None => {
                if !line.trim().is_empty() {
                    preamble.push(line.trim());
                }
            }
        }
    }
    if let Some(done) = current.take() {
        sections.push(finish(done));
    }

    let mut leading = Vec::with_capacity(2);
    let split = preamble.len().min(MAX_HEADLINE_LINES);
    if split > 0 {
        leading.push(ResumeSection {
            name: HEADLINE_SECTION.to_string(),
            content: preamble[..split].join("\n"),
            zone: Zone::Headline,
        });
    }
    if preamble.len() > split {
        leading.push(ResumeSection {
            name: PREAMBLE_SECTION.to_string(),
            content: preamble[split..].join("\n"),
            zone: Zone::Summary,
        });
    }
    leading.extend(sections);

    ParsedResume {
        sections: leading,
        headings,
    }
}

fn finish(mut section: ResumeSection) -> ResumeSection {
    section.content = section.content.trim().to_string();
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\nSenior Backend Engineer | Rust, Python\njane@example.com | (555) 123-4567\n\n\
## Summary\nBackend engineer with 8 years building payment systems.\n\n\
SKILLS\nRust, Python, PostgreSQL, AWS\n\n\
**Professional Experience**\nAcme Corp — Staff Engineer\nJan 2020 – Present\n- Led migration to Rust\n\n\
Education\nB.S. Computer Science, 2014";

    #[test]
    fn test_zones_in_document_order() {
        let parsed = parse_resume(RESUME);
        let zones: Vec<Zone> = parsed.sections.iter().map(|s| s.zone).collect();
        assert_eq!(
            zones,
            vec![Zone::Headline, Zone::Summary, Zone::Skills, Zone::Experience, Zone::Education]
        );
        assert_eq!(parsed.headings.len(), 4);
        assert_eq!(parsed.heading_zone_count(), 4);
    }

    #[test]
    fn test_headline_is_pre_heading_lines() {
        let parsed = parse_resume(RESUME);
        assert!(parsed.headline().starts_with("Jane Doe"));
        assert!(parsed.headline().contains("Senior Backend Engineer"));
    }

    #[test]
    fn test_section_content_accumulates() {
        let parsed = parse_resume(RESUME);
        let exp = parsed.zone_text(Zone::Experience);
        assert!(exp.contains("Acme Corp"));
        assert!(exp.contains("Led migration"));
        assert!(!exp.contains("B.S."));
        assert_eq!(parsed.sections[3].name, "Professional Experience");
    }

    #[test]
    fn test_long_preamble_spills_into_summary() {
        let text = "a\nb\nc\nd\ne\nf\ng\nSkills\nRust";
        let parsed = parse_resume(text);
        assert_eq!(parsed.headline(), "a\nb\nc\nd\ne");
        assert_eq!(parsed.sections[1].name, PREAMBLE_SECTION);
        assert_eq!(parsed.sections[1].content, "f\ng");
        assert_eq!(parsed.zone_text(Zone::Skills), "Rust");
    }

    #[test]
    fn test_multipliers_descend_by_zone() {
        let weights: Vec<f64> = Zone::ALL.iter().map(|z| z.multiplier()).collect();
        assert_eq!(weights, vec![3.0, 2.0, 1.5, 1.0, 0.75]);
        assert_eq!(Zone::Education.number(), 5);
    }

    #[test]
    fn test_empty_resume() {
        let parsed = parse_resume("");
        assert!(parsed.sections.is_empty());
        assert_eq!(parsed.headline(), "");
        assert_eq!(parsed.heading_zone_count(), 0);
    }
}
