//! Contact-channel detection (email, phone, LinkedIn).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").expect("email regex")
});

/// North-American and international shapes: "(555) 123-4567", "+44 20 7946 0958",
/// "555.123.4567".
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+\d{1,3}[\s.-]?)?(?:\(\d{2,4}\)|\d{2,4})[\s.-]?\d{3,4}[\s.-]?\d{3,4}\b")
        .expect("phone regex")
});

static LINKEDIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/|\blinkedin\b").expect("linkedin regex"));

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactChannels {
    pub email: bool,
    pub phone: bool,
    pub linkedin: bool,
}

impl ContactChannels {
    pub fn detect(text: &str) -> Self {
        Self {
            email: has_email(text),
            phone: has_phone(text),
            linkedin: LINKEDIN_RE.is_match(text),
        }
    }

    pub fn count(&self) -> usize {
        [self.email, self.phone, self.linkedin]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

pub fn has_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

/// Phone-shaped digit runs. Year ranges ("2019 - 2021") are too short to match.
pub fn has_phone(text: &str) -> bool {
    PHONE_RE.find_iter(text).any(|m| {
        let digits = m.as_str().chars().filter(char::is_ascii_digit).count();
        (10..=15).contains(&digits)
    })
}
