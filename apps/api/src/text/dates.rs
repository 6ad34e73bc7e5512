//! Date extraction: month/year mentions and employment ranges.
//!
//! Unparseable fragments are skipped, never reported as errors.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Surface format of a date mention. Used for the "one consistent format" checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// "January 2020"
    MonthFull,
    /// "Jan 2020" / "Sept. 2020"
    MonthAbbrev,
    /// "01/2020"
    Numeric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateMention {
    /// First day of the mentioned month.
    pub date: NaiveDate,
    pub format: DateFormat,
    /// Byte offset in the source text.
    pub offset: usize,
    pub raw: String,
}

/// End of an employment range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "date")]
pub enum RangeEnd {
    Date(NaiveDate),
    Present,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRange {
    pub start: NaiveDate,
    pub end: RangeEnd,
    pub offset: usize,
    pub raw: String,
}

impl EmploymentRange {
    /// Month index of the end; `Present` sorts after every real month.
    pub fn end_index(&self) -> i32 {
        match self.end {
            RangeEnd::Date(d) => month_index(d),
            RangeEnd::Present => i32::MAX,
        }
    }

    pub fn start_index(&self) -> i32 {
        month_index(self.start)
    }
}

const MONTH_PATTERN: &str = r"(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?";

static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b{MONTH_PATTERN},?\s+((?:19|20)\d{{2}})\b"))
        .expect("month-year regex")
});

static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(0?[1-9]|1[0-2])/((?:19|20)\d{2})\b").expect("numeric date regex")
});

static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b{MONTH_PATTERN},?\s+((?:19|20)\d{{2}})\s*(?:-|–|—|to)\s*(?:{MONTH_PATTERN},?\s+((?:19|20)\d{{2}})|(present|current|now))\b"
    ))
    .expect("employment range regex")
});

static NUMERIC_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(0?[1-9]|1[0-2])/((?:19|20)\d{2})\s*(?:-|–|—|to)\s*(?:(0?[1-9]|1[0-2])/((?:19|20)\d{2})|(present|current|now))\b",
    )
    .expect("numeric employment range regex")
});

/// Month/year and MM/YYYY mentions in document order.
pub fn extract_dates(text: &str) -> Vec<DateMention> {
    let mut mentions: Vec<DateMention> = Vec::new();

    for caps in MONTH_YEAR_RE.captures_iter(text) {
        let (Some(whole), Some(month), Some(year)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let Some(date) = parse_month_name(month.as_str())
            .and_then(|m| ymd(year.as_str(), m))
        else {
            continue;
        };
        let format = if is_full_month_name(month.as_str()) {
            DateFormat::MonthFull
        } else {
            DateFormat::MonthAbbrev
        };
        mentions.push(DateMention {
            date,
            format,
            offset: whole.start(),
            raw: whole.as_str().to_string(),
        });
    }

    for caps in NUMERIC_RE.captures_iter(text) {
        let (Some(whole), Some(month), Some(year)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        let Some(date) = month.as_str().parse::<u32>().ok().and_then(|m| ymd(year.as_str(), m))
        else {
            continue;
        };
        mentions.push(DateMention {
            date,
            format: DateFormat::Numeric,
            offset: whole.start(),
            raw: whole.as_str().to_string(),
        });
    }

    mentions.sort_by_key(|m| m.offset);
    mentions
}

/// "Month YYYY – Month YYYY", "MM/YYYY – MM/YYYY" and open-ended "… – Present"
/// ranges in document order.
pub fn extract_employment_ranges(text: &str) -> Vec<EmploymentRange> {
    let mut ranges: Vec<EmploymentRange> = RANGE_RE
        .captures_iter(text)
        .filter_map(|caps| range_from(&caps, parse_month_name))
        .chain(
            NUMERIC_RANGE_RE
                .captures_iter(text)
                .filter_map(|caps| range_from(&caps, |m| m.parse::<u32>().ok())),
        )
        .collect();
    ranges.sort_by_key(|r| r.offset);
    ranges
}

/// Groups: 1 start month, 2 start year, 3 end month, 4 end year, 5 open end.
fn range_from(caps: &regex::Captures<'_>, month: impl Fn(&str) -> Option<u32>) -> Option<EmploymentRange> {
    let whole = caps.get(0)?;
    let start = ymd(caps.get(2)?.as_str(), month(caps.get(1)?.as_str())?)?;
    let end = if caps.get(5).is_some() {
        RangeEnd::Present
    } else {
        RangeEnd::Date(ymd(caps.get(4)?.as_str(), month(caps.get(3)?.as_str())?)?)
    };
    Some(EmploymentRange {
        start,
        end,
        offset: whole.start(),
        raw: whole.as_str().to_string(),
    })
}

/// Months since year 0, for arithmetic between month-granular dates.
pub fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// "December 2021"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

fn ymd(year: &str, month: u32) -> Option<NaiveDate> {
    let year = year.parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn parse_month_name(name: &str) -> Option<u32> {
    let lower = name.trim_end_matches('.').to_ascii_lowercase();
    let prefix = lower.get(..3)?;
    let month = match prefix {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

fn is_full_month_name(name: &str) -> bool {
    const FULL: &[&str] = &[
        "january", "february", "march", "april", "may", "june", "july", "august", "september",
        "october", "november", "december",
    ];
    let lower = name.trim_end_matches('.').to_ascii_lowercase();
    FULL.contains(&lower.as_str())
}
