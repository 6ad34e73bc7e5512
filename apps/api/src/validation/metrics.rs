//! Fabricated-metric detector.
//!
//! Extracts percentages, dollar amounts (K/M/B suffixes expanded) and counted
//! nouns ("12 engineers", "team of 6") from both texts. A draft value with no
//! same-kind, same-value counterpart in the original is flagged; if it sits
//! within 15% of an original value of the same kind it is reported as a
//! nudged variant of that value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationResult;

/// Relative distance within which a changed value counts as nudged.
pub const NUDGE_TOLERANCE: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    Percentage,
    Dollar,
    Count,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub text: String,
    pub kind: MetricKind,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedMetric {
    pub text: String,
    pub kind: MetricKind,
    pub value: f64,
    /// Original metric this one appears to be derived from.
    pub nudged_from: Option<String>,
}

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s?%").expect("percentage regex"));

static DOLLAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\$\s?(\d{1,3}(?:,\d{3})+|\d+)(\.\d+)?(?:\s?(k|mm|m|b|bn|thousand|million|billion)\b)?")
        .expect("dollar regex")
});

static COUNT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(\d{1,3}(?:,\d{3})+|\d+)\+?\s+(?:[a-z-]+\s)?(team members|engineers|developers|people|users|customers|clients|employees|reports|direct reports|stakeholders|projects|services|countries|teams|members|products|applications|microservices|servers|markets|partners|students|hires|interns|analysts|designers|stores|locations)\b|\bteams? of (\d+)\b",
    )
    .expect("count regex")
});

fn parse_number(digits: &str) -> Option<f64> {
    digits.replace(',', "").parse::<f64>().ok()
}

fn suffix_multiplier(suffix: &str) -> f64 {
    match suffix.to_ascii_lowercase().as_str() {
        "k" | "thousand" => 1e3,
        "m" | "mm" | "million" => 1e6,
        "b" | "bn" | "billion" => 1e9,
        _ => 1.0,
    }
}

/// Every metric mention in document order of kind, then position.
pub fn extract_metrics(text: &str) -> Vec<Metric> {
    let mut metrics = Vec::new();

    for caps in PERCENT_RE.captures_iter(text) {
        let (Some(whole), Some(value)) = (caps.get(0), caps.get(1).and_then(|m| parse_number(m.as_str()))) else {
            continue;
        };
        metrics.push(Metric {
            text: whole.as_str().to_string(),
            kind: MetricKind::Percentage,
            value,
        });
    }

    for caps in DOLLAR_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(int) = caps.get(1).and_then(|m| parse_number(m.as_str())) else {
            continue;
        };
        let frac = caps
            .get(2)
            .and_then(|m| format!("0{}", m.as_str()).parse::<f64>().ok())
            .unwrap_or(0.0);
        let multiplier = caps.get(3).map_or(1.0, |m| suffix_multiplier(m.as_str()));
        metrics.push(Metric {
            text: whole.as_str().trim_end().to_string(),
            kind: MetricKind::Dollar,
            value: (int + frac) * multiplier,
        });
    }

    for caps in COUNT_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        let Some(value) = caps
            .get(1)
            .or_else(|| caps.get(3))
            .and_then(|m| parse_number(m.as_str()))
        else {
            continue;
        };
        metrics.push(Metric {
            text: whole.as_str().to_string(),
            kind: MetricKind::Count,
            value,
        });
    }

    metrics
}

fn same_value(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9 * a.abs().max(1.0)
}

pub fn detect_fabricated_metrics(original: &str, draft: &str) -> ValidationResult<FlaggedMetric> {
    let original_metrics = extract_metrics(original);
    let mut result: ValidationResult<FlaggedMetric> = ValidationResult::default();

    for metric in extract_metrics(draft) {
        let known = original_metrics
            .iter()
            .any(|o| o.kind == metric.kind && same_value(o.value, metric.value));
        let already_flagged = result
            .flagged_items
            .iter()
            .any(|f| f.kind == metric.kind && same_value(f.value, metric.value));
        if known || already_flagged {
            continue;
        }

        let nudged_from = original_metrics
            .iter()
            .filter(|o| o.kind == metric.kind && o.value != 0.0)
            .map(|o| (o, (metric.value - o.value).abs() / o.value.abs()))
            .filter(|(_, distance)| *distance <= NUDGE_TOLERANCE)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(o, _)| o.text.clone());

        match &nudged_from {
            Some(source) => result.warnings.push(format!(
                "\"{}\" looks like a nudged version of \"{}\" from the original",
                metric.text, source
            )),
            None => result.warnings.push(format!(
                "\"{}\" does not appear in the original and may be fabricated",
                metric.text
            )),
        }
        result.flagged_items.push(FlaggedMetric {
            text: metric.text,
            kind: metric.kind,
            value: metric.value,
            nudged_from,
        });
    }
    result
}
