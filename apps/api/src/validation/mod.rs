//! Post-generation validation: compares an original text with a generated draft
//! and reports what the draft invented or inflated.

pub mod feedback;
pub mod gaps;
pub mod headings;
pub mod metrics;
pub mod phrases;
pub mod scope;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use feedback::{verify_feedback, verify_feedback_history, FeedbackVerification};
pub use gaps::{detect_employment_gaps, EmploymentGap};
pub use headings::{validate_headings, FlaggedHeading};
pub use metrics::{detect_fabricated_metrics, FlaggedMetric};
pub use phrases::detect_new_phrases;
pub use scope::{detect_scope_inflation, ScopeFlag};

/// Shared shape of every checker's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult<T> {
    pub flagged_items: Vec<T>,
    pub warnings: Vec<String>,
}

impl<T> Default for ValidationResult<T> {
    fn default() -> Self {
        Self {
            flagged_items: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

impl<T> ValidationResult<T> {
    pub fn passed(&self) -> bool {
        self.flagged_items.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub warning_count: usize,
    pub fabricated_metrics: ValidationResult<FlaggedMetric>,
    pub new_phrases: ValidationResult<String>,
    pub scope_inflation: ValidationResult<ScopeFlag>,
    pub heading_compliance: ValidationResult<FlaggedHeading>,
    pub employment_gaps: ValidationResult<EmploymentGap>,
}

/// Runs every draft-vs-original checker. Heading and gap checks look at the draft only.
pub fn run_validation_suite(original: &str, draft: &str) -> ValidationReport {
    let fabricated_metrics = detect_fabricated_metrics(original, draft);
    let new_phrases = detect_new_phrases(original, draft);
    let scope_inflation = detect_scope_inflation(original, draft);
    let heading_compliance = validate_headings(draft);
    let employment_gaps = detect_employment_gaps(draft);

    let passed = fabricated_metrics.passed()
        && new_phrases.passed()
        && scope_inflation.passed()
        && heading_compliance.passed()
        && employment_gaps.passed();
    let warning_count = fabricated_metrics.warnings.len()
        + new_phrases.warnings.len()
        + scope_inflation.warnings.len()
        + heading_compliance.warnings.len()
        + employment_gaps.warnings.len();

    info!(
        passed,
        warning_count,
        metrics = fabricated_metrics.flagged_items.len(),
        phrases = new_phrases.flagged_items.len(),
        scope = scope_inflation.flagged_items.len(),
        headings = heading_compliance.flagged_items.len(),
        gaps = employment_gaps.flagged_items.len(),
        "Validation suite complete"
    );

    ValidationReport {
        passed,
        warning_count,
        fabricated_metrics,
        new_phrases,
        scope_inflation,
        heading_compliance,
        employment_gaps,
    }
}
