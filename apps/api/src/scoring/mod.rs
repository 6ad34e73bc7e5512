pub mod ats;
pub mod cover_letter;
pub mod experience;
pub mod hard_skills;
pub mod parsing_gate;
pub mod recommendations;
pub mod structure;
pub mod supplementary;
pub mod title_alignment;

pub use ats::{score_resume, AtsScoreResult, AtsScorer, ResumeScorer};
pub use cover_letter::{score_cover_letter, CoverLetterScoreResult};

/// Rounds a score to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
