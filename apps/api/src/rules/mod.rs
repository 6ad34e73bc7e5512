//! Writing-rule files and the prompts built from them.

pub mod cache;
pub mod prompt;

pub use cache::{RuleCache, RuleError, RuleFile};
pub use prompt::{build_cover_letter_prompt, build_resume_prompt};
