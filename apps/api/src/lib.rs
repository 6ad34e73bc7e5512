//! Resume and job-description analysis: JD processing, ATS-style scoring,
//! cover-letter scoring and post-generation validation of rewritten drafts.

pub mod config;
pub mod errors;
pub mod jd;
pub mod resume;
pub mod routes;
pub mod rules;
pub mod scoring;
pub mod state;
pub mod text;
pub mod validation;
