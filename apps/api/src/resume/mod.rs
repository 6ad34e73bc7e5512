pub mod headings;
pub mod zones;

pub use zones::{parse_resume, ParsedResume, ResumeSection, Zone};
