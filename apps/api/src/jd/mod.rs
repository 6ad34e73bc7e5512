pub mod dictionary;
pub mod metadata;
pub mod processor;
pub mod segmenter;
pub mod skills;

pub use processor::{process_jd, JdValidationError, ProcessedJd};
