// Text primitives shared by JD processing, resume scoring and draft validation.
// Everything here is a pure function of its input.

pub mod boundary;
pub mod contact;
pub mod dates;
pub mod matcher;
pub mod normalizer;
pub mod synonyms;
pub mod tokens;
