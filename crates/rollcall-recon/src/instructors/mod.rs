pub mod parse;
pub mod resolver;

pub use parse::{instructor_id, parse_course_codes, parse_instructor, parse_instructor_with, parse_tags};
pub use resolver::{Ambiguity, Resolution, resolve_instructor_id};
