pub mod extract;
pub mod subject;

pub use extract::{extract_ids, with_subject_variants};
pub use subject::split_subject;
