//! Rollcall reconciliation engine.
//!
//! Pure engine crate: every entry point takes already-loaded records and
//! catalogs by reference and returns owned results plus diagnostics. Nothing
//! here touches the network or the filesystem, and nothing here fails; bad
//! input degrades to empty output.

pub mod courses;
pub mod departments;
pub mod identifiers;
pub mod instructors;
pub mod pipeline;
pub mod reviews;
pub mod text;

pub use courses::{
    CourseMatcher, CourseReconciliation, MissingIdsReport, find_common_ids, missing_course_ids,
    reconcile_courses, validate_and_refine_ids,
};
pub use departments::{DepartmentMatcher, find_best_department_match};
pub use identifiers::{extract_ids, split_subject, with_subject_variants};
pub use instructors::{
    Ambiguity, Resolution, instructor_id, parse_course_codes, parse_instructor, parse_tags,
    resolve_instructor_id,
};
pub use pipeline::{ReviewDiagnostics, ReviewOutcome, ReviewPipeline};
pub use reviews::{assign_identities, normalize_timestamp, normalize_timestamps, parse_reviews};
pub use text::{longest_common_start, normalize_text};
