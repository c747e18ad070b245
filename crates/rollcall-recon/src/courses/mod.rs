//! Course-code recovery: extract → intersect → validate → aggregate.

pub mod aggregate;
pub mod diagnostics;
pub mod intersect;
pub mod validate;

use std::collections::BTreeSet;

use rollcall_core::{RawCourseRecord, SubjectCatalogIndex};
use tracing::{debug, info};

use crate::identifiers::{extract_ids, with_subject_variants};

pub use aggregate::{CourseAggregator, CourseReconciliation};
pub use diagnostics::{MissingIdsReport, missing_course_ids};
pub use intersect::{DEFAULT_PREFIX_AGREEMENT, find_common_ids};
pub use validate::validate_and_refine_ids;

pub const DEFAULT_MIN_SUBJECT_LETTERS: usize = 2;

/// Runs the course pass over raw listing records.
#[derive(Debug, Clone)]
pub struct CourseMatcher {
    prefix_agreement: usize,
    min_subject_letters: usize,
}

impl Default for CourseMatcher {
    fn default() -> Self {
        Self {
            prefix_agreement: DEFAULT_PREFIX_AGREEMENT,
            min_subject_letters: DEFAULT_MIN_SUBJECT_LETTERS,
        }
    }
}

impl CourseMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix_agreement(mut self, chars: usize) -> Self {
        self.prefix_agreement = chars.max(1);
        self
    }

    pub fn with_min_subject_letters(mut self, letters: usize) -> Self {
        self.min_subject_letters = letters.max(1);
        self
    }

    /// Candidate ids shared by the record's title and summary.
    pub fn candidate_ids(
        &self,
        record: &RawCourseRecord,
        index: &SubjectCatalogIndex,
    ) -> BTreeSet<String> {
        let title_ids =
            with_subject_variants(&extract_ids(&record.title), index, self.min_subject_letters);
        let summary_ids =
            with_subject_variants(&extract_ids(&record.summary), index, self.min_subject_letters);
        intersect::find_common_ids_with(
            &title_ids,
            &summary_ids,
            &record.seed_id,
            self.prefix_agreement,
        )
    }

    /// Validated course ids for one record; empty when nothing survives.
    pub fn resolve_record(
        &self,
        record: &RawCourseRecord,
        index: &SubjectCatalogIndex,
    ) -> BTreeSet<String> {
        let candidates = self.candidate_ids(record, index);
        let valid = validate_and_refine_ids(&candidates, index, &record.seed_id);
        if valid.is_empty() {
            debug!(seed = %record.seed_id, candidates = candidates.len(), "record reconciled to nothing");
        }
        valid
    }

    pub fn reconcile(
        &self,
        records: &[RawCourseRecord],
        index: &SubjectCatalogIndex,
    ) -> CourseReconciliation {
        let mut aggregator = CourseAggregator::new();
        for record in records {
            let ids = self.resolve_record(record, index);
            aggregator.absorb(&ids, record);
        }
        let reconciliation = aggregator.finish();
        info!(
            records = records.len(),
            courses = reconciliation.courses.len(),
            "course reconciliation finished"
        );
        reconciliation
    }
}

/// [`CourseMatcher::reconcile`] with default settings.
pub fn reconcile_courses(
    records: &[RawCourseRecord],
    index: &SubjectCatalogIndex,
) -> CourseReconciliation {
    CourseMatcher::default().reconcile(records, index)
}
