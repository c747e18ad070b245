//! Professor payloads → instructors + finalized reviews.

use chrono::NaiveDate;
use rollcall_core::{
    DepartmentCatalog, InstructorClusters, InstructorRecord, ProfessorPayload, ReviewRecord,
    SubjectCatalogIndex,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::departments::DepartmentMatcher;
use crate::instructors::{Ambiguity, parse_instructor_with};
use crate::reviews::{assign_identities_with, normalize_timestamps, parse_reviews};

pub const DEFAULT_USER_ID_PREFIX: &str = "rate_my_professor_";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewDiagnostics {
    pub ambiguities: Vec<Ambiguity>,
    /// Payloads whose node was `null`.
    pub empty_payloads: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewOutcome {
    /// Sorted by id.
    pub instructors: Vec<InstructorRecord>,
    /// In payload order.
    pub reviews: Vec<ReviewRecord>,
    pub diagnostics: ReviewDiagnostics,
}

#[derive(Debug, Clone)]
pub struct ReviewPipeline {
    departments: DepartmentMatcher,
    user_id_prefix: String,
}

impl Default for ReviewPipeline {
    fn default() -> Self {
        Self {
            departments: DepartmentMatcher::default(),
            user_id_prefix: DEFAULT_USER_ID_PREFIX.to_string(),
        }
    }
}

impl ReviewPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_department_matcher(mut self, matcher: DepartmentMatcher) -> Self {
        self.departments = matcher;
        self
    }

    pub fn with_user_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_id_prefix = prefix.into();
        self
    }

    pub fn run(
        &self,
        payloads: &[ProfessorPayload],
        index: &SubjectCatalogIndex,
        departments: &DepartmentCatalog,
        clusters: &InstructorClusters,
        cutoff: NaiveDate,
    ) -> ReviewOutcome {
        self.run_with(payloads, index, departments, clusters, cutoff, Uuid::new_v4)
    }

    /// [`run`](Self::run) with a caller-supplied user-id source.
    pub fn run_with<F>(
        &self,
        payloads: &[ProfessorPayload],
        index: &SubjectCatalogIndex,
        departments: &DepartmentCatalog,
        clusters: &InstructorClusters,
        cutoff: NaiveDate,
        next_id: F,
    ) -> ReviewOutcome
    where
        F: FnMut() -> Uuid,
    {
        let mut outcome = ReviewOutcome::default();

        for payload in payloads {
            let Some(node) = payload.node() else {
                outcome.diagnostics.empty_payloads += 1;
                continue;
            };
            let instructor = parse_instructor_with(node, index, departments, &self.departments);
            outcome.reviews.extend(parse_reviews(
                &node.ratings.edges,
                &instructor.courses,
                &instructor.id,
                cutoff,
            ));
            outcome.instructors.push(instructor);
        }

        outcome.diagnostics.ambiguities =
            assign_identities_with(&mut outcome.reviews, clusters, &self.user_id_prefix, next_id);
        normalize_timestamps(&mut outcome.reviews);
        outcome.instructors.sort_by(|a, b| a.id.cmp(&b.id));

        info!(
            instructors = outcome.instructors.len(),
            reviews = outcome.reviews.len(),
            ambiguous = outcome.diagnostics.ambiguities.len(),
            "review pipeline finished"
        );
        outcome
    }
}
