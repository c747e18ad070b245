use std::collections::{BTreeMap, BTreeSet};

use rollcall_core::{RawCourseRecord, ReconciledCourse};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
struct RoleSets {
    teachers: BTreeSet<String>,
    non_editing_teachers: BTreeSet<String>,
    teaching_assistants: BTreeSet<String>,
}

impl RoleSets {
    fn absorb(&mut self, record: &RawCourseRecord) {
        self.teachers.extend(record.teachers.iter().cloned());
        self.non_editing_teachers
            .extend(record.non_editing_teachers.iter().cloned());
        self.teaching_assistants
            .extend(record.teaching_assistants.iter().cloned());
    }
}

/// Aggregation state for one reconciliation pass.
///
/// Owned by the caller, fed one record at a time, consumed by [`finish`].
/// Role sets are unions, so feeding order never changes the result.
///
/// [`finish`]: CourseAggregator::finish
#[derive(Debug, Default)]
pub struct CourseAggregator {
    courses: BTreeMap<String, RoleSets>,
}

impl CourseAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `record`'s roles into every course in `ids`, creating entries as needed.
    pub fn absorb(&mut self, ids: &BTreeSet<String>, record: &RawCourseRecord) {
        for id in ids {
            self.courses.entry(id.clone()).or_default().absorb(record);
        }
    }

    pub fn finish(self) -> CourseReconciliation {
        let used_ids: BTreeSet<String> = self.courses.keys().cloned().collect();
        let courses = self
            .courses
            .into_iter()
            .map(|(course_id, roles)| ReconciledCourse {
                course_id,
                teachers: roles.teachers.into_iter().collect(),
                non_editing_teachers: roles.non_editing_teachers.into_iter().collect(),
                teaching_assistants: roles.teaching_assistants.into_iter().collect(),
            })
            .collect();
        CourseReconciliation { courses, used_ids }
    }
}

/// Result of a course pass: courses sorted by id, plus every id that was hit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CourseReconciliation {
    pub courses: Vec<ReconciledCourse>,
    pub used_ids: BTreeSet<String>,
}

impl CourseReconciliation {
    pub fn get(&self, course_id: &str) -> Option<&ReconciledCourse> {
        self.courses
            .binary_search_by(|c| c.course_id.as_str().cmp(course_id))
            .ok()
            .map(|idx| &self.courses[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_union_across_records() {
        let mut agg = CourseAggregator::new();
        agg.absorb(
            &ids(&["COMP248"]),
            &RawCourseRecord::new("COMP248", "", "").with_teachers(["B", "A"]),
        );
        let mut second = RawCourseRecord::new("COMP248", "", "").with_teachers(["A", "C"]);
        second.teaching_assistants = vec!["T".to_string()];
        agg.absorb(&ids(&["COMP248"]), &second);

        let out = agg.finish();
        assert_eq!(out.courses.len(), 1);
        let course = out.get("COMP248").unwrap();
        assert_eq!(course.teachers, vec!["A", "B", "C"]);
        assert_eq!(course.teaching_assistants, vec!["T"]);
        assert!(course.non_editing_teachers.is_empty());
    }

    #[test]
    fn test_one_record_many_ids() {
        let mut agg = CourseAggregator::new();
        agg.absorb(
            &ids(&["SOEN490", "COMP490"]),
            &RawCourseRecord::new("SOEN490", "", "").with_teachers(["X"]),
        );
        let out = agg.finish();
        let listed: Vec<_> = out.courses.iter().map(|c| c.course_id.as_str()).collect();
        assert_eq!(listed, vec!["COMP490", "SOEN490"]);
        assert_eq!(out.used_ids, ids(&["COMP490", "SOEN490"]));
    }

    #[test]
    fn test_empty_ids_contribute_nothing() {
        let mut agg = CourseAggregator::new();
        agg.absorb(&BTreeSet::new(), &RawCourseRecord::new("X1", "", "").with_teachers(["Y"]));
        assert_eq!(agg.finish(), CourseReconciliation::default());
    }
}
