use std::collections::BTreeSet;

use rollcall_core::{
    CourseCodeEntry, CourseRef, DepartmentCatalog, InstructorRecord, ProfessorNode, RatingTag,
    SubjectCatalogIndex,
};

use crate::departments::DepartmentMatcher;

/// `"Ana  Maria" "Lopez"` → `ana-maria-lopez`.
pub fn instructor_id(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Match the site's course names against the catalog index.
///
/// Subjects are scanned in index order. The first subject whose name starts
/// the course name and has a catalog number continuing it wins; later
/// subjects are not considered for that entry. Repeats are dropped.
pub fn parse_course_codes(codes: &[CourseCodeEntry], index: &SubjectCatalogIndex) -> Vec<CourseRef> {
    let mut courses: Vec<CourseRef> = Vec::new();
    for code in codes {
        let name = code.course_name.to_lowercase();
        if name.is_empty() {
            continue;
        }
        for (subject, catalogs) in index.iter() {
            if !name.starts_with(&subject.to_lowercase()) {
                continue;
            }
            let hit = catalogs
                .iter()
                .find(|catalog| name.starts_with(&format!("{subject}{catalog}").to_lowercase()));
            if let Some(catalog) = hit {
                let course = CourseRef::new(subject.to_uppercase(), catalog.to_uppercase());
                if !courses.contains(&course) {
                    courses.push(course);
                }
                break;
            }
        }
    }
    courses
}

/// Tag names from the payload; unnamed tags are dropped.
pub fn parse_tags(tags: &[RatingTag]) -> BTreeSet<String> {
    tags.iter()
        .filter(|tag| !tag.tag_name.is_empty())
        .map(|tag| tag.tag_name.clone())
        .collect()
}

pub fn parse_instructor(
    node: &ProfessorNode,
    index: &SubjectCatalogIndex,
    departments: &DepartmentCatalog,
) -> InstructorRecord {
    parse_instructor_with(node, index, departments, &DepartmentMatcher::default())
}

pub fn parse_instructor_with(
    node: &ProfessorNode,
    index: &SubjectCatalogIndex,
    departments: &DepartmentCatalog,
    matcher: &DepartmentMatcher,
) -> InstructorRecord {
    InstructorRecord {
        id: instructor_id(&node.first_name, &node.last_name),
        first_name: node.first_name.clone(),
        last_name: node.last_name.clone(),
        departments: matcher
            .best_match(&node.department, departments)
            .into_iter()
            .collect(),
        courses: parse_course_codes(&node.course_codes, index),
        tags: parse_tags(&node.teacher_rating_tags),
        avg_difficulty: node.avg_difficulty,
        avg_rating: node.avg_rating,
        review_count: node.num_ratings,
    }
}
