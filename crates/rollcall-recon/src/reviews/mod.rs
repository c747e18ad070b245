pub mod identity;
pub mod timestamps;

use std::collections::BTreeSet;

use chrono::NaiveDate;
use rollcall_core::{CourseRef, RatingEdge, RatingNode, ReviewKind, ReviewRecord};
use tracing::debug;

pub use identity::{assign_identities, assign_identities_with};
pub use timestamps::{normalize_timestamp, normalize_timestamps};

/// Reviews of `instructor_id`'s own courses posted on or after `cutoff`.
///
/// A review's class is matched with spaces removed, case-insensitively,
/// against the instructor's `subject + catalog` codes. Reviews whose date
/// cannot be read are skipped.
pub fn parse_reviews(
    edges: &[RatingEdge],
    courses: &[CourseRef],
    instructor_id: &str,
    cutoff: NaiveDate,
) -> Vec<ReviewRecord> {
    let known: BTreeSet<String> = courses.iter().map(|c| c.code().to_lowercase()).collect();

    edges
        .iter()
        .filter_map(|edge| {
            let node = &edge.node;
            let class = node.class_name.replace(' ', "").to_lowercase();
            let Some(date) = review_date(&node.date) else {
                debug!(date = %node.date, instructor = %instructor_id, "skipping review with unreadable date");
                return None;
            };
            (known.contains(&class) && date >= cutoff)
                .then(|| build_review(node, &class, instructor_id))
        })
        .collect()
}

fn review_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.split_whitespace().next()?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn build_review(node: &RatingNode, class: &str, instructor_id: &str) -> ReviewRecord {
    ReviewRecord {
        kind: ReviewKind::Instructor,
        content: node.comment.clone(),
        timestamp: node.date.clone(),
        admin_reviewed_at: node.admin_reviewed_at.clone(),
        flagged: node.flag_status != "UNFLAGGED",
        likes: node.thumbs_up_total - node.thumbs_down_total,
        user_id: None,
        difficulty: node.difficulty_rating,
        course_id: class.to_uppercase(),
        instructor_id: instructor_id.to_string(),
        rating: node.clarity_rating,
        tags: split_rating_tags(&node.rating_tags),
    }
}

fn split_rating_tags(raw: &str) -> Vec<String> {
    raw.split("--")
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
