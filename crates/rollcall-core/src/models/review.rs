use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewKind {
    #[default]
    Instructor,
}

/// A student review attached to an instructor and one of their courses.
///
/// `user_id` is empty until identities are assigned; `instructor_id` starts
/// as the locally derived id and is replaced by the resolved one at the
/// same stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    #[serde(rename = "type")]
    pub kind: ReviewKind,
    pub content: Option<String>,
    pub timestamp: String,
    pub admin_reviewed_at: Option<String>,
    pub flagged: bool,
    pub likes: i64,
    pub user_id: Option<String>,
    pub difficulty: Option<f64>,
    pub course_id: String,
    pub instructor_id: String,
    pub rating: Option<f64>,
    #[serde(default)]
    pub tags: Vec<String>,
}
