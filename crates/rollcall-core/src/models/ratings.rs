//! Shape of one fetched professor-detail document.
//!
//! Only the fields the review pipeline reads are modelled; everything else in
//! the document is ignored. Every field tolerates absence and `null`.

use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// `{ "id": ..., "data": { "node": ... } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub data: PayloadData,
}

impl ProfessorPayload {
    pub fn node(&self) -> Option<&ProfessorNode> {
        self.data.node.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadData {
    #[serde(default)]
    pub node: Option<ProfessorNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessorNode {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub department: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub course_codes: Vec<CourseCodeEntry>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub teacher_rating_tags: Vec<RatingTag>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_difficulty: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_rating: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub num_ratings: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ratings: RatingConnection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseCodeEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub course_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub course_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingTag {
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingConnection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<RatingEdge>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingEdge {
    #[serde(default, deserialize_with = "null_as_default")]
    pub node: RatingNode,
}

/// One student rating as returned by the ratings site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingNode {
    #[serde(default)]
    pub comment: Option<String>,

    /// `YYYY-MM-DD HH:MM:SS +0000 UTC` in practice.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    #[serde(default)]
    pub admin_reviewed_at: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub flag_status: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbs_up_total: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbs_down_total: i64,

    #[serde(default)]
    pub difficulty_rating: Option<f64>,

    #[serde(default)]
    pub clarity_rating: Option<f64>,

    #[serde(rename = "class", default, deserialize_with = "null_as_default")]
    pub class_name: String,

    /// Tags joined with `--`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rating_tags: String,
}
