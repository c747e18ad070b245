use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A validated `{subject, catalog}` pair taught by an instructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseRef {
    pub subject: String,
    pub catalog: String,
}

impl CourseRef {
    pub fn new(subject: impl Into<String>, catalog: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            catalog: catalog.into(),
        }
    }

    /// The concatenated course id, e.g. `COMP248`.
    pub fn code(&self) -> String {
        format!("{}{}", self.subject, self.catalog)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorRecord {
    /// `first-last`, whitespace collapsed to dashes and lowercased.
    #[serde(rename = "_id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,

    /// Matched canonical department; empty when nothing matched.
    #[serde(default)]
    pub departments: Vec<String>,

    #[serde(default)]
    pub courses: Vec<CourseRef>,

    #[serde(default)]
    pub tags: BTreeSet<String>,

    #[serde(default)]
    pub avg_difficulty: f64,

    #[serde(default)]
    pub avg_rating: f64,

    #[serde(default)]
    pub review_count: u32,
}
