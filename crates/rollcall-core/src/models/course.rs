use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// One course box as scraped from a listing page.
///
/// Field names follow the scraper's JSON output. Missing or `null` fields
/// deserialize as empty so a malformed record simply contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCourseRecord {
    /// Seed id built from the subject key and course code that were searched.
    #[serde(rename = "courseid", default, deserialize_with = "null_as_default")]
    pub seed_id: String,

    #[serde(rename = "course_name", default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(rename = "summary", default, deserialize_with = "null_as_default")]
    pub summary: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub teachers: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub non_editing_teachers: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub teaching_assistants: Vec<String>,
}

impl RawCourseRecord {
    pub fn new(
        seed_id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            seed_id: seed_id.into(),
            title: title.into(),
            summary: summary.into(),
            ..Default::default()
        }
    }

    pub fn with_teachers<I, S>(mut self, teachers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.teachers = teachers.into_iter().map(Into::into).collect();
        self
    }
}

/// A course id that survived validation, with every role name merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledCourse {
    #[serde(rename = "courseId")]
    pub course_id: String,
    pub teachers: Vec<String>,
    pub non_editing_teachers: Vec<String>,
    pub teaching_assistants: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_absent_roles_are_empty() {
        let record: RawCourseRecord = serde_json::from_str(
            r#"{"courseid": "COMP248", "course_name": "COMP 248", "summary": null}"#,
        )
        .unwrap();
        assert_eq!(record.seed_id, "COMP248");
        assert_eq!(record.summary, "");
        assert!(record.teachers.is_empty());
        assert!(record.teaching_assistants.is_empty());
    }

    #[test]
    fn test_reconciled_course_wire_names() {
        let course = ReconciledCourse {
            course_id: "COMP248".to_string(),
            teachers: vec!["A. Smith".to_string()],
            ..Default::default()
        };
        let value = serde_json::to_value(&course).unwrap();
        assert_eq!(value["courseId"], "COMP248");
        assert_eq!(value["teachers"][0], "A. Smith");
        assert!(value["non_editing_teachers"].as_array().unwrap().is_empty());
    }
}
