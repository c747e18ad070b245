use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RollcallError};

/// Root configuration, loaded from `~/.config/rollcall/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RollcallConfig {
    pub paths: PathsConfig,
    pub matching: MatchingConfig,
    pub departments: DepartmentsConfig,
    pub reviews: ReviewsConfig,
}

/// Where the collaborator files live. File names are joined onto `data_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: String,
    pub subject_catalogs: String,
    pub course_records: String,
    pub failed_ids: String,
    pub processed_courses: String,
    pub professor_payloads: String,
    pub department_catalog: String,
    pub instructor_clusters: String,
    pub reviews_output: String,
    pub instructors_output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Leading characters two identifiers must share before their common
    /// prefix is taken as a candidate.
    pub prefix_agreement: usize,
    /// Fewest subject letters a recovered subject variant may keep.
    pub min_subject_letters: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DepartmentsConfig {
    /// Raw label → canonical department, consulted before the built-in table.
    pub extra_overrides: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    pub user_id_prefix: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutoff_date: Option<String>,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for PathsConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("rollcall");

        Self {
            data_dir: data_dir.to_string_lossy().to_string(),
            subject_catalogs: "subject-catalogs.json".to_string(),
            course_records: "courses.json".to_string(),
            failed_ids: "failed_course_ids.json".to_string(),
            processed_courses: "processed_courses.json".to_string(),
            professor_payloads: "professor_payloads.json".to_string(),
            department_catalog: "department_descriptions.json".to_string(),
            instructor_clusters: "updated_ids.json".to_string(),
            reviews_output: "reviews.json".to_string(),
            instructors_output: "instructors.json".to_string(),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            prefix_agreement: 4,
            min_subject_letters: 2,
        }
    }
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            user_id_prefix: "rate_my_professor_".to_string(),
            cutoff_date: None,
        }
    }
}

impl ReviewsConfig {
    /// Parse the configured cutoff, if any.
    pub fn cutoff(&self) -> Result<Option<NaiveDate>> {
        self.cutoff_date
            .as_deref()
            .map(parse_cutoff_date)
            .transpose()
    }
}

/// Parse a `YYYY-MM-DD` cutoff date.
pub fn parse_cutoff_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| RollcallError::InvalidDate(format!("{raw}: {e}")))
}

// ─── Load / Save ───────────────────────────────────────────

impl RollcallConfig {
    /// Standard config file path: `~/.config/rollcall/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("ROLLCALL_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("rollcall")
            .join("config.toml")
    }

    /// Load config from disk, falling back to defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        Self::load_from(&path)
    }

    /// Load config from a specific path. `ROLLCALL_DATA_DIR` wins over the file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<Self>(&contents)?
        } else {
            Self::default()
        };

        if let Ok(dir) = std::env::var("ROLLCALL_DATA_DIR") {
            config.paths.data_dir = dir;
        }
        config.validate()?;
        Ok(config)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.matching.prefix_agreement == 0 {
            return Err(RollcallError::ConfigError(
                "matching.prefix_agreement must be at least 1".to_string(),
            ));
        }
        if self.matching.min_subject_letters == 0 {
            return Err(RollcallError::ConfigError(
                "matching.min_subject_letters must be at least 1".to_string(),
            ));
        }
        self.reviews.cutoff()?;
        Ok(())
    }

    // ─── Derived paths ─────────────────────────────────────

    fn data_file(&self, name: &str) -> PathBuf {
        PathBuf::from(&self.paths.data_dir).join(name)
    }

    pub fn subject_catalogs_path(&self) -> PathBuf {
        self.data_file(&self.paths.subject_catalogs)
    }

    pub fn course_records_path(&self) -> PathBuf {
        self.data_file(&self.paths.course_records)
    }

    pub fn failed_ids_path(&self) -> PathBuf {
        self.data_file(&self.paths.failed_ids)
    }

    pub fn processed_courses_path(&self) -> PathBuf {
        self.data_file(&self.paths.processed_courses)
    }

    pub fn professor_payloads_path(&self) -> PathBuf {
        self.data_file(&self.paths.professor_payloads)
    }

    pub fn department_catalog_path(&self) -> PathBuf {
        self.data_file(&self.paths.department_catalog)
    }

    pub fn instructor_clusters_path(&self) -> PathBuf {
        self.data_file(&self.paths.instructor_clusters)
    }

    pub fn reviews_output_path(&self) -> PathBuf {
        self.data_file(&self.paths.reviews_output)
    }

    pub fn instructors_output_path(&self) -> PathBuf {
        self.data_file(&self.paths.instructors_output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = RollcallConfig::default();
        assert_eq!(cfg.matching.prefix_agreement, 4);
        assert_eq!(cfg.matching.min_subject_letters, 2);
        assert_eq!(cfg.reviews.user_id_prefix, "rate_my_professor_");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = RollcallConfig::default();
        cfg.paths.data_dir = dir.path().to_string_lossy().to_string();
        cfg.departments
            .extra_overrides
            .insert("Comp Sci".to_string(), "Computer Science".to_string());
        cfg.reviews.cutoff_date = Some("2023-01-01".to_string());
        cfg.save_to(&path).unwrap();

        let loaded = RollcallConfig::load_from(&path).unwrap();
        assert_eq!(loaded.matching.prefix_agreement, 4);
        assert_eq!(
            loaded.departments.extra_overrides.get("Comp Sci").map(String::as_str),
            Some("Computer Science")
        );
        assert_eq!(
            loaded.reviews.cutoff().unwrap(),
            NaiveDate::from_ymd_opt(2023, 1, 1)
        );
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching]\nprefix_agreement = 5\n").unwrap();

        let cfg = RollcallConfig::load_from(&path).unwrap();
        assert_eq!(cfg.matching.prefix_agreement, 5);
        assert_eq!(cfg.matching.min_subject_letters, 2);
        assert_eq!(cfg.paths.subject_catalogs, "subject-catalogs.json");
    }

    #[test]
    fn test_rejects_zero_prefix_agreement() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching]\nprefix_agreement = 0\n").unwrap();

        let err = RollcallConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, RollcallError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_bad_cutoff() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[reviews]\ncutoff_date = \"01/02/2023\"\n").unwrap();

        let err = RollcallConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, RollcallError::InvalidDate(_)));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let cfg =
            RollcallConfig::load_from(Path::new("/tmp/nonexistent_rollcall_config.toml")).unwrap();
        assert_eq!(cfg.reviews.user_id_prefix, "rate_my_professor_");
    }

    #[test]
    fn test_derived_paths() {
        let mut cfg = RollcallConfig::default();
        cfg.paths.data_dir = "/srv/rollcall".to_string();
        assert_eq!(
            cfg.subject_catalogs_path(),
            PathBuf::from("/srv/rollcall/subject-catalogs.json")
        );
        assert!(cfg.instructor_clusters_path().ends_with("updated_ids.json"));
    }
}
