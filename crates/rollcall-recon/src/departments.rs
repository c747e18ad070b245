//! Map free-text department labels onto the canonical department list.

use std::collections::BTreeMap;

use rollcall_core::DepartmentCatalog;

use crate::text::label_tokens;

/// Known renamings, checked before any scoring.
const DIRECT_OVERRIDES: &[(&str, &str)] = &[
    ("Accounting", "Accountancy"),
    ("Theater", "Theatre"),
    ("Theology", "Theological Studies"),
    ("Religion", "Religions and Cultures"),
    ("Exercise & Sport Science", "Exercise Science"),
    ("Film", "Fine Arts"),
    ("Law", "Business Administration"),
];

/// Labels folded into the combined languages department.
const LANGUAGE_LABELS: &[&str] = &[
    "Languages",
    "Chinese",
    "Linguistics",
    "Arabic",
    "Greek",
    "Italian",
    "German",
    "Hebrew",
    "Russian",
];

pub const LANGUAGES_DEPARTMENT: &str = "Classics, Mod Lang&Linguistics";

#[derive(Debug, Clone, Default)]
pub struct DepartmentMatcher {
    extra_overrides: BTreeMap<String, String>,
}

impl DepartmentMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides that take precedence over the built-in table.
    pub fn with_overrides(mut self, overrides: BTreeMap<String, String>) -> Self {
        self.extra_overrides = overrides;
        self
    }

    /// Best canonical department for `label`, or `None` for an empty label
    /// or an empty catalog.
    ///
    /// Scoring counts shared lowercase words; ties go to the candidate whose
    /// word count is closest to the label's, then to the earlier candidate.
    /// A positive overlap is not required.
    pub fn best_match(&self, label: &str, catalog: &DepartmentCatalog) -> Option<String> {
        if label.is_empty() {
            return None;
        }

        if let Some(name) = self.extra_overrides.get(label) {
            return Some(name.clone());
        }
        if let Some((_, name)) = DIRECT_OVERRIDES.iter().find(|(raw, _)| *raw == label) {
            return Some((*name).to_string());
        }
        if LANGUAGE_LABELS.contains(&label) {
            return Some(LANGUAGES_DEPARTMENT.to_string());
        }

        let input = label_tokens(label);
        let mut best: Option<&str> = None;
        let mut highest = 0usize;
        let mut smallest_diff = usize::MAX;

        for candidate in catalog.iter() {
            let tokens = label_tokens(candidate);
            let overlap = input.intersection(&tokens).count();
            let diff = tokens.len().abs_diff(input.len());
            if overlap > highest || (overlap == highest && diff < smallest_diff) {
                best = Some(candidate);
                highest = overlap;
                smallest_diff = diff;
            }
        }

        best.map(str::to_string)
    }
}

/// [`DepartmentMatcher::best_match`] without configured overrides.
pub fn find_best_department_match(label: &str, catalog: &DepartmentCatalog) -> Option<String> {
    DepartmentMatcher::default().best_match(label, catalog)
}
