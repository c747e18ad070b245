use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Authoritative subject → catalog-number index, e.g. `{"COMP": ["248", "249"]}`.
///
/// Subjects are kept sorted. Catalog numbers keep the order of their first
/// appearance; duplicates in the source document are dropped on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Vec<String>>", into = "BTreeMap<String, Vec<String>>")]
pub struct SubjectCatalogIndex {
    subjects: BTreeMap<String, Vec<String>>,
}

impl SubjectCatalogIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one catalog number under `subject`; repeated pairs are ignored.
    pub fn insert(&mut self, subject: impl Into<String>, catalog: impl Into<String>) {
        let catalog = catalog.into();
        let catalogs = self.subjects.entry(subject.into()).or_default();
        if !catalogs.contains(&catalog) {
            catalogs.push(catalog);
        }
    }

    pub fn catalogs(&self, subject: &str) -> Option<&[String]> {
        self.subjects.get(subject).map(Vec::as_slice)
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    pub fn contains(&self, subject: &str, catalog: &str) -> bool {
        self.catalogs(subject)
            .is_some_and(|catalogs| catalogs.iter().any(|c| c == catalog))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.subjects
            .iter()
            .map(|(subject, catalogs)| (subject.as_str(), catalogs.as_slice()))
    }

    /// Every `subject + catalog` id the index knows about.
    pub fn course_ids(&self) -> BTreeSet<String> {
        self.iter()
            .flat_map(|(subject, catalogs)| {
                catalogs.iter().map(move |catalog| format!("{subject}{catalog}"))
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

impl From<BTreeMap<String, Vec<String>>> for SubjectCatalogIndex {
    fn from(raw: BTreeMap<String, Vec<String>>) -> Self {
        let mut index = Self::new();
        for (subject, catalogs) in raw {
            index.subjects.entry(subject.clone()).or_default();
            for catalog in catalogs {
                index.insert(subject.clone(), catalog);
            }
        }
        index
    }
}

impl From<SubjectCatalogIndex> for BTreeMap<String, Vec<String>> {
    fn from(index: SubjectCatalogIndex) -> Self {
        index.subjects
    }
}

impl<S, C> FromIterator<(S, C)> for SubjectCatalogIndex
where
    S: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (S, C)>>(iter: I) -> Self {
        let mut index = Self::new();
        for (subject, catalog) in iter {
            index.insert(subject, catalog);
        }
        index
    }
}

/// Ordered list of canonical department names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentCatalog(Vec<String>);

impl DepartmentCatalog {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DepartmentCatalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Authoritative instructor ids, one inner list of aliases per real person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstructorClusters(Vec<Vec<String>>);

impl InstructorClusters {
    pub fn new(clusters: Vec<Vec<String>>) -> Self {
        Self(clusters)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[String]> {
        self.0.iter().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_drops_duplicate_catalogs() {
        let index: SubjectCatalogIndex =
            serde_json::from_str(r#"{"COMP": ["248", "249", "248"], "SOEN": []}"#).unwrap();
        assert_eq!(index.catalogs("COMP").unwrap(), ["248", "249"]);
        assert!(index.has_subject("SOEN"));
        assert!(index.contains("COMP", "249"));
        assert!(!index.contains("COMP", "250"));
        assert!(!index.contains("ENGR", "201"));
    }

    #[test]
    fn test_index_course_ids() {
        let index: SubjectCatalogIndex =
            [("COMP", "248"), ("ENCS", "282"), ("COMP", "249")].into_iter().collect();
        let ids: Vec<_> = index.course_ids().into_iter().collect();
        assert_eq!(ids, vec!["COMP248", "COMP249", "ENCS282"]);
    }

    #[test]
    fn test_index_serializes_as_plain_map() {
        let index: SubjectCatalogIndex = [("MATH", "203")].into_iter().collect();
        let json = serde_json::to_string(&index).unwrap();
        assert_eq!(json, r#"{"MATH":["203"]}"#);
    }

    #[test]
    fn test_clusters_and_departments_are_transparent() {
        let clusters: InstructorClusters =
            serde_json::from_str(r#"[["a", "ab"], ["xy"]]"#).unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters.iter().next().unwrap(), ["a", "ab"]);

        let departments: DepartmentCatalog =
            serde_json::from_str(r#"["Accountancy", "Physics"]"#).unwrap();
        assert_eq!(departments.names().len(), 2);
    }
}
