use rollcall_core::InstructorClusters;
use serde::Serialize;

/// A key that matched more than one alias cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ambiguity {
    pub key: String,
    pub candidates: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one cluster matched; holds its longest alias.
    Resolved(String),
    /// No cluster matched; holds the key.
    Unresolved(String),
    Ambiguous(Ambiguity),
}

impl Resolution {
    /// The id to store: the resolved alias, or the original key otherwise.
    pub fn id(&self) -> &str {
        match self {
            Resolution::Resolved(id) | Resolution::Unresolved(id) => id,
            Resolution::Ambiguous(ambiguity) => &ambiguity.key,
        }
    }

    pub fn into_id(self) -> String {
        match self {
            Resolution::Resolved(id) | Resolution::Unresolved(id) => id,
            Resolution::Ambiguous(ambiguity) => ambiguity.key,
        }
    }

    pub fn ambiguity(&self) -> Option<&Ambiguity> {
        match self {
            Resolution::Ambiguous(ambiguity) => Some(ambiguity),
            _ => None,
        }
    }
}

/// Resolve `key` against clusters of aliases by substring containment.
///
/// A cluster matches when `key` occurs inside any of its aliases. One match
/// resolves to that cluster's longest alias (earliest wins among equals);
/// several matches are ambiguous and never guessed.
pub fn resolve_instructor_id(key: &str, clusters: &InstructorClusters) -> Resolution {
    let matches: Vec<&[String]> = clusters
        .iter()
        .filter(|aliases| aliases.iter().any(|alias| alias.contains(key)))
        .collect();

    match matches.as_slice() {
        [] => Resolution::Unresolved(key.to_string()),
        [aliases] => match longest_alias(aliases) {
            Some(alias) => Resolution::Resolved(alias.to_string()),
            None => Resolution::Unresolved(key.to_string()),
        },
        _ => Resolution::Ambiguous(Ambiguity {
            key: key.to_string(),
            candidates: matches.iter().map(|aliases| aliases.to_vec()).collect(),
        }),
    }
}

fn longest_alias(aliases: &[String]) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for alias in aliases {
        let len = alias.chars().count();
        if best.is_none_or(|(_, best_len)| len > best_len) {
            best = Some((alias, len));
        }
    }
    best.map(|(alias, _)| alias)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(raw: &[&[&str]]) -> InstructorClusters {
        InstructorClusters::new(
            raw.iter()
                .map(|c| c.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn test_single_cluster_longest_alias() {
        let resolution = resolve_instructor_id("a", &clusters(&[&["a", "ab"], &["xy"]]));
        assert_eq!(resolution, Resolution::Resolved("ab".to_string()));
        assert_eq!(resolution.id(), "ab");
    }

    #[test]
    fn test_multiple_clusters_ambiguous() {
        let resolution = resolve_instructor_id("a", &clusters(&[&["a"], &["a", "z"]]));
        assert_eq!(resolution.id(), "a");
        let ambiguity = resolution.ambiguity().unwrap();
        assert_eq!(ambiguity.candidates.len(), 2);
        assert_eq!(ambiguity.candidates[1], vec!["a", "z"]);
    }

    #[test]
    fn test_no_match_unresolved() {
        let resolution = resolve_instructor_id("ada", &clusters(&[&["bob-smith"]]));
        assert_eq!(resolution, Resolution::Unresolved("ada".to_string()));
        assert_eq!(resolution.into_id(), "ada");
    }

    #[test]
    fn test_equal_lengths_keep_first() {
        let resolution = resolve_instructor_id(
            "smith",
            &clusters(&[&["j-smith", "jo-smith", "al-smith"]]),
        );
        assert_eq!(resolution.id(), "jo-smith");

        let resolution = resolve_instructor_id("smith", &clusters(&[&["ab-smith", "cd-smith"]]));
        assert_eq!(resolution.id(), "ab-smith");
    }

    #[test]
    fn test_substring_not_prefix() {
        let resolution = resolve_instructor_id(
            "lovelace",
            &clusters(&[&["ada-lovelace", "ada-king-lovelace"]]),
        );
        assert_eq!(resolution.id(), "ada-king-lovelace");
    }
}
