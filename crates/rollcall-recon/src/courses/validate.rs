use std::collections::BTreeSet;

use rollcall_core::SubjectCatalogIndex;
use tracing::debug;

use crate::identifiers::split_subject;

/// Keep candidates the catalog knows about.
///
/// A candidate is valid when its leading capitals name a subject in `index`
/// and the remainder is one of that subject's catalog numbers. Otherwise a
/// candidate starting with `seed_id` contributes the seed itself, and
/// anything else is dropped. An empty seed never triggers the fallback.
pub fn validate_and_refine_ids(
    candidates: &BTreeSet<String>,
    index: &SubjectCatalogIndex,
    seed_id: &str,
) -> BTreeSet<String> {
    let mut valid = BTreeSet::new();
    for candidate in candidates {
        let (subject, catalog) = split_subject(candidate);
        if !subject.is_empty() && index.contains(subject, catalog) {
            valid.insert(candidate.clone());
        } else if !seed_id.is_empty() && candidate.starts_with(seed_id) {
            debug!(candidate = %candidate, seed = %seed_id, "falling back to seed id");
            valid.insert(seed_id.to_string());
        } else {
            debug!(candidate = %candidate, "discarding unknown course id");
        }
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn index() -> SubjectCatalogIndex {
        [("COMP", "248"), ("COMP", "249"), ("SOEN", "490")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_exact_catalog_match() {
        let out = validate_and_refine_ids(&set(&["COMP248", "SOEN490"]), &index(), "COMP248");
        assert_eq!(out, set(&["COMP248", "SOEN490"]));
    }

    #[test]
    fn test_seed_fallback_replaces_candidate() {
        let out = validate_and_refine_ids(&set(&["COMP248/2"]), &index(), "COMP248");
        assert_eq!(out, set(&["COMP248"]));
    }

    #[test]
    fn test_seed_fallback_even_when_seed_unknown() {
        let out = validate_and_refine_ids(&set(&["ENGR201X"]), &index(), "ENGR201");
        assert_eq!(out, set(&["ENGR201"]));
    }

    #[test]
    fn test_unknown_discarded() {
        let out = validate_and_refine_ids(&set(&["MP248", "COMP250"]), &index(), "COMP248");
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_seed_has_no_fallback() {
        let out = validate_and_refine_ids(&set(&["COMP248", "XYZ1"]), &index(), "");
        assert_eq!(out, set(&["COMP248"]));
    }

    #[test]
    fn test_empty_prefix_only_via_seed() {
        assert!(validate_and_refine_ids(&set(&["248"]), &index(), "COMP248").is_empty());
        assert_eq!(
            validate_and_refine_ids(&set(&["248A"]), &index(), "248"),
            set(&["248"])
        );
    }
}
