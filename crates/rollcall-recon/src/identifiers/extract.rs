use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use rollcall_core::SubjectCatalogIndex;

use crate::identifiers::split_subject;
use crate::text::normalize_text;

static COURSE_ID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]+[0-9]+[A-Z0-9/]*").unwrap());

/// Every maximal `LETTERS DIGITS [LETTERS|DIGITS|/]*` run in the normalized text.
pub fn extract_ids(text: &str) -> BTreeSet<String> {
    let normalized = normalize_text(text);
    COURSE_ID_REGEX
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extend `ids` with the subject the catalog actually knows.
///
/// Normalization glues the last capital of a title onto the subject
/// (`"Programming I COMP 248"` → `ICOMP248`). An id whose subject run is
/// not in `index` gains one copy with the longest trimmed subject that is,
/// keeping at least `min_subject_letters` letters. Ids with a known subject
/// are left alone.
pub fn with_subject_variants(
    ids: &BTreeSet<String>,
    index: &SubjectCatalogIndex,
    min_subject_letters: usize,
) -> BTreeSet<String> {
    let min = min_subject_letters.max(1);
    let mut out = ids.clone();
    for id in ids {
        let (subject, rest) = split_subject(id);
        if subject.is_empty() || index.has_subject(subject) {
            continue;
        }
        // subject is ASCII, so byte offsets are char offsets
        let trimmed = (1..=subject.len().saturating_sub(min))
            .map(|start| &subject[start..])
            .find(|candidate| index.has_subject(candidate));
        if let Some(known) = trimmed {
            out.insert(format!("{known}{rest}"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_ids_maximal() {
        assert_eq!(extract_ids("COMP248 intro"), set(&["COMP248"]));
        assert_eq!(
            extract_ids("Object-Oriented Programming I COMP 248"),
            set(&["ICOMP248"])
        );
        assert_eq!(extract_ids("ENGR 201 / ENCS 282"), set(&["ENGR201/ENCS282"]));
    }

    #[test]
    fn test_extract_ids_multiple_and_none() {
        assert_eq!(
            extract_ids("see MATH 203, then math 204; COMP 249"),
            set(&["MATH203", "COMP249"])
        );
        assert!(extract_ids("no codes here").is_empty());
        assert!(extract_ids("").is_empty());
        assert!(extract_ids("248").is_empty());
    }

    fn index() -> SubjectCatalogIndex {
        [("COMP", "248"), ("MP", "248"), ("ENCS", "282"), ("NCS", "282")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_subject_variants_take_longest_known_subject() {
        let variants = with_subject_variants(&set(&["ICOMP248"]), &index(), 2);
        assert_eq!(variants, set(&["ICOMP248", "COMP248"]));
    }

    #[test]
    fn test_known_subject_gets_no_variants() {
        // NCS is a subject too, but ENCS282 is already a clean code.
        assert_eq!(
            with_subject_variants(&set(&["ENCS282"]), &index(), 2),
            set(&["ENCS282"])
        );
    }

    #[test]
    fn test_subject_variants_respect_minimum() {
        assert_eq!(
            with_subject_variants(&set(&["XMP248"]), &index(), 3),
            set(&["XMP248"])
        );
        assert_eq!(
            with_subject_variants(&set(&["XMP248"]), &index(), 2),
            set(&["XMP248", "MP248"])
        );
        assert_eq!(
            with_subject_variants(&set(&["QQQ101"]), &index(), 2),
            set(&["QQQ101"])
        );
        assert!(with_subject_variants(&BTreeSet::new(), &index(), 2).is_empty());
    }
}
