use std::collections::BTreeSet;

use crate::text::{head, longest_common_start, normalize_text};

/// Leading characters two candidates must share before they are intersected.
pub const DEFAULT_PREFIX_AGREEMENT: usize = 4;

/// Plausible ids shared by a title's and a summary's candidate sets.
///
/// * both empty: nothing.
/// * one empty: members of the other whose normalized form starts with the
///   normalized seed.
/// * neither empty: for each pair agreeing on their first four normalized
///   characters, the non-empty common start of the raw strings.
pub fn find_common_ids(
    title_ids: &BTreeSet<String>,
    summary_ids: &BTreeSet<String>,
    seed_id: &str,
) -> BTreeSet<String> {
    find_common_ids_with(title_ids, summary_ids, seed_id, DEFAULT_PREFIX_AGREEMENT)
}

pub(crate) fn find_common_ids_with(
    title_ids: &BTreeSet<String>,
    summary_ids: &BTreeSet<String>,
    seed_id: &str,
    prefix_agreement: usize,
) -> BTreeSet<String> {
    match (title_ids.is_empty(), summary_ids.is_empty()) {
        (true, true) => BTreeSet::new(),
        (true, false) => seeded_subset(summary_ids, seed_id),
        (false, true) => seeded_subset(title_ids, seed_id),
        (false, false) => {
            let mut common = BTreeSet::new();
            for a in title_ids {
                let a_norm = normalize_text(a);
                for b in summary_ids {
                    let b_norm = normalize_text(b);
                    if head(&a_norm, prefix_agreement) != head(&b_norm, prefix_agreement) {
                        continue;
                    }
                    let shared = longest_common_start(a, b);
                    if !shared.is_empty() {
                        common.insert(shared);
                    }
                }
            }
            common
        }
    }
}

fn seeded_subset(ids: &BTreeSet<String>, seed_id: &str) -> BTreeSet<String> {
    let seed = normalize_text(seed_id);
    ids.iter()
        .filter(|id| normalize_text(id).starts_with(&seed))
        .cloned()
        .collect()
}
