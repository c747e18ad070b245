use std::collections::BTreeSet;

use rollcall_core::SubjectCatalogIndex;
use serde::Serialize;

/// Catalog ids that no record reconciled to and that were not known failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MissingIdsReport {
    pub missing: BTreeSet<String>,
}

impl MissingIdsReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn missing_course_ids(
    index: &SubjectCatalogIndex,
    used_ids: &BTreeSet<String>,
    failed_ids: &BTreeSet<String>,
) -> MissingIdsReport {
    let missing = index
        .course_ids()
        .into_iter()
        .filter(|id| !used_ids.contains(id) && !failed_ids.contains(id))
        .collect();
    MissingIdsReport { missing }
}
