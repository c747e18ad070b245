use rollcall_core::{InstructorClusters, ReviewRecord};
use tracing::warn;
use uuid::Uuid;

use crate::instructors::{Ambiguity, resolve_instructor_id};

/// Give every review a fresh user id and its resolved instructor id.
///
/// Returns one [`Ambiguity`] per review whose instructor key matched more
/// than one cluster; those reviews keep their original key.
pub fn assign_identities(
    reviews: &mut [ReviewRecord],
    clusters: &InstructorClusters,
    user_id_prefix: &str,
) -> Vec<Ambiguity> {
    assign_identities_with(reviews, clusters, user_id_prefix, Uuid::new_v4)
}

pub fn assign_identities_with<F>(
    reviews: &mut [ReviewRecord],
    clusters: &InstructorClusters,
    user_id_prefix: &str,
    mut next_id: F,
) -> Vec<Ambiguity>
where
    F: FnMut() -> Uuid,
{
    let mut ambiguities = Vec::new();
    for review in reviews.iter_mut() {
        review.user_id = Some(format!("{user_id_prefix}{}", next_id()));

        let resolution = resolve_instructor_id(&review.instructor_id, clusters);
        if let Some(ambiguity) = resolution.ambiguity() {
            warn!(
                instructor = %ambiguity.key,
                clusters = ambiguity.candidates.len(),
                "ambiguous instructor id, keeping original"
            );
            ambiguities.push(ambiguity.clone());
        }
        review.instructor_id = resolution.into_id();
    }
    ambiguities
}
