//! Ordering of groups for display.

use std::{cmp::Ordering, sync::Arc};

use grouplist_state::Group;

/// Compare by weight (descending, heaviest first; no weight counts as 0).
fn cmp_weight_desc(a: &Group, b: &Group) -> Ordering {
    b.weight().cmp(&a.weight())
}

/// Compare by name (case-insensitive, ascending).
fn cmp_name(a: &Group, b: &Group) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// The display order of two groups: by (weight desc, name).
///
/// Names that differ only in case fall back to an exact comparison, so two distinct
/// groups never compare equal.
pub fn cmp_groups(a: &Group, b: &Group) -> Ordering {
    cmp_weight_desc(a, b)
        .then_with(|| cmp_name(a, b))
        .then_with(|| a.name.cmp(&b.name))
}

/// Returns the groups in display order.
pub fn rank(groups: impl IntoIterator<Item = Arc<Group>>) -> Vec<Arc<Group>> {
    let mut groups: Vec<_> = groups.into_iter().collect();
    groups.sort_by(|a, b| cmp_groups(a, b));
    groups
}
