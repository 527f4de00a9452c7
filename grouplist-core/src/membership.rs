//! Which tracks a group belongs to.

use grouplist_state::{Group, Track, TrackName};

/// Returns the names of the tracks whose chain contains `group`, in the order the
/// tracks are given.
///
/// Each matching track appears once, however many times the group occurs in its
/// chain. Chains naming groups that do not exist are fine; only names are compared.
pub fn tracks_containing<'a>(
    group: &Group,
    tracks: impl IntoIterator<Item = &'a Track>,
) -> Vec<TrackName> {
    tracks
        .into_iter()
        .filter(|track| track.contains_group(&group.name))
        .map(|track| track.name.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let tracks = [Track::new("staff", ["g1", "g2"])];
        assert_eq!(
            tracks_containing(&Group::new("g1"), &tracks),
            vec![TrackName::from("staff")]
        );
        assert!(tracks_containing(&Group::new("g3"), &tracks).is_empty());
    }

    #[test]
    fn test_one_entry_per_track() {
        let tracks = [
            Track::new("loop", ["a", "b", "a"]),
            Track::new("other", ["c"]),
            Track::new("staff", ["A"]),
        ];
        assert_eq!(
            tracks_containing(&Group::new("a"), &tracks),
            vec![TrackName::from("loop"), TrackName::from("staff")]
        );
    }

    #[test]
    fn test_dangling_group_names_are_tolerated() {
        let tracks = [Track::new("ghosts", ["nobody", "g1"])];
        assert_eq!(
            tracks_containing(&Group::new("g1"), &tracks),
            vec![TrackName::from("ghosts")]
        );
        assert!(tracks_containing(&Group::new("g1"), &[]).is_empty());
    }
}
