//! Representations of the group catalog, as well as a way to load it from storage.
//!
//! Separated out to allow for use in other utilities.
#![deny(missing_docs)]

pub use grouplist_storage as gs;

mod group;
pub use group::{Group, GroupName};

mod track;
pub use track::{Track, TrackName};

/// The output of [`load_all`].
#[derive(Debug, Default)]
pub struct LoadAllOutput {
    /// The groups that were loaded.
    pub groups: Vec<Group>,
    /// The tracks that were loaded.
    pub tracks: Vec<Track>,
}

/// Loads all groups and tracks from storage.
///
/// Both loads run concurrently and both must succeed; if either fails, nothing
/// is returned.
pub async fn load_all(storage: &impl gs::Storage) -> gs::StorageResult<LoadAllOutput> {
    let (groups, tracks) =
        futures::future::try_join(storage.load_all_groups(), storage.load_all_tracks()).await?;

    Ok(LoadAllOutput {
        groups: groups.into_iter().map(Group::from).collect(),
        tracks: tracks.into_iter().map(Track::from).collect(),
    })
}
