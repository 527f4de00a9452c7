//! The in-memory group and track stores, and keeping them in sync with storage.

use std::{
    collections::BTreeMap,
    sync::{
        Arc, RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use grouplist_state::{Group, LoadAllOutput, Track, gs};
use smol_str::SmolStr;

/// Every group and track as of one successful load.
///
/// Both maps are keyed by lowercase name, so iteration order is stable.
#[derive(Debug, Default)]
pub struct CatalogSnapshot {
    groups: BTreeMap<SmolStr, Arc<Group>>,
    tracks: BTreeMap<SmolStr, Arc<Track>>,
}
impl CatalogSnapshot {
    /// Builds a snapshot. When two entities share a name ignoring case, the later one wins.
    pub fn new(groups: Vec<Group>, tracks: Vec<Track>) -> Self {
        let mut snapshot = CatalogSnapshot::default();
        for group in groups {
            let key = group.name.to_lowercase();
            if snapshot.groups.insert(key, Arc::new(group)).is_some() {
                tracing::warn!("duplicate group name in storage, keeping the last one");
            }
        }
        for track in tracks {
            let key = track.name.to_lowercase();
            if snapshot.tracks.insert(key, Arc::new(track)).is_some() {
                tracing::warn!("duplicate track name in storage, keeping the last one");
            }
        }
        snapshot
    }

    pub fn groups(&self) -> impl Iterator<Item = &Arc<Group>> {
        self.groups.values()
    }

    pub fn tracks(&self) -> impl Iterator<Item = &Arc<Track>> {
        self.tracks.values()
    }

    /// Looks up a group by name, ignoring case.
    pub fn group(&self, name: &str) -> Option<&Arc<Group>> {
        self.groups.get(name.to_lowercase().as_str())
    }

    /// Looks up a track by name, ignoring case.
    pub fn track(&self, name: &str) -> Option<&Arc<Track>> {
        self.tracks.get(name.to_lowercase().as_str())
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}
impl From<LoadAllOutput> for CatalogSnapshot {
    fn from(output: LoadAllOutput) -> Self {
        CatalogSnapshot::new(output.groups, output.tracks)
    }
}

/// The group and track stores, backed by a [`gs::Storage`].
///
/// [`Catalog::refresh`] is the only writer and always swaps in a whole new snapshot;
/// readers take an [`Arc`] to the snapshot that was current when they asked.
///
/// Each refresh takes a generation number when it starts. A snapshot is only installed
/// over one from an older generation, so a slow refresh cannot undo a newer one.
pub struct Catalog<S> {
    storage: S,
    next_generation: AtomicU64,
    snapshot: RwLock<(u64, Arc<CatalogSnapshot>)>,
}
impl<S: gs::Storage> Catalog<S> {
    /// Create a catalog with an empty snapshot. Nothing is loaded until the first refresh.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            next_generation: AtomicU64::new(1),
            snapshot: RwLock::new((0, Arc::new(CatalogSnapshot::default()))),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        self.snapshot
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .1
            .clone()
    }

    /// Reloads all groups and tracks from storage, returning whether it succeeded.
    ///
    /// On failure the previous snapshot stays in place. The new snapshot is only
    /// installed once both loads have finished, so dropping this future part-way
    /// leaves the catalog untouched.
    pub async fn refresh(&self) -> bool {
        match self.try_refresh().await {
            Ok(snapshot) => {
                tracing::info!(
                    "loaded {} groups and {} tracks",
                    snapshot.group_count(),
                    snapshot.track_count()
                );
                true
            }
            Err(e) => {
                tracing::warn!("failed to load groups and tracks: {e}");
                false
            }
        }
    }

    /// Like [`Catalog::refresh`], returning the current snapshot or the storage error.
    ///
    /// If a refresh that started later has already installed its snapshot, this one's
    /// result is discarded and the newer snapshot is returned.
    pub async fn try_refresh(&self) -> gs::StorageResult<Arc<CatalogSnapshot>> {
        let generation = self.next_generation.fetch_add(1, Ordering::SeqCst);
        let output = grouplist_state::load_all(&self.storage).await?;
        let snapshot = Arc::new(CatalogSnapshot::from(output));

        let mut installed = self.snapshot.write().unwrap_or_else(|e| e.into_inner());
        if generation > installed.0 {
            *installed = (generation, snapshot);
        } else {
            tracing::debug!(
                "discarding refresh {generation}, refresh {} is newer",
                installed.0
            );
        }
        Ok(installed.1.clone())
    }
}
