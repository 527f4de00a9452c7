use std::sync::{
    RwLock,
    atomic::{AtomicBool, Ordering},
};

use crate::{GroupRecord, Storage, StorageError, StorageResult, TrackRecord};

/// Storage that keeps its records in memory.
///
/// Useful for embedding and for exercising the failure path: while
/// [`MemoryStorage::set_failing`] is on, every load returns
/// [`StorageError::Unavailable`].
#[derive(Debug, Default)]
pub struct MemoryStorage {
    groups: RwLock<Vec<GroupRecord>>,
    tracks: RwLock<Vec<TrackRecord>>,
    failing: AtomicBool,
}
impl MemoryStorage {
    /// Create a storage holding the given records.
    pub fn new(groups: Vec<GroupRecord>, tracks: Vec<TrackRecord>) -> Self {
        Self {
            groups: RwLock::new(groups),
            tracks: RwLock::new(tracks),
            failing: AtomicBool::new(false),
        }
    }

    /// Replace the stored groups.
    pub fn set_groups(&self, groups: Vec<GroupRecord>) {
        *self.groups.write().unwrap_or_else(|e| e.into_inner()) = groups;
    }

    /// Replace the stored tracks.
    pub fn set_tracks(&self, tracks: Vec<TrackRecord>) {
        *self.tracks.write().unwrap_or_else(|e| e.into_inner()) = tracks;
    }

    /// Make subsequent loads fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> StorageResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(
                "memory storage is set to fail".to_string(),
            ));
        }
        Ok(())
    }
}
impl Storage for MemoryStorage {
    async fn load_all_groups(&self) -> StorageResult<Vec<GroupRecord>> {
        self.check_available()?;
        Ok(self.groups.read().unwrap_or_else(|e| e.into_inner()).clone())
    }

    async fn load_all_tracks(&self) -> StorageResult<Vec<TrackRecord>> {
        self.check_available()?;
        Ok(self.tracks.read().unwrap_or_else(|e| e.into_inner()).clone())
    }
}
