use std::{future::Future, path::PathBuf};

use crate::{GroupRecord, TrackRecord};

#[derive(Debug)]
/// An error that can occur when loading from storage.
pub enum StorageError {
    /// An I/O error occurred while reading a path.
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// A stored record could not be parsed.
    Parse {
        /// The path of the offending record.
        path: PathBuf,
        /// The underlying error.
        source: toml::de::Error,
    },
    /// The backend refused to serve the request.
    Unavailable(String),
}
impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io { path, source } => {
                write!(f, "I/O error reading {}: {source}", path.display())
            }
            StorageError::Parse { path, source } => {
                write!(f, "Failed to parse {}: {source}", path.display())
            }
            StorageError::Unavailable(reason) => write!(f, "Storage unavailable: {reason}"),
        }
    }
}
impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io { source, .. } => Some(source),
            StorageError::Parse { source, .. } => Some(source),
            StorageError::Unavailable(_) => None,
        }
    }
}
/// A result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A source of groups and tracks.
///
/// Each call returns the complete set as currently persisted; callers are
/// expected to replace whatever they held before, never merge.
pub trait Storage: Send + Sync {
    /// Loads every group.
    fn load_all_groups(&self) -> impl Future<Output = StorageResult<Vec<GroupRecord>>> + Send;

    /// Loads every track.
    fn load_all_tracks(&self) -> impl Future<Output = StorageResult<Vec<TrackRecord>>> + Send;
}
