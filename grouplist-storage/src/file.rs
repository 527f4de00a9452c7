use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::{GroupRecord, Storage, StorageError, StorageResult, TrackRecord};

/// Reads groups and tracks from a directory of TOML files.
///
/// ```text
/// <data_dir>/groups/<group name>.toml
/// <data_dir>/tracks/<track name>.toml
/// ```
///
/// A missing `groups` or `tracks` directory is treated as an empty set.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}
impl FileStorage {
    /// The subdirectory holding one file per group.
    pub const GROUPS_DIR: &str = "groups";
    /// The subdirectory holding one file per track.
    pub const TRACKS_DIR: &str = "tracks";

    /// Create a storage rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}
impl Storage for FileStorage {
    async fn load_all_groups(&self) -> StorageResult<Vec<GroupRecord>> {
        let records = read_records::<GroupRecord>(&self.data_dir.join(Self::GROUPS_DIR)).await?;
        Ok(records
            .into_iter()
            .map(|(name, record)| GroupRecord { name, ..record })
            .collect())
    }

    async fn load_all_tracks(&self) -> StorageResult<Vec<TrackRecord>> {
        let records = read_records::<TrackRecord>(&self.data_dir.join(Self::TRACKS_DIR)).await?;
        Ok(records
            .into_iter()
            .map(|(name, record)| TrackRecord { name, ..record })
            .collect())
    }
}

/// Reads every `*.toml` file in `dir`, returning `(file stem, parsed body)` pairs
/// sorted by file name.
async fn read_records<T: DeserializeOwned>(dir: &Path) -> StorageResult<Vec<(String, T)>> {
    let io_err = |source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("{} does not exist, treating as empty", dir.display());
            return Ok(vec![]);
        }
        Err(e) => return Err(io_err(e)),
    };

    let mut paths = vec![];
    while let Some(entry) = entries.next_entry().await.map_err(io_err)? {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            tracing::warn!("skipping {}: file name is not valid UTF-8", path.display());
            continue;
        };
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(source) => return Err(StorageError::Io { path, source }),
        };
        let record = match toml::from_str(&contents) {
            Ok(record) => record,
            Err(source) => return Err(StorageError::Parse { path, source }),
        };
        records.push((name, record));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, relative: &str, contents: &str) {
        let path = dir.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_loads_groups_and_tracks() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "groups/admin.toml", "weight = 10\ndisplay_name = \"Admins\"\n");
        write(dir.path(), "groups/default.toml", "");
        write(dir.path(), "groups/notes.txt", "not a group");
        write(dir.path(), "tracks/staff.toml", "groups = [\"mod\", \"admin\"]\n");

        let storage = FileStorage::new(dir.path());
        let groups = storage.load_all_groups().await.unwrap();
        assert_eq!(
            groups,
            vec![
                GroupRecord {
                    name: "admin".to_string(),
                    display_name: Some("Admins".to_string()),
                    weight: Some(10),
                },
                GroupRecord {
                    name: "default".to_string(),
                    display_name: None,
                    weight: None,
                },
            ]
        );

        let tracks = storage.load_all_tracks().await.unwrap();
        assert_eq!(
            tracks,
            vec![TrackRecord {
                name: "staff".to_string(),
                groups: vec!["mod".to_string(), "admin".to_string()],
            }]
        );
    }

    #[tokio::test]
    async fn test_missing_directories_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nowhere"));
        assert!(storage.load_all_groups().await.unwrap().is_empty());
        assert!(storage.load_all_tracks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_parse_failure_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "groups/broken.toml", "weight = \"heavy\"\n");

        let err = FileStorage::new(dir.path())
            .load_all_groups()
            .await
            .unwrap_err();
        match err {
            StorageError::Parse { path, .. } => assert!(path.ends_with("groups/broken.toml")),
            other => panic!("expected a parse error, got {other:?}"),
        }
    }
}
