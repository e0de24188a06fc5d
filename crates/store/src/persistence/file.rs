//! File-backed snapshot adapter.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{PersistenceError, SnapshotKey, SnapshotStore};

/// Snapshot adapter storing each key as `<dir>/<key>.json`.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous snapshot intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if necessary) a data directory.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Directory` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| PersistenceError::Directory {
            path: dir.display().to_string(),
            source,
        })?;
        debug!(dir = %dir.display(), "Opened snapshot directory");
        Ok(Self { dir })
    }

    /// The data directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: SnapshotKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl SnapshotStore for FileStore {
    fn load(&self, key: SnapshotKey) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PersistenceError::Io { key, source }),
        }
    }

    fn save(&self, key: SnapshotKey, snapshot: &str) -> Result<(), PersistenceError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, snapshot).map_err(|source| PersistenceError::Io { key, source })?;
        fs::rename(&tmp, &path).map_err(|source| PersistenceError::Io { key, source })
    }

    fn remove(&self, key: SnapshotKey) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(PersistenceError::Io { key, source }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_snapshot_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.load(SnapshotKey::Orders).unwrap().is_none());
    }

    #[test]
    fn test_save_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.save(SnapshotKey::Wishlist, "[]").unwrap();

        let on_disk = fs::read_to_string(dir.path().join("wishlist.json")).unwrap();
        assert_eq!(on_disk, "[]");
        assert!(!dir.path().join("wishlist.json.tmp").exists());
        assert_eq!(
            store.load(SnapshotKey::Wishlist).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn test_open_creates_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("store");
        let store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(store.dir(), nested.as_path());
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.remove(SnapshotKey::AdminAuth).unwrap();
        store.save(SnapshotKey::AdminAuth, "true").unwrap();
        store.remove(SnapshotKey::AdminAuth).unwrap();
        assert!(store.load(SnapshotKey::AdminAuth).unwrap().is_none());
    }
}
