//! Snapshot persistence boundary.
//!
//! Every table owns exactly one [`SnapshotKey`] and stores its whole contents
//! as a single JSON document under that key. Adapters only move opaque
//! strings around; encoding and decoding live here so that each table loads
//! and saves the same way.
//!
//! # Adapters
//!
//! - [`MemoryStore`] - a map held in memory (tests, throwaway sessions)
//! - [`FileStore`] - one `<key>.json` file per key in a data directory

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors raised by snapshot adapters.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Reading or writing the underlying medium failed.
    #[error("i/o error on snapshot '{key}': {source}")]
    Io {
        /// Snapshot key being accessed.
        key: SnapshotKey,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data directory could not be prepared.
    #[error("cannot open data directory {path}: {source}")]
    Directory {
        /// Directory path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A table could not be encoded as JSON.
    #[error("cannot encode snapshot '{key}': {source}")]
    Encode {
        /// Snapshot key being written.
        key: SnapshotKey,
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

/// Logical snapshot keys, one per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotKey {
    Catalog,
    Cart,
    Wishlist,
    Orders,
    Messages,
    /// Admin back-office sign-in flag.
    AdminAuth,
    /// Demo customer sign-in.
    Customer,
}

impl SnapshotKey {
    /// Every key, in the order tables are opened.
    pub const ALL: [Self; 7] = [
        Self::Catalog,
        Self::Cart,
        Self::Wishlist,
        Self::Orders,
        Self::Messages,
        Self::AdminAuth,
        Self::Customer,
    ];

    /// Storage name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Cart => "cart",
            Self::Wishlist => "wishlist",
            Self::Orders => "orders",
            Self::Messages => "messages",
            Self::AdminAuth => "admin_auth",
            Self::Customer => "customer",
        }
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage backend for table snapshots.
///
/// Implementations overwrite unconditionally on `save`; there is no
/// versioning or compare-and-swap.
pub trait SnapshotStore: Send + Sync {
    /// Load the snapshot saved under `key`, or `None` on first run.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Io` if the medium cannot be read.
    fn load(&self, key: SnapshotKey) -> Result<Option<String>, PersistenceError>;

    /// Replace the snapshot saved under `key`.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Io` if the medium cannot be written.
    fn save(&self, key: SnapshotKey, snapshot: &str) -> Result<(), PersistenceError>;

    /// Forget the snapshot saved under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Io` if the medium cannot be written.
    fn remove(&self, key: SnapshotKey) -> Result<(), PersistenceError>;
}

/// Where a table's initial contents came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from a saved snapshot.
    Snapshot,
    /// No snapshot existed; the fallback was used.
    Missing,
    /// A snapshot existed but could not be decoded; the fallback was used.
    Corrupt,
}

/// Load and decode the snapshot for `key`, falling back when it is absent or unreadable.
///
/// A corrupt snapshot is logged and replaced by `fallback()`; it is never
/// surfaced as an error. Only adapter failures propagate.
pub(crate) fn load_or_else<T, F>(
    storage: &dyn SnapshotStore,
    key: SnapshotKey,
    fallback: F,
) -> Result<(T, LoadSource), PersistenceError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = storage.load(key)? else {
        debug!(key = %key, "No snapshot found, using defaults");
        return Ok((fallback(), LoadSource::Missing));
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok((value, LoadSource::Snapshot)),
        Err(e) => {
            warn!(key = %key, error = %e, "Failed to parse snapshot, using defaults");
            Ok((fallback(), LoadSource::Corrupt))
        }
    }
}

/// Encode `value` and save it under `key`.
pub(crate) fn persist<T>(
    storage: &dyn SnapshotStore,
    key: SnapshotKey,
    value: &T,
) -> Result<(), PersistenceError>
where
    T: Serialize + ?Sized,
{
    let snapshot =
        serde_json::to_string(value).map_err(|source| PersistenceError::Encode { key, source })?;
    storage.save(key, &snapshot)?;
    debug!(key = %key, bytes = snapshot.len(), "Snapshot saved");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_uses_fallback() {
        let storage = MemoryStore::new();
        let (value, source): (Vec<u32>, _) =
            load_or_else(&storage, SnapshotKey::Cart, || vec![7]).unwrap();
        assert_eq!(value, vec![7]);
        assert_eq!(source, LoadSource::Missing);
    }

    #[test]
    fn test_load_corrupt_uses_fallback() {
        let storage = MemoryStore::new();
        storage.save(SnapshotKey::Wishlist, "{not json").unwrap();

        let (value, source): (Vec<u32>, _) =
            load_or_else(&storage, SnapshotKey::Wishlist, Vec::new).unwrap();
        assert!(value.is_empty());
        assert_eq!(source, LoadSource::Corrupt);
    }

    #[test]
    fn test_persist_then_load() {
        let storage = MemoryStore::new();
        persist(&storage, SnapshotKey::Orders, &[1_u32, 2, 3]).unwrap();

        let (value, source): (Vec<u32>, _) =
            load_or_else(&storage, SnapshotKey::Orders, Vec::new).unwrap();
        assert_eq!(value, vec![1, 2, 3]);
        assert_eq!(source, LoadSource::Snapshot);
    }

    #[test]
    fn test_keys_have_distinct_names() {
        let mut names: Vec<_> = SnapshotKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SnapshotKey::ALL.len());
    }
}
