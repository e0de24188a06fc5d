//! In-memory snapshot adapter.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{PersistenceError, SnapshotKey, SnapshotStore};

/// Snapshot adapter backed by a map in memory.
///
/// Nothing survives the process, but every table still round-trips through
/// JSON, so it behaves exactly like the file adapter apart from durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshots: Mutex<HashMap<SnapshotKey, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw snapshot text saved under `key`, for inspection in tests and tools.
    #[must_use]
    pub fn raw(&self, key: SnapshotKey) -> Option<String> {
        self.lock().get(&key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SnapshotKey, String>> {
        // A panic mid-insert cannot leave a half-written String behind.
        self.snapshots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self, key: SnapshotKey) -> Result<Option<String>, PersistenceError> {
        Ok(self.lock().get(&key).cloned())
    }

    fn save(&self, key: SnapshotKey, snapshot: &str) -> Result<(), PersistenceError> {
        self.lock().insert(key, snapshot.to_owned());
        Ok(())
    }

    fn remove(&self, key: SnapshotKey) -> Result<(), PersistenceError> {
        self.lock().remove(&key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        store.save(SnapshotKey::Cart, "[]").unwrap();
        store.save(SnapshotKey::Cart, "[1]").unwrap();
        assert_eq!(store.load(SnapshotKey::Cart).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();
        store.save(SnapshotKey::Cart, "[]").unwrap();
        assert!(store.load(SnapshotKey::Wishlist).unwrap().is_none());
    }

    #[test]
    fn test_remove_missing_is_ok() {
        let store = MemoryStore::new();
        store.remove(SnapshotKey::AdminAuth).unwrap();
        store.save(SnapshotKey::AdminAuth, "true").unwrap();
        store.remove(SnapshotKey::AdminAuth).unwrap();
        assert!(store.raw(SnapshotKey::AdminAuth).is_none());
    }
}
