//! Key-value store abstraction.
//!
//! The router never owns a global store: a [`Store`] handle is injected at
//! construction, so independent router scopes can share one medium (with
//! distinct keys) or use separate ones.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::Result;

// ============================================================================
// Store Trait
// ============================================================================

/// A string-keyed store that survives reloads within one browsing context.
///
/// Implementations must be cheap to call from the dispatch path; they are
/// invoked while the router's state lock is held.
pub trait Store: Send + Sync {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`](crate::Error::Storage) if the medium
    /// rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`.
    fn remove(&self, key: &str);
}

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory [`Store`], cleared when dropped.
///
/// Models session-scoped storage: contents outlive any router built on it,
/// but not the process.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns `true` if nothing is stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Removes every key.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.write().remove(key);
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("len", &self.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("missing").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "1").unwrap();
        store.set("k", "2").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("2"));
    }

    #[test]
    fn test_remove_and_clear() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        store.remove("a");
        assert!(store.get("a").is_none());

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_is_object_safe() {
        let store: Box<dyn Store> = Box::new(MemoryStore::new());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
    }
}
