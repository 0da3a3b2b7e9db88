//! Snapshot persistence for [`TabListState`].
//!
//! A snapshot is two store entries:
//!
//! | Key | Value |
//! |-----|-------|
//! | tabs key | JSON array of `{"path": ..., "params": {...}}` |
//! | active key | JSON integer |
//!
//! Loading is total: anything unreadable yields `None` and the caller falls
//! back to its default state.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::tab::{Tab, TabListState};

use super::Store;

// ============================================================================
// PersistenceAdapter
// ============================================================================

/// Reads and writes tab-list snapshots under a pair of keys.
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn Store>,
    tabs_key: String,
    active_key: String,
}

impl fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("tabs_key", &self.tabs_key)
            .field("active_key", &self.active_key)
            .finish_non_exhaustive()
    }
}

impl PersistenceAdapter {
    /// Creates an adapter over `store`.
    #[must_use]
    pub fn new(
        store: Arc<dyn Store>,
        tabs_key: impl Into<String>,
        active_key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            tabs_key: tabs_key.into(),
            active_key: active_key.into(),
        }
    }

    /// Returns the key holding the tab list.
    #[inline]
    #[must_use]
    pub fn tabs_key(&self) -> &str {
        &self.tabs_key
    }

    /// Returns the key holding the active index.
    #[inline]
    #[must_use]
    pub fn active_key(&self) -> &str {
        &self.active_key
    }
}

// ============================================================================
// PersistenceAdapter - Load
// ============================================================================

impl PersistenceAdapter {
    /// Loads the persisted snapshot.
    ///
    /// Returns `None` when no tab list is stored, or when the stored data is
    /// unparseable, empty, contains duplicate paths, or has an out-of-range
    /// active index. A missing or unparseable active index reads as `0`.
    #[must_use]
    pub fn load(&self) -> Option<TabListState> {
        let raw_tabs = self.store.get(&self.tabs_key)?;

        let tabs: Vec<Tab> = match serde_json::from_str(&raw_tabs) {
            Ok(tabs) => tabs,
            Err(e) => {
                warn!(key = %self.tabs_key, error = %e, "Discarding unreadable tab snapshot");
                return None;
            }
        };

        if tabs.is_empty() {
            debug!(key = %self.tabs_key, "Stored tab list is empty");
            return None;
        }

        let active_index = self.load_active_index();

        match TabListState::new(tabs, active_index) {
            Ok(state) => {
                debug!(
                    key = %self.tabs_key,
                    tabs = state.len(),
                    active_index = state.active_index(),
                    "Loaded tab snapshot"
                );
                Some(state)
            }
            Err(e) => {
                warn!(key = %self.tabs_key, error = %e, "Discarding invalid tab snapshot");
                None
            }
        }
    }

    /// Reads the active index, treating absent or corrupt values as `0`.
    fn load_active_index(&self) -> usize {
        let Some(raw) = self.store.get(&self.active_key) else {
            return 0;
        };

        match serde_json::from_str::<usize>(raw.trim()) {
            Ok(index) => index,
            Err(e) => {
                warn!(key = %self.active_key, error = %e, "Ignoring unreadable active index");
                0
            }
        }
    }
}

// ============================================================================
// PersistenceAdapter - Save
// ============================================================================

impl PersistenceAdapter {
    /// Writes `state` to the store.
    ///
    /// The tab list is written first. If the active index write then fails,
    /// the previous tab list is put back (or removed, if there was none) so
    /// the two keys never describe different snapshots.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`](crate::Error::Json) if the tabs cannot be serialized
    /// - [`Error::Storage`](crate::Error::Storage) if the store rejects a write
    pub fn save(&self, state: &TabListState) -> Result<()> {
        let tabs = serde_json::to_string(state.tabs())?;
        let active = serde_json::to_string(&state.active_index())?;

        let previous = self.store.get(&self.tabs_key);
        self.store.set(&self.tabs_key, &tabs)?;

        if let Err(e) = self.store.set(&self.active_key, &active) {
            self.restore_tabs(previous);
            return Err(e);
        }

        debug!(
            key = %self.tabs_key,
            tabs = state.len(),
            active_index = state.active_index(),
            "Saved tab snapshot"
        );
        Ok(())
    }

    fn restore_tabs(&self, previous: Option<String>) {
        match previous {
            Some(raw) => {
                if let Err(e) = self.store.set(&self.tabs_key, &raw) {
                    warn!(key = %self.tabs_key, error = %e, "Failed to restore previous tabs");
                }
            }
            None => self.store.remove(&self.tabs_key),
        }
    }

    /// Removes both entries from the store.
    pub fn clear(&self) {
        self.store.remove(&self.tabs_key);
        self.store.remove(&self.active_key);
    }
}

// ============================================================================
// Tests
// ============================================================================
