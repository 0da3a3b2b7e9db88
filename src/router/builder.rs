//! Builder pattern for router construction.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use tab_router::{MemoryStore, TabRouter};
//!
//! # fn example() -> tab_router::Result<()> {
//! let store = Arc::new(MemoryStore::new());
//!
//! let router = TabRouter::builder()
//!     .store(store)
//!     .storage_key("app:tabs")
//!     .active_tab_storage_key("app:active")
//!     .initial_path("/home")
//!     .build()?;
//!
//! assert_eq!(router.pathname(), "/home");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::storage::{MemoryStore, Store};

use super::core::TabRouter;
use super::options::RouterOptions;

// ============================================================================
// RouterBuilder
// ============================================================================

/// Builder for configuring a [`TabRouter`].
///
/// Use [`TabRouter::builder()`] to create a new builder.
#[derive(Default, Clone)]
pub struct RouterBuilder {
    /// Router options.
    options: RouterOptions,
    /// Injected store; a fresh [`MemoryStore`] when unset.
    store: Option<Arc<dyn Store>>,
    /// Skip the snapshot read at construction.
    deferred: bool,
}

impl fmt::Debug for RouterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterBuilder")
            .field("options", &self.options)
            .field("has_store", &self.store.is_some())
            .field("deferred", &self.deferred)
            .finish()
    }
}

// ============================================================================
// RouterBuilder Implementation
// ============================================================================

impl RouterBuilder {
    /// Creates a builder with default options.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all options at once.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: RouterOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the tab list storage key.
    #[inline]
    #[must_use]
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.options.storage_key = key.into();
        self
    }

    /// Sets the active index storage key.
    #[inline]
    #[must_use]
    pub fn active_tab_storage_key(mut self, key: impl Into<String>) -> Self {
        self.options.active_tab_storage_key = key.into();
        self
    }

    /// Sets the path of the tab synthesized when nothing is persisted.
    #[inline]
    #[must_use]
    pub fn initial_path(mut self, path: impl Into<String>) -> Self {
        self.options.initial_path = path.into();
        self
    }

    /// Injects the store the router persists to.
    #[inline]
    #[must_use]
    pub fn store(mut self, store: Arc<dyn Store>) -> Self {
        self.store = Some(store);
        self
    }

    /// Starts from the default state without reading the store.
    ///
    /// For stores that only become available after construction. Call
    /// [`TabRouter::rehydrate`] once they are.
    #[inline]
    #[must_use]
    pub fn defer_rehydration(mut self) -> Self {
        self.deferred = true;
        self
    }

    /// Builds the router.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the options are
    /// invalid.
    pub fn build(self) -> Result<TabRouter> {
        self.options.validate()?;

        let store: Arc<dyn Store> = match self.store {
            Some(store) => store,
            None => Arc::new(MemoryStore::new()),
        };

        Ok(TabRouter::new(self.options, store, self.deferred))
    }
}

// ============================================================================
// Tests
// ============================================================================
