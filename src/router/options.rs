//! Router configuration.
//!
//! Options can be set fluently or deserialized from JSON using the
//! camelCase names below.
//!
//! | Option | Default |
//! |--------|---------|
//! | `storageKey` | [`DEFAULT_STORAGE_KEY`] |
//! | `activeTabStorageKey` | [`DEFAULT_ACTIVE_TAB_STORAGE_KEY`] |
//! | `initialPath` | [`DEFAULT_INITIAL_PATH`] |
//!
//! # Example
//!
//! ```
//! use tab_router::RouterOptions;
//!
//! let options = RouterOptions::new()
//!     .with_storage_key("admin:tabs")
//!     .with_active_tab_storage_key("admin:active")
//!     .with_initial_path("/dashboard");
//!
//! assert!(options.validate().is_ok());
//!
//! let parsed = RouterOptions::from_json(r#"{"initialPath": "/dashboard"}"#).unwrap();
//! assert_eq!(parsed.storage_key, "tab-router:tabs");
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default key for the persisted tab list.
pub const DEFAULT_STORAGE_KEY: &str = "tab-router:tabs";

/// Default key for the persisted active index.
pub const DEFAULT_ACTIVE_TAB_STORAGE_KEY: &str = "tab-router:active-tab";

/// Default path of the synthesized first tab.
pub const DEFAULT_INITIAL_PATH: &str = "/";

// ============================================================================
// RouterOptions
// ============================================================================

/// Configuration for one router scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouterOptions {
    /// Key under which the tab list is persisted.
    pub storage_key: String,

    /// Key under which the active index is persisted.
    pub active_tab_storage_key: String,

    /// Path of the tab synthesized when nothing is persisted.
    pub initial_path: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            active_tab_storage_key: DEFAULT_ACTIVE_TAB_STORAGE_KEY.to_string(),
            initial_path: DEFAULT_INITIAL_PATH.to_string(),
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl RouterOptions {
    /// Creates options with default settings.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from JSON; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the input is not a valid options object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl RouterOptions {
    /// Sets the tab list storage key.
    #[inline]
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the active index storage key.
    #[inline]
    #[must_use]
    pub fn with_active_tab_storage_key(mut self, key: impl Into<String>) -> Self {
        self.active_tab_storage_key = key.into();
        self
    }

    /// Sets the initial path.
    #[inline]
    #[must_use]
    pub fn with_initial_path(mut self, path: impl Into<String>) -> Self {
        self.initial_path = path.into();
        self
    }
}

// ============================================================================
// Validation
// ============================================================================

impl RouterOptions {
    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a storage key is empty, both keys are
    /// equal, or the initial path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(Error::config("storageKey must not be empty"));
        }

        if self.active_tab_storage_key.is_empty() {
            return Err(Error::config("activeTabStorageKey must not be empty"));
        }

        if self.storage_key == self.active_tab_storage_key {
            return Err(Error::config(format!(
                "storageKey and activeTabStorageKey must differ (both are '{}')",
                self.storage_key
            )));
        }

        if self.initial_path.is_empty() {
            return Err(Error::config("initialPath must not be empty"));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
