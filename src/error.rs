//! Error types for Tab Router.
//!
//! This module defines all error types used throughout the crate.
//!
//! Most in-domain conditions never surface here: a command whose precondition
//! fails is a silent no-op, and a corrupt persisted snapshot falls back to the
//! default state. Errors are reserved for misconfiguration, misuse, and
//! failures of the external store.
//!
//! # Usage
//!
//! ```ignore
//! use tab_router::{Result, TabRouter};
//!
//! fn example() -> Result<()> {
//!     let router = TabRouter::builder().initial_path("/home").build()?;
//!     router.push("/settings");
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | State | [`Error::InvalidState`], [`Error::OutsideScope`] |
//! | Storage | [`Error::Storage`] |
//! | External | [`Error::Json`], [`Error::Url`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when router options are invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // State Errors
    // ========================================================================
    /// A tab list that violates its invariants.
    ///
    /// Returned when constructing a [`TabListState`](crate::TabListState)
    /// from parts with duplicate paths or an out-of-range active index.
    #[error("Invalid tab state: {message}")]
    InvalidState {
        /// Description of the violated invariant.
        message: String,
    },

    /// Router used outside of a scope that provides one.
    ///
    /// This is a wiring bug, not an expected empty case.
    #[error("{scope} used outside of its scope: no router has been provided")]
    OutsideScope {
        /// Name of the missing scope.
        scope: &'static str,
    },

    // ========================================================================
    // Storage Errors
    // ========================================================================
    /// Store write failed.
    #[error("Storage error for key '{key}': {message}")]
    Storage {
        /// Key being written.
        key: String,
        /// Description of the failure.
        message: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parse error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid state error.
    #[inline]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState {
            message: message.into(),
        }
    }

    /// Creates an outside-of-scope error.
    #[inline]
    pub fn outside_scope(scope: &'static str) -> Self {
        Self::OutsideScope { scope }
    }

    /// Creates a storage error.
    #[inline]
    pub fn storage(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this is a configuration error.
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    /// Returns `true` if this error came from the store or snapshot codec.
    #[inline]
    #[must_use]
    pub fn is_storage_error(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Json(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = Error::config("storage keys must differ");
        assert_eq!(
            err.to_string(),
            "Configuration error: storage keys must differ"
        );
        assert!(err.is_config_error());
        assert!(!err.is_storage_error());
    }

    #[test]
    fn test_outside_scope_names_scope() {
        let err = Error::outside_scope("TabRouter");
        assert!(err.to_string().contains("TabRouter"));
    }

    #[test]
    fn test_storage_error() {
        let err = Error::storage("tabs", "quota exceeded");
        assert_eq!(
            err.to_string(),
            "Storage error for key 'tabs': quota exceeded"
        );
        assert!(err.is_storage_error());
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_storage_error());
    }

    #[test]
    fn test_from_url_error() {
        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = url_err.into();
        assert!(matches!(err, Error::Url(_)));
    }
}
