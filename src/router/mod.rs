//! Tab router module.
//!
//! This module provides the state container and the navigation facade.
//!
//! # Components
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TabRouter`] | State container, dispatch, navigation facade |
//! | [`RouterBuilder`] | Fluent configuration builder |
//! | [`RouterOptions`] | Storage keys and initial path |
//! | [`RouterScope`] | Scoped access to a router |
//!
//! # Example
//!
//! ```
//! use tab_router::{Result, TabRouter};
//!
//! # fn example() -> Result<()> {
//! let router = TabRouter::builder().initial_path("/inbox").build()?;
//!
//! router.push("/compose");
//! router.push("/settings");
//! router.close_path("/compose");
//!
//! assert_eq!(router.pathname(), "/settings");
//! router.back();
//! assert_eq!(router.pathname(), "/inbox");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Fluent builder pattern for router configuration.
pub mod builder;

/// Core router implementation.
pub mod core;

/// Navigation facade methods.
mod navigation;

/// Router configuration.
pub mod options;

/// Scoped router access.
pub mod scope;

// ============================================================================
// Re-exports
// ============================================================================

pub use self::core::TabRouter;
pub use builder::RouterBuilder;
pub use options::{
    DEFAULT_ACTIVE_TAB_STORAGE_KEY, DEFAULT_INITIAL_PATH, DEFAULT_STORAGE_KEY, RouterOptions,
};
pub use scope::RouterScope;
