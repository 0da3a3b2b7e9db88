//! Tab entities and the tab-list state.
//!
//! # Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | `core` | [`Tab`], [`ParamValue`], [`Params`] |
//! | `destination` | [`Destination`] normalization and href parsing |
//! | `state` | [`TabListState`] and its invariants |
//!
//! # Example
//!
//! ```
//! use tab_router::{Destination, Tab, TabListState};
//!
//! let state = TabListState::new(vec![Tab::new("/"), Tab::new("/users")], 1).unwrap();
//! assert_eq!(state.active_tab().map(|t| t.path.as_str()), Some("/users"));
//!
//! let dest = Destination::parse("/users?id=5#profile").unwrap();
//! assert_eq!(dest.to_tab(), Tab::new("/users").with_param("id", 5));
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod core;
mod destination;
mod state;

// ============================================================================
// Re-exports
// ============================================================================

pub use self::core::{ParamValue, Params, Tab};
pub use destination::Destination;
pub use state::TabListState;
