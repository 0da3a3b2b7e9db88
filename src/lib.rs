//! Tab Router - in-memory tab list routing for single-page applications.
//!
//! Routes are kept as an ordered list of open tabs rather than browser
//! history entries. Several logical pages coexist, one is active, and
//! switching between them never tears a page down.
//!
//! # Architecture
//!
//! ```text
//! navigation intent ──▶ TabRouter ──▶ Command ──▶ reduce() ──▶ TabListState
//!  (Link / call)        (facade)                   (pure)          │
//!                                                                  ├──▶ PersistenceAdapter ──▶ Store
//!                                                                  └──▶ listeners
//! ```
//!
//! Key design principles:
//!
//! - A tab's `path` is its identity: at most one tab per path
//! - `reduce` is pure; failed preconditions are silent no-ops
//! - Every state change is persisted; no-ops never touch the store
//! - The store is injected per router, never global
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use tab_router::{Destination, MemoryStore, Result, TabRouter};
//!
//! fn main() -> Result<()> {
//!     let store = Arc::new(MemoryStore::new());
//!     let router = TabRouter::builder().store(store.clone()).build()?;
//!
//!     router.push("/users");
//!     router.push(Destination::new("/users/42").with_param("tab", "activity"));
//!     router.switch_to_path("/users");
//!     assert_eq!(router.pathname(), "/users");
//!
//!     // A new router over the same store picks up where this one left off.
//!     let restored = TabRouter::builder().store(store).build()?;
//!     assert_eq!(restored.tabs(), router.tabs());
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`tab`] | [`Tab`], [`TabListState`], [`Destination`] |
//! | [`protocol`] | [`Command`] vocabulary and the pure reducer |
//! | [`router`] | [`TabRouter`] facade, builder, options, scope |
//! | [`storage`] | [`Store`] contract and snapshot persistence |
//! | [`link`] | Link resolution and click interception |
//! | [`scroll`] | Deferred fragment scrolling |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |

// ============================================================================
// Modules
// ============================================================================

/// Error types and result aliases.
pub mod error;

/// Type-safe identifiers.
pub mod identifiers;

/// Navigation links.
pub mod link;

/// Command vocabulary and reducer.
pub mod protocol;

/// Router facade and configuration.
pub mod router;

/// Deferred fragment scrolling.
pub mod scroll;

/// Store contract and persistence.
pub mod storage;

/// Tab entities and state.
pub mod tab;

// ============================================================================
// Re-exports
// ============================================================================

// Tab types
pub use tab::{Destination, ParamValue, Params, Tab, TabListState};

// State machine
pub use protocol::{Command, Transition, reduce};

// Router types
pub use router::{RouterBuilder, RouterOptions, RouterScope, TabRouter};

// Storage types
pub use storage::{MemoryStore, PersistenceAdapter, Store};

// Link types
pub use link::{ClickEvent, Link, LinkAction, LinkTarget};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{ScopeId, SubscriptionId};
