//! Tab-list state machine.
//!
//! This module defines the closed command vocabulary and the pure reducer
//! that applies it.
//!
//! # Overview
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Command`] | One requested transition |
//! | [`Transition`] | `Changed(state)` or `Unchanged` |
//! | [`reduce`] | `(state, command) -> transition` |
//!
//! # Example
//!
//! ```
//! use tab_router::protocol::{Command, reduce};
//! use tab_router::{Tab, TabListState};
//!
//! let state = TabListState::initial("/");
//! let next = reduce(&state, Command::open(Tab::new("/a"))).resolve(&state);
//! assert_eq!(next.active_index(), 1);
//!
//! // Closing the last remaining tab is a silent no-op.
//! let solo = TabListState::initial("/");
//! assert!(!reduce(&solo, Command::close("/")).is_changed());
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Command definitions.
pub mod command;

/// The pure transition function.
pub mod reducer;

// ============================================================================
// Re-exports
// ============================================================================

pub use command::Command;
pub use reducer::{Transition, reduce};
