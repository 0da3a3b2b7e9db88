//! Reload-durable persistence.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Store`] | String-keyed store contract |
//! | [`MemoryStore`] | Thread-safe in-memory store |
//! | [`PersistenceAdapter`] | Snapshot codec over a store and two keys |

// ============================================================================
// Submodules
// ============================================================================

/// Snapshot load/save.
pub mod persistence;

/// Store trait and in-memory implementation.
pub mod store;

// ============================================================================
// Re-exports
// ============================================================================

pub use persistence::PersistenceAdapter;
pub use store::{MemoryStore, Store};
