//! Navigation links.
//!
//! Decides whether a user-initiated navigation reaches the router at all,
//! and if so which operation it becomes.
//!
//! | Module | Description |
//! |--------|-------------|
//! | `click` | [`ClickEvent`] and [`should_intercept`] |
//! | `resolver` | [`Link`], [`LinkTarget`], [`LinkAction`], [`resolve`] |

// ============================================================================
// Submodules
// ============================================================================

mod click;
mod resolver;

// ============================================================================
// Re-exports
// ============================================================================

pub use click::{ClickEvent, MouseButton, should_intercept};
pub use resolver::{Link, LinkAction, LinkTarget, resolve};
