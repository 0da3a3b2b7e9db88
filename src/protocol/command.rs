//! Command definitions for the tab reducer.
//!
//! The vocabulary is closed: every transition of a
//! [`TabListState`](crate::TabListState) is one of these commands.
//!
//! # Commands
//!
//! | Command | Wire name | Effect |
//! |---------|-----------|--------|
//! | [`Command::Open`] | `OPEN` | Open or refresh a tab, activate it |
//! | [`Command::Replace`] | `REPLACE` | Activate the path, or overwrite the active slot |
//! | [`Command::Close`] | `CLOSE` | Remove a tab (never the last one) |
//! | [`Command::CloseOthers`] | `CLOSE_OTHERS` | Keep only one tab |
//! | [`Command::SwitchTo`] | `SWITCH_TO` | Activate an open tab |
//! | [`Command::Reorder`] | `REORDER` | Move a tab and activate it |
//! | [`Command::UpdateParams`] | `UPDATE_PARAMS` | Replace a tab's params, activate it |

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::tab::{Params, Tab};

// ============================================================================
// Command
// ============================================================================

/// A single state transition request.
///
/// Serializes as `{"type": "OPEN", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Command {
    /// Open a tab, or refresh the existing tab with the same path in place.
    Open(Tab),

    /// Activate the tab with the same path, or overwrite the active tab.
    Replace(Tab),

    /// Close the tab with `path`.
    Close {
        /// Path of the tab to close.
        path: String,
    },

    /// Close every tab except the one with `path`.
    CloseOthers {
        /// Path of the tab to keep.
        path: String,
    },

    /// Activate the tab with `path`.
    SwitchTo {
        /// Path of the tab to activate.
        path: String,
    },

    /// Move the tab at `from` to `to`.
    Reorder {
        /// Current index of the tab.
        #[serde(rename = "fromIndex")]
        from: usize,
        /// Target index of the tab.
        #[serde(rename = "toIndex")]
        to: usize,
    },

    /// Replace the params of the tab with `path`.
    UpdateParams {
        /// Path of the tab to update.
        path: String,
        /// New parameters, replacing the old ones entirely.
        params: Params,
    },
}

// ============================================================================
// Constructors
// ============================================================================

impl Command {
    /// Creates an open command.
    #[inline]
    #[must_use]
    pub fn open(tab: impl Into<Tab>) -> Self {
        Self::Open(tab.into())
    }

    /// Creates a replace command.
    #[inline]
    #[must_use]
    pub fn replace(tab: impl Into<Tab>) -> Self {
        Self::Replace(tab.into())
    }

    /// Creates a close command.
    #[inline]
    #[must_use]
    pub fn close(path: impl Into<String>) -> Self {
        Self::Close { path: path.into() }
    }

    /// Creates a close-others command.
    #[inline]
    #[must_use]
    pub fn close_others(path: impl Into<String>) -> Self {
        Self::CloseOthers { path: path.into() }
    }

    /// Creates a switch command.
    #[inline]
    #[must_use]
    pub fn switch_to(path: impl Into<String>) -> Self {
        Self::SwitchTo { path: path.into() }
    }

    /// Creates a reorder command.
    #[inline]
    #[must_use]
    pub const fn reorder(from: usize, to: usize) -> Self {
        Self::Reorder { from, to }
    }

    /// Creates an update-params command.
    #[inline]
    #[must_use]
    pub fn update_params(path: impl Into<String>, params: Params) -> Self {
        Self::UpdateParams {
            path: path.into(),
            params,
        }
    }
}

// ============================================================================
// Accessors
// ============================================================================

impl Command {
    /// Returns the wire name, used as a log field.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Open(_) => "OPEN",
            Self::Replace(_) => "REPLACE",
            Self::Close { .. } => "CLOSE",
            Self::CloseOthers { .. } => "CLOSE_OTHERS",
            Self::SwitchTo { .. } => "SWITCH_TO",
            Self::Reorder { .. } => "REORDER",
            Self::UpdateParams { .. } => "UPDATE_PARAMS",
        }
    }

    /// Returns the path this command targets, if any.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Open(tab) | Self::Replace(tab) => Some(&tab.path),
            Self::Close { path }
            | Self::CloseOthers { path }
            | Self::SwitchTo { path }
            | Self::UpdateParams { path, .. } => Some(path),
            Self::Reorder { .. } => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_open_wire_format() {
        let command = Command::open(Tab::new("/a").with_param("id", 5));
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(
            value,
            json!({"type": "OPEN", "payload": {"path": "/a", "params": {"id": 5}}})
        );
    }

    #[test]
    fn test_reorder_wire_format() {
        let value = serde_json::to_value(Command::reorder(0, 2)).unwrap();
        assert_eq!(
            value,
            json!({"type": "REORDER", "payload": {"fromIndex": 0, "toIndex": 2}})
        );
    }

    #[test]
    fn test_close_others_deserializes() {
        let command: Command =
            serde_json::from_value(json!({"type": "CLOSE_OTHERS", "payload": {"path": "/b"}}))
                .unwrap();
        assert_eq!(command, Command::close_others("/b"));
    }

    #[test]
    fn test_name_matches_wire_tag() {
        let commands = [
            Command::open(Tab::new("/")),
            Command::replace(Tab::new("/")),
            Command::close("/"),
            Command::close_others("/"),
            Command::switch_to("/"),
            Command::reorder(0, 0),
            Command::update_params("/", Params::new()),
        ];

        for command in commands {
            let value = serde_json::to_value(&command).unwrap();
            assert_eq!(value["type"], command.name());
        }
    }

    #[test]
    fn test_path_accessor() {
        assert_eq!(Command::switch_to("/x").path(), Some("/x"));
        assert_eq!(Command::reorder(1, 0).path(), None);
    }
}
