//! Router facade: read projections and navigation methods.

use tracing::debug;

use crate::protocol::Command;
use crate::tab::{Destination, Params, Tab};

use super::TabRouter;

/// Pathname reported when the active tab has no usable path.
const FALLBACK_PATHNAME: &str = "/";

// ============================================================================
// TabRouter - Projections
// ============================================================================

impl TabRouter {
    /// Returns the active tab's path, or `/` if it has none.
    #[must_use]
    pub fn pathname(&self) -> String {
        self.inner
            .state
            .lock()
            .active_tab()
            .map(|tab| tab.path.as_str())
            .filter(|path| !path.is_empty())
            .unwrap_or(FALLBACK_PATHNAME)
            .to_string()
    }

    /// Returns the active tab's params, or an empty map.
    #[must_use]
    pub fn query(&self) -> Params {
        self.inner
            .state
            .lock()
            .active_tab()
            .map(|tab| tab.params.clone())
            .unwrap_or_default()
    }

    /// Returns the open tabs in display order.
    #[must_use]
    pub fn tabs(&self) -> Vec<Tab> {
        self.inner.state.lock().tabs().to_vec()
    }

    /// Returns the active index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.inner.state.lock().active_index()
    }

    /// Returns a copy of the active tab.
    #[must_use]
    pub fn active_tab(&self) -> Option<Tab> {
        self.inner.state.lock().active_tab().cloned()
    }

    /// Returns `true` if a tab with `path` is open.
    #[must_use]
    pub fn has_path(&self, path: &str) -> bool {
        self.inner.state.lock().contains(path)
    }
}

// ============================================================================
// TabRouter - Navigation
// ============================================================================

impl TabRouter {
    /// Opens `destination` as a tab, or refreshes the tab already on its
    /// path, and activates it.
    ///
    /// # Example
    ///
    /// ```
    /// use tab_router::{Destination, TabRouter};
    ///
    /// let router = TabRouter::builder().build().unwrap();
    /// router.push("/users");
    /// router.push(Destination::new("/users").with_param("id", 5));
    ///
    /// assert_eq!(router.tabs().len(), 2);
    /// assert_eq!(router.query()["id"].as_i64(), Some(5));
    /// ```
    pub fn push(&self, destination: impl Into<Destination>) {
        let tab = destination.into().to_tab();
        debug!(scope = %self.inner.scope_id, path = %tab.path, "push");
        self.dispatch(Command::Open(tab));
    }

    /// Activates the tab on `destination`'s path, or overwrites the active
    /// tab with it when no such tab is open.
    pub fn replace(&self, destination: impl Into<Destination>) {
        let tab = destination.into().to_tab();
        debug!(scope = %self.inner.scope_id, path = %tab.path, "replace");
        self.dispatch(Command::Replace(tab));
    }

    /// Closes the tab on `path`. The last remaining tab is never closed.
    pub fn close_path(&self, path: &str) {
        debug!(scope = %self.inner.scope_id, path = %path, "close_path");
        self.dispatch(Command::close(path));
    }

    /// Closes every tab except the one on `path`.
    pub fn close_others(&self, path: &str) {
        debug!(scope = %self.inner.scope_id, path = %path, "close_others");
        self.dispatch(Command::close_others(path));
    }

    /// Activates the tab on `path`.
    pub fn switch_to_path(&self, path: &str) {
        debug!(scope = %self.inner.scope_id, path = %path, "switch_to_path");
        self.dispatch(Command::switch_to(path));
    }

    /// Moves the tab at `from` to `to` and activates it.
    pub fn reorder_tabs(&self, from: usize, to: usize) {
        debug!(scope = %self.inner.scope_id, from, to, "reorder_tabs");
        self.dispatch(Command::reorder(from, to));
    }

    /// Replaces the params of the tab on `path` and activates it.
    pub fn update_params(&self, path: &str, params: Params) {
        debug!(scope = %self.inner.scope_id, path = %path, "update_params");
        self.dispatch(Command::update_params(path, params));
    }

    /// Activates the tab to the left of the active one, if any.
    pub fn back(&self) {
        let previous = {
            let state = self.inner.state.lock();
            state
                .active_index()
                .checked_sub(1)
                .and_then(|index| state.get(index))
                .map(|tab| tab.path.clone())
        };

        if let Some(path) = previous {
            debug!(scope = %self.inner.scope_id, path = %path, "back");
            self.dispatch(Command::switch_to(path));
        }
    }

    /// Re-activates the current tab, re-running persistence and listeners.
    pub fn reload(&self) {
        let current = self.active_tab().map(|tab| tab.path);

        if let Some(path) = current {
            debug!(scope = %self.inner.scope_id, path = %path, "reload");
            self.dispatch(Command::switch_to(path));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
