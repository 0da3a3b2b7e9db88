//! The ordered tab list and its active-tab pointer.
//!
//! [`TabListState`] is an immutable value: the reducer produces a new one for
//! every state-changing command. Two invariants hold for every value that can
//! be observed outside this crate:
//!
//! - `active_index < tabs.len()` whenever the list is non-empty
//! - no two tabs share a `path`

// ============================================================================
// Imports
// ============================================================================

use crate::error::{Error, Result};

use super::core::Tab;

// ============================================================================
// TabListState
// ============================================================================

/// Ordered list of open tabs plus the index of the active one.
#[derive(Debug, Clone, PartialEq)]
pub struct TabListState {
    tabs: Vec<Tab>,
    active_index: usize,
}

// ============================================================================
// TabListState - Constructors
// ============================================================================

impl TabListState {
    /// Creates the default state: a single parameterless tab at `path`.
    #[inline]
    #[must_use]
    pub fn initial(path: impl Into<String>) -> Self {
        Self {
            tabs: vec![Tab::new(path)],
            active_index: 0,
        }
    }

    /// Creates a state from parts, validating both invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the list is empty, if two tabs
    /// share a path, or if `active_index` is out of range.
    pub fn new(tabs: Vec<Tab>, active_index: usize) -> Result<Self> {
        let state = Self { tabs, active_index };
        state.check_invariants()?;
        Ok(state)
    }

    /// Creates a state the caller has already validated.
    #[inline]
    pub(crate) fn from_parts(tabs: Vec<Tab>, active_index: usize) -> Self {
        let state = Self { tabs, active_index };
        debug_assert!(state.check_invariants().is_ok(), "{state:?}");
        state
    }
}

// ============================================================================
// TabListState - Accessors
// ============================================================================

impl TabListState {
    /// Returns the tabs in display order.
    #[inline]
    #[must_use]
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Returns the active index.
    #[inline]
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Returns the active tab.
    #[inline]
    #[must_use]
    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.get(self.active_index)
    }

    /// Returns the tab at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    /// Returns the number of tabs.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Returns `true` if there are no tabs.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Returns the position of the tab with `path`.
    #[inline]
    #[must_use]
    pub fn position(&self, path: &str) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.path == path)
    }

    /// Returns `true` if a tab with `path` is open.
    #[inline]
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.position(path).is_some()
    }

    /// Consumes the state, returning its parts.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (Vec<Tab>, usize) {
        (self.tabs, self.active_index)
    }
}

// ============================================================================
// TabListState - Validation
// ============================================================================

impl TabListState {
    /// Checks both invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<()> {
        if self.tabs.is_empty() {
            return Err(Error::invalid_state("tab list is empty"));
        }

        if self.active_index >= self.tabs.len() {
            return Err(Error::invalid_state(format!(
                "active index {} out of range for {} tabs",
                self.active_index,
                self.tabs.len()
            )));
        }

        for (index, tab) in self.tabs.iter().enumerate() {
            if self.tabs[..index].iter().any(|other| other.path == tab.path) {
                return Err(Error::invalid_state(format!(
                    "duplicate tab path '{}'",
                    tab.path
                )));
            }
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_has_single_active_tab() {
        let state = TabListState::initial("/home");
        assert_eq!(state.len(), 1);
        assert_eq!(state.active_index(), 0);
        assert_eq!(state.active_tab(), Some(&Tab::new("/home")));
    }

    #[test]
    fn test_new_accepts_valid_state() {
        let state = TabListState::new(vec![Tab::new("/"), Tab::new("/a")], 1).unwrap();
        assert_eq!(state.active_tab().map(|t| t.path.as_str()), Some("/a"));
    }

    #[test]
    fn test_new_rejects_empty() {
        let err = TabListState::new(Vec::new(), 0).unwrap_err();
        assert!(matches!(err, Error::InvalidState { .. }));
    }

    #[test]
    fn test_new_rejects_out_of_range_index() {
        let err = TabListState::new(vec![Tab::new("/")], 1).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_new_rejects_duplicate_paths() {
        let err = TabListState::new(vec![Tab::new("/a"), Tab::new("/a").with_param("x", 1)], 0)
            .unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_position_and_contains() {
        let state =
            TabListState::new(vec![Tab::new("/a"), Tab::new("/b"), Tab::new("/c")], 0).unwrap();
        assert_eq!(state.position("/c"), Some(2));
        assert!(state.contains("/b"));
        assert!(!state.contains("/d"));
    }
}
