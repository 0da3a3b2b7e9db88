//! The tab reducer: a pure `(state, command) -> transition` function.
//!
//! Every command either produces a new [`TabListState`] or, when its
//! precondition fails, reports [`Transition::Unchanged`]. Failed
//! preconditions are never errors. Persistence is not done here; the router
//! wires it around [`reduce`].

// ============================================================================
// Imports
// ============================================================================

use crate::tab::{Params, Tab, TabListState};

use super::Command;

// ============================================================================
// Transition
// ============================================================================

/// Result of applying a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The command produced a new state, which must be persisted.
    Changed(TabListState),
    /// The command's precondition failed; nothing happened.
    Unchanged,
}

impl Transition {
    /// Returns `true` if the command produced a new state.
    #[inline]
    #[must_use]
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    /// Returns the new state, if any.
    #[inline]
    #[must_use]
    pub fn into_state(self) -> Option<TabListState> {
        match self {
            Self::Changed(state) => Some(state),
            Self::Unchanged => None,
        }
    }

    /// Returns the new state, or a clone of `prior` for a no-op.
    #[inline]
    #[must_use]
    pub fn resolve(self, prior: &TabListState) -> TabListState {
        self.into_state().unwrap_or_else(|| prior.clone())
    }
}

// ============================================================================
// Reducer
// ============================================================================

/// Applies `command` to `state`.
#[must_use]
pub fn reduce(state: &TabListState, command: Command) -> Transition {
    match command {
        Command::Open(tab) => open(state, tab),
        Command::Replace(tab) => replace(state, tab),
        Command::Close { path } => close(state, &path),
        Command::CloseOthers { path } => close_others(state, &path),
        Command::SwitchTo { path } => switch_to(state, &path),
        Command::Reorder { from, to } => reorder(state, from, to),
        Command::UpdateParams { path, params } => update_params(state, &path, params),
    }
}

fn open(state: &TabListState, tab: Tab) -> Transition {
    let mut tabs = state.tabs().to_vec();

    let active_index = match state.position(&tab.path) {
        Some(index) => {
            tabs[index] = tab;
            index
        }
        None => {
            tabs.push(tab);
            tabs.len() - 1
        }
    };

    Transition::Changed(TabListState::from_parts(tabs, active_index))
}

fn replace(state: &TabListState, tab: Tab) -> Transition {
    if let Some(index) = state.position(&tab.path) {
        return Transition::Changed(TabListState::from_parts(state.tabs().to_vec(), index));
    }

    let mut tabs = state.tabs().to_vec();
    let active_index = state.active_index();

    // Overwrites whatever sits in the active slot, even if unrelated to the
    // caller's notion of the current page.
    match tabs.get_mut(active_index) {
        Some(slot) => *slot = tab,
        None => tabs.push(tab),
    }

    Transition::Changed(TabListState::from_parts(tabs, active_index))
}

fn close(state: &TabListState, path: &str) -> Transition {
    let Some(closed) = state.position(path) else {
        return Transition::Unchanged;
    };

    if state.len() < 2 {
        return Transition::Unchanged;
    }

    let mut tabs = state.tabs().to_vec();
    tabs.remove(closed);

    let active = state.active_index();
    let active_index = if closed == active {
        closed.min(tabs.len() - 1)
    } else if closed < active {
        active - 1
    } else {
        active
    };

    Transition::Changed(TabListState::from_parts(tabs, active_index))
}

fn close_others(state: &TabListState, path: &str) -> Transition {
    match state.position(path) {
        Some(index) => {
            let kept = state.tabs()[index].clone();
            Transition::Changed(TabListState::from_parts(vec![kept], 0))
        }
        None => Transition::Unchanged,
    }
}

fn switch_to(state: &TabListState, path: &str) -> Transition {
    match state.position(path) {
        Some(index) => {
            Transition::Changed(TabListState::from_parts(state.tabs().to_vec(), index))
        }
        None => Transition::Unchanged,
    }
}

fn reorder(state: &TabListState, from: usize, to: usize) -> Transition {
    let len = state.len();
    if from >= len || to >= len {
        return Transition::Unchanged;
    }

    let mut tabs = state.tabs().to_vec();
    let moved = tabs.remove(from);
    tabs.insert(to, moved);

    Transition::Changed(TabListState::from_parts(tabs, to))
}

fn update_params(state: &TabListState, path: &str, params: Params) -> Transition {
    let Some(index) = state.position(path) else {
        return Transition::Unchanged;
    };

    let mut tabs = state.tabs().to_vec();
    tabs[index].params = params;

    Transition::Changed(TabListState::from_parts(tabs, index))
}

// ============================================================================
// Tests
// ============================================================================
