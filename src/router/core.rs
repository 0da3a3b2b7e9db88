//! Core router: state container, dispatch, subscriptions, rehydration.

// ============================================================================
// Imports
// ============================================================================

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use crate::identifiers::{ScopeId, SubscriptionId};
use crate::protocol::{Command, Transition, reduce};
use crate::storage::{PersistenceAdapter, Store};
use crate::tab::TabListState;

use super::builder::RouterBuilder;
use super::options::RouterOptions;

// ============================================================================
// Types
// ============================================================================

/// Callback invoked with the new state after every committed change.
pub(crate) type Listener = Arc<dyn Fn(&TabListState) + Send + Sync>;

/// Internal shared state for a router.
pub(crate) struct RouterInner {
    /// Scope identifier for logging.
    pub scope_id: ScopeId,
    /// Options the router was built with.
    pub options: RouterOptions,
    /// Snapshot codec over the injected store.
    pub persistence: PersistenceAdapter,
    /// Current state. Held across reduce + persist.
    pub state: Mutex<TabListState>,
    /// Registered listeners.
    listeners: Mutex<FxHashMap<SubscriptionId, Listener>>,
    /// Committed states awaiting delivery, in commit order.
    pending: Mutex<VecDeque<TabListState>>,
    /// Set while some thread is draining `pending`.
    delivering: AtomicBool,
    /// Set once rehydration has run.
    rehydrated: AtomicBool,
}

// ============================================================================
// TabRouter
// ============================================================================

/// A tab-based router scope.
///
/// Cloning is cheap and yields another handle to the same scope.
#[derive(Clone)]
pub struct TabRouter {
    pub(crate) inner: Arc<RouterInner>,
}

impl fmt::Debug for TabRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabRouter")
            .field("scope_id", &self.inner.scope_id)
            .field("options", &self.inner.options)
            .field("state", &*self.inner.state.lock())
            .finish_non_exhaustive()
    }
}

impl TabRouter {
    /// Creates a builder for configuring a router.
    #[inline]
    #[must_use]
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Creates a router over `store`.
    ///
    /// Unless `deferred`, the persisted snapshot is loaded; anything missing
    /// or unreadable falls back to a single tab at the initial path.
    pub(crate) fn new(options: RouterOptions, store: Arc<dyn Store>, deferred: bool) -> Self {
        let scope_id = ScopeId::generate();
        let persistence = PersistenceAdapter::new(
            store,
            options.storage_key.clone(),
            options.active_tab_storage_key.clone(),
        );

        let restored = if deferred { None } else { persistence.load() };
        let from_snapshot = restored.is_some();
        let state = restored.unwrap_or_else(|| TabListState::initial(options.initial_path.clone()));

        info!(
            scope = %scope_id,
            tabs = state.len(),
            active_index = state.active_index(),
            from_snapshot,
            deferred,
            "TabRouter created"
        );

        Self {
            inner: Arc::new(RouterInner {
                scope_id,
                options,
                persistence,
                state: Mutex::new(state),
                listeners: Mutex::new(FxHashMap::default()),
                pending: Mutex::new(VecDeque::new()),
                delivering: AtomicBool::new(false),
                rehydrated: AtomicBool::new(false),
            }),
        }
    }
}

// ============================================================================
// TabRouter - Accessors
// ============================================================================

impl TabRouter {
    /// Returns the scope ID.
    #[inline]
    #[must_use]
    pub fn scope_id(&self) -> ScopeId {
        self.inner.scope_id
    }

    /// Returns the options this router was built with.
    #[inline]
    #[must_use]
    pub fn options(&self) -> &RouterOptions {
        &self.inner.options
    }

    /// Returns a snapshot of the current state.
    #[inline]
    #[must_use]
    pub fn state(&self) -> TabListState {
        self.inner.state.lock().clone()
    }
}

// ============================================================================
// TabRouter - Dispatch
// ============================================================================

impl TabRouter {
    /// Applies a command.
    ///
    /// On a state change the new state is committed, persisted, and then
    /// delivered to listeners. A failed precondition changes nothing, writes
    /// nothing, and notifies nobody.
    ///
    /// Listeners see states in commit order, even when several threads
    /// dispatch at once. A state committed while another thread is
    /// delivering is handed to that thread, so this call may return before
    /// its own notification has run.
    pub fn dispatch(&self, command: Command) -> bool {
        let name = command.name();

        {
            let mut state = self.inner.state.lock();

            let next = match reduce(&state, command) {
                Transition::Unchanged => {
                    debug!(scope = %self.inner.scope_id, command = name, "Command was a no-op");
                    return false;
                }
                Transition::Changed(next) => next,
            };

            if let Err(e) = self.inner.persistence.save(&next) {
                warn!(
                    scope = %self.inner.scope_id,
                    command = name,
                    error = %e,
                    "Failed to persist tab snapshot"
                );
            }

            debug!(
                scope = %self.inner.scope_id,
                command = name,
                tabs = next.len(),
                active_index = next.active_index(),
                "Command applied"
            );

            *state = next.clone();
            self.inner.pending.lock().push_back(next);
        }

        self.deliver_pending();
        true
    }
}

// ============================================================================
// TabRouter - Subscriptions
// ============================================================================

impl TabRouter {
    /// Registers a listener called with the new state after each change.
    ///
    /// Listeners run after the state lock is released and may call back
    /// into the router. A command dispatched from inside a listener is
    /// delivered once the current delivery has finished.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&TabListState) + Send + Sync + 'static,
    {
        let id = SubscriptionId::next();
        self.inner.listeners.lock().insert(id, Arc::new(listener));
        debug!(scope = %self.inner.scope_id, subscription = %id, "Listener subscribed");
        id
    }

    /// Removes a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.inner.listeners.lock().remove(&id).is_some();
        debug!(scope = %self.inner.scope_id, subscription = %id, removed, "Listener unsubscribed");
        removed
    }

    /// Returns the number of registered listeners.
    #[inline]
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Drains queued states to listeners unless another thread already is.
    fn deliver_pending(&self) {
        loop {
            if self
                .inner
                .delivering
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_err()
            {
                return;
            }

            {
                let _delivering = DeliveryGuard(&self.inner.delivering);
                loop {
                    let next = self.inner.pending.lock().pop_front();
                    let Some(state) = next else {
                        break;
                    };
                    self.notify(&state);
                }
            }

            // A state queued between the last pop and the flag reset has no
            // drainer yet.
            if self.inner.pending.lock().is_empty() {
                return;
            }
        }
    }

    fn notify(&self, state: &TabListState) {
        let listeners: Vec<Listener> = self.inner.listeners.lock().values().cloned().collect();

        for listener in listeners {
            listener(state);
        }
    }
}

/// Clears the delivery flag on drop, including when a listener panics.
struct DeliveryGuard<'a>(&'a AtomicBool);

impl Drop for DeliveryGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// ============================================================================
// TabRouter - Rehydration
// ============================================================================

impl TabRouter {
    /// Reconciles with the store, at most once per scope.
    ///
    /// If the persisted snapshot differs from the in-memory state, switches
    /// to the persisted active path. Tabs opened since construction are
    /// kept. Returns `true` if this call changed the state.
    pub fn rehydrate(&self) -> bool {
        if self.inner.rehydrated.swap(true, Ordering::SeqCst) {
            debug!(scope = %self.inner.scope_id, "Rehydration already ran");
            return false;
        }

        let Some(persisted) = self.inner.persistence.load() else {
            debug!(scope = %self.inner.scope_id, "Nothing persisted to rehydrate");
            return false;
        };

        if persisted == self.state() {
            return false;
        }

        let Some(path) = persisted.active_tab().map(|tab| tab.path.clone()) else {
            return false;
        };

        info!(scope = %self.inner.scope_id, path = %path, "Rehydrating active tab");
        self.dispatch(Command::switch_to(path))
    }

    /// Returns `true` once [`rehydrate`](Self::rehydrate) has run.
    #[inline]
    #[must_use]
    pub fn is_rehydrated(&self) -> bool {
        self.inner.rehydrated.load(Ordering::SeqCst)
    }
}

// ============================================================================
// Tests
// ============================================================================
