//! Scoped access to a router.
//!
//! UI layers hand a [`RouterScope`] down the component tree. Consumers that
//! need the router ask the scope for it; asking an empty scope is a wiring
//! bug and fails loudly.

use crate::error::{Error, Result};

use super::TabRouter;

/// Name reported when a router is requested outside its scope.
const SCOPE_NAME: &str = "TabRouter";

/// A slot that may or may not provide a [`TabRouter`].
#[derive(Debug, Clone, Default)]
pub struct RouterScope {
    router: Option<TabRouter>,
}

impl RouterScope {
    /// Creates a scope that provides `router`.
    #[inline]
    #[must_use]
    pub fn new(router: TabRouter) -> Self {
        Self {
            router: Some(router),
        }
    }

    /// Creates a scope with no router.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if this scope provides a router.
    #[inline]
    #[must_use]
    pub fn is_provided(&self) -> bool {
        self.router.is_some()
    }

    /// Returns the provided router.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideScope`] if no router is provided.
    pub fn router(&self) -> Result<&TabRouter> {
        self.router
            .as_ref()
            .ok_or_else(|| Error::outside_scope(SCOPE_NAME))
    }

    /// Returns the provided router.
    ///
    /// # Panics
    ///
    /// Panics if no router is provided.
    #[track_caller]
    #[must_use]
    pub fn expect_router(&self) -> &TabRouter {
        match self.router() {
            Ok(router) => router,
            Err(e) => panic!("{e}"),
        }
    }
}

impl From<TabRouter> for RouterScope {
    fn from(router: TabRouter) -> Self {
        Self::new(router)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scope_errors() {
        let scope = RouterScope::empty();
        assert!(!scope.is_provided());

        let err = scope.router().unwrap_err();
        assert!(matches!(err, Error::OutsideScope { scope: "TabRouter" }));
    }

    #[test]
    #[should_panic(expected = "TabRouter used outside of its scope")]
    fn test_expect_router_panics_outside_scope() {
        let _ = RouterScope::empty().expect_router();
    }

    #[test]
    fn test_provided_scope_shares_router() {
        let router = TabRouter::builder().build().unwrap();
        let scope = RouterScope::from(router.clone());

        scope.expect_router().push("/a");
        assert_eq!(router.pathname(), "/a");
    }
}
