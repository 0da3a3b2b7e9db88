//! Link resolution: which router operation a navigation maps to.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::error::Result;
use crate::router::TabRouter;
use crate::scroll::{ScrollTarget, schedule_fragment_scroll};
use crate::tab::{Destination, Tab};

use super::click::{ClickEvent, should_intercept};

// ============================================================================
// Types
// ============================================================================

/// The anchor `target` hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkTarget {
    /// Navigate in place (`_self` or no target).
    #[default]
    SelfFrame,
    /// Open separately (`_blank`); always opens a tab.
    Blank,
}

impl LinkTarget {
    /// Parses an anchor `target` attribute.
    #[inline]
    #[must_use]
    pub fn from_attr(target: Option<&str>) -> Self {
        match target {
            Some(value) if value.eq_ignore_ascii_case("_blank") => Self::Blank,
            _ => Self::SelfFrame,
        }
    }
}

/// The router operation a link resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAction {
    /// [`TabRouter::push`].
    Push,
    /// [`TabRouter::replace`].
    Replace,
    /// [`TabRouter::switch_to_path`].
    SwitchTo,
}

// ============================================================================
// Resolution
// ============================================================================

/// Picks exactly one router operation for a navigation.
///
/// Precedence: a `Blank` target always pushes; otherwise an explicit
/// `replace` flag replaces; otherwise a destination that is already open is
/// switched to; otherwise it is pushed.
#[must_use]
pub fn resolve(
    destination: &Destination,
    target: LinkTarget,
    replace: bool,
    tabs: &[Tab],
) -> LinkAction {
    if target == LinkTarget::Blank {
        return LinkAction::Push;
    }

    if replace {
        return LinkAction::Replace;
    }

    if tabs.iter().any(|tab| tab.path == destination.path) {
        return LinkAction::SwitchTo;
    }

    LinkAction::Push
}

// ============================================================================
// Link
// ============================================================================

/// A navigation link bound to a destination.
///
/// # Example
///
/// ```
/// use tab_router::link::{ClickEvent, Link, LinkAction};
/// use tab_router::TabRouter;
///
/// let router = TabRouter::builder().build().unwrap();
/// let link = Link::parse("/reports?year=2024").unwrap();
///
/// assert_eq!(link.on_click(&router, &ClickEvent::primary()), Some(LinkAction::Push));
/// assert_eq!(link.on_click(&router, &ClickEvent::primary()), Some(LinkAction::SwitchTo));
/// assert_eq!(link.on_click(&router, &ClickEvent::primary().with_ctrl()), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    destination: Destination,
    target: LinkTarget,
    replace: bool,
    external: bool,
}

impl Link {
    /// Creates a link to `destination`.
    #[inline]
    #[must_use]
    pub fn new(destination: impl Into<Destination>) -> Self {
        Self {
            destination: destination.into(),
            target: LinkTarget::SelfFrame,
            replace: false,
            external: false,
        }
    }

    /// Creates a link from an href.
    ///
    /// Hrefs that resolve to another origin (absolute or protocol-relative
    /// URLs) are marked external and never routed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`](crate::Error::Url) if the href cannot be
    /// parsed.
    pub fn parse(href: &str) -> Result<Self> {
        let external = Destination::is_external_href(href)?;
        let destination = Destination::parse(href)?;

        Ok(Self {
            external,
            ..Self::new(destination)
        })
    }

    /// Sets the target hint.
    #[inline]
    #[must_use]
    pub fn target(mut self, target: LinkTarget) -> Self {
        self.target = target;
        self
    }

    /// Shorthand for `target(LinkTarget::Blank)`.
    #[inline]
    #[must_use]
    pub fn blank(self) -> Self {
        self.target(LinkTarget::Blank)
    }

    /// Requests replace semantics.
    #[inline]
    #[must_use]
    pub fn replace(mut self) -> Self {
        self.replace = true;
        self
    }

    /// Returns the destination.
    #[inline]
    #[must_use]
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Returns `true` if the link leaves the application.
    #[inline]
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Returns the href to render on the anchor element.
    #[must_use]
    pub fn href(&self) -> String {
        self.destination.to_href()
    }

    /// Resolves the action against the currently open tabs.
    #[inline]
    #[must_use]
    pub fn action(&self, tabs: &[Tab]) -> LinkAction {
        resolve(&self.destination, self.target, self.replace, tabs)
    }

    /// Navigates `router` and returns the action taken.
    pub fn follow(&self, router: &TabRouter) -> LinkAction {
        let action = self.action(&router.tabs());
        debug!(
            scope = %router.scope_id(),
            path = %self.destination.path,
            ?action,
            "Following link"
        );

        match action {
            LinkAction::Push => router.push(self.destination.clone()),
            LinkAction::Replace => router.replace(self.destination.clone()),
            LinkAction::SwitchTo => router.switch_to_path(&self.destination.path),
        }

        action
    }

    /// Handles a click: follows the link if the router should intercept it.
    ///
    /// Returns `None` when the click is left to the host.
    pub fn on_click(&self, router: &TabRouter, event: &ClickEvent) -> Option<LinkAction> {
        if !should_intercept(event, self.external) {
            return None;
        }

        Some(self.follow(router))
    }

    /// Follows the link and, if it has a fragment, schedules a scroll to it.
    ///
    /// # Panics
    ///
    /// Panics if the link has a fragment and this is called outside a tokio
    /// runtime.
    pub fn follow_and_scroll(
        &self,
        router: &TabRouter,
        target: Arc<dyn ScrollTarget>,
    ) -> (LinkAction, Option<JoinHandle<()>>) {
        let action = self.follow(router);
        let scroll = self
            .destination
            .fragment
            .as_ref()
            .map(|fragment| schedule_fragment_scroll(target, fragment.clone()));

        (action, scroll)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;

    fn open_tabs() -> Vec<Tab> {
        vec![Tab::new("/"), Tab::new("/a")]
    }

    #[test]
    fn test_blank_target_always_pushes() {
        let dest = Destination::new("/a");
        assert_eq!(
            resolve(&dest, LinkTarget::Blank, true, &open_tabs()),
            LinkAction::Push
        );
    }

    #[test]
    fn test_replace_flag_beats_open_destination() {
        let dest = Destination::new("/a");
        assert_eq!(
            resolve(&dest, LinkTarget::SelfFrame, true, &open_tabs()),
            LinkAction::Replace
        );
    }

    #[test]
    fn test_open_destination_switches() {
        let dest = Destination::new("/a");
        assert_eq!(
            resolve(&dest, LinkTarget::SelfFrame, false, &open_tabs()),
            LinkAction::SwitchTo
        );
    }

    #[test]
    fn test_new_destination_pushes() {
        let dest = Destination::new("/new");
        assert_eq!(
            resolve(&dest, LinkTarget::SelfFrame, false, &open_tabs()),
            LinkAction::Push
        );
    }

    #[test]
    fn test_target_attr_parsing() {
        assert_eq!(LinkTarget::from_attr(Some("_blank")), LinkTarget::Blank);
        assert_eq!(LinkTarget::from_attr(Some("_BLANK")), LinkTarget::Blank);
        assert_eq!(LinkTarget::from_attr(Some("_self")), LinkTarget::SelfFrame);
        assert_eq!(LinkTarget::from_attr(None), LinkTarget::SelfFrame);
    }

    #[test]
    fn test_switch_keeps_existing_params() {
        let router = TabRouter::builder().build().unwrap();
        router.push(Destination::new("/a").with_param("id", 1));
        router.switch_to_path("/");

        let link = Link::new(Destination::new("/a").with_param("id", 2));
        assert_eq!(link.follow(&router), LinkAction::SwitchTo);
        assert_eq!(router.query().get("id").and_then(|v| v.as_i64()), Some(1));
    }

    #[test]
    fn test_blank_link_refreshes_params() {
        let router = TabRouter::builder().build().unwrap();
        router.push(Destination::new("/a").with_param("id", 1));

        let link = Link::new(Destination::new("/a").with_param("id", 2)).blank();
        assert_eq!(link.follow(&router), LinkAction::Push);
        assert_eq!(router.query().get("id").and_then(|v| v.as_i64()), Some(2));
    }

    #[test]
    fn test_replace_link() {
        let router = TabRouter::builder().build().unwrap();
        let link = Link::new("/x").replace();

        assert_eq!(link.follow(&router), LinkAction::Replace);
        assert_eq!(router.tabs(), vec![Tab::new("/x")]);
    }

    #[test]
    fn test_external_link_is_left_to_host() {
        let router = TabRouter::builder().build().unwrap();
        let link = Link::parse("https://example.com/docs").unwrap();

        assert!(link.is_external());
        assert_eq!(link.on_click(&router, &ClickEvent::primary()), None);
        assert_eq!(router.tabs().len(), 1);
    }

    #[test]
    fn test_protocol_relative_link_is_left_to_host() {
        let router = TabRouter::builder().build().unwrap();
        let link = Link::parse("//other.example/x").unwrap();

        assert!(link.is_external());
        assert_eq!(link.on_click(&router, &ClickEvent::primary()), None);
        assert_eq!(router.tabs(), vec![Tab::new("/")]);
    }

    #[test]
    fn test_relative_hrefs_are_internal() {
        for href in ["/a", "a/b", "?q=1", "#top", "../up"] {
            assert!(!Link::parse(href).unwrap().is_external(), "{href}");
        }
    }

    #[test]
    fn test_href_rendering() {
        let link = Link::parse("/a?b=1#c").unwrap();
        assert!(!link.is_external());
        assert_eq!(link.href(), "/a?b=1#c");
    }

    struct Recorder(Mutex<Vec<String>>);

    impl ScrollTarget for Recorder {
        fn scroll_into_view(&self, id: &str) -> bool {
            self.0.lock().push(id.to_string());
            true
        }
    }

    #[tokio::test]
    async fn test_follow_and_scroll_with_fragment() {
        let router = TabRouter::builder().build().unwrap();
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));

        let (action, scroll) = Link::parse("/guide#setup")
            .unwrap()
            .follow_and_scroll(&router, recorder.clone());

        assert_eq!(action, LinkAction::Push);
        scroll.expect("fragment should schedule a scroll").await.unwrap();
        assert_eq!(*recorder.0.lock(), vec!["setup".to_string()]);
    }

    #[tokio::test]
    async fn test_follow_and_scroll_without_fragment() {
        let router = TabRouter::builder().build().unwrap();
        let recorder = Arc::new(Recorder(Mutex::new(Vec::new())));

        let (_, scroll) = Link::new("/plain").follow_and_scroll(&router, recorder);
        assert!(scroll.is_none());
    }
}
