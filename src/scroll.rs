//! Deferred fragment scrolling.
//!
//! After navigating to a destination with a fragment, the newly active tab's
//! content needs a moment to mount before its element can be found. The
//! scroll is scheduled on the tokio runtime after [`FRAGMENT_SCROLL_DELAY`]
//! and is best-effort: a missing element is ignored.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

// ============================================================================
// Constants
// ============================================================================

/// Delay before scrolling to a fragment target.
pub const FRAGMENT_SCROLL_DELAY: Duration = Duration::from_millis(100);

// ============================================================================
// ScrollTarget
// ============================================================================

/// Something that can bring an element into view by id.
pub trait ScrollTarget: Send + Sync {
    /// Scrolls the element with `id` into view. Returns `false` if there is
    /// no such element.
    fn scroll_into_view(&self, id: &str) -> bool;
}

// ============================================================================
// Scheduling
// ============================================================================

/// Schedules a scroll to `fragment` after [`FRAGMENT_SCROLL_DELAY`].
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn schedule_fragment_scroll(
    target: Arc<dyn ScrollTarget>,
    fragment: impl Into<String>,
) -> JoinHandle<()> {
    schedule_fragment_scroll_after(target, fragment, FRAGMENT_SCROLL_DELAY)
}

/// Schedules a scroll to `fragment` after `delay`.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn schedule_fragment_scroll_after(
    target: Arc<dyn ScrollTarget>,
    fragment: impl Into<String>,
    delay: Duration,
) -> JoinHandle<()> {
    let fragment = fragment.into();

    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = target.scroll_into_view(&fragment);
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingTarget {
        known: Vec<&'static str>,
        scrolled: Mutex<Vec<String>>,
    }

    impl ScrollTarget for RecordingTarget {
        fn scroll_into_view(&self, id: &str) -> bool {
            self.scrolled.lock().push(id.to_string());
            self.known.contains(&id)
        }
    }

    #[tokio::test]
    async fn test_scroll_runs_after_delay() {
        let target = Arc::new(RecordingTarget {
            known: vec!["intro"],
            ..Default::default()
        });

        let handle =
            schedule_fragment_scroll_after(target.clone(), "intro", Duration::from_millis(5));
        assert!(target.scrolled.lock().is_empty());

        handle.await.unwrap();
        assert_eq!(*target.scrolled.lock(), vec!["intro".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_target_is_ignored() {
        let target = Arc::new(RecordingTarget::default());
        let handle = schedule_fragment_scroll_after(target.clone(), "missing", Duration::ZERO);

        assert!(handle.await.is_ok());
        assert_eq!(target.scrolled.lock().len(), 1);
    }

    #[tokio::test]
    async fn test_default_delay() {
        let target = Arc::new(RecordingTarget::default());
        let started = std::time::Instant::now();

        schedule_fragment_scroll(target, "x").await.unwrap();
        assert!(started.elapsed() >= FRAGMENT_SCROLL_DELAY);
    }
}
