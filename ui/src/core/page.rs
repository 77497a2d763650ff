//! The page the bar lives in, as seen from the bar: a scroll offset, a
//! scroll signal and a handful of smooth-scroll side effects.

use std::fmt;

use dioxus::logger::tracing::debug;

/// Callback fed with the new vertical offset on every scroll.
pub type ScrollListener = Box<dyn Fn(f64)>;

/// Result of asking the page to bring a section into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    Scrolled,
    /// No element carries the id; nothing happened.
    TargetMissing,
}

pub trait PageHost {
    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> f64;

    /// Smooth-scroll the viewport to offset 0.
    fn scroll_to_top(&self);

    /// Smooth-scroll the element with `id` into view, if there is one.
    fn scroll_into_view(&self, id: &str) -> ScrollOutcome;

    /// Start feeding `listener` with scroll offsets until the returned guard
    /// is dropped.
    fn subscribe_scroll(&self, listener: ScrollListener) -> ScrollSubscription;
}

/// Keeps a scroll listener registered. Dropping it unregisters.
#[must_use = "dropping the subscription unregisters the listener immediately"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        debug!("scroll listener registered");
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription that never received events (no page to listen to).
    pub fn inert() -> Self {
        Self { release: None }
    }

    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Unregister now instead of at drop time.
    pub fn cancel(&mut self) {
        if let Some(release) = self.release.take() {
            release();
            debug!("scroll listener released");
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.is_active())
            .finish()
    }
}
