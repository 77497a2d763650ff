//! Platform detection and the concrete page hosts.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::Rc;

use super::page::{PageHost, ScrollListener, ScrollOutcome, ScrollSubscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Running in a browser with a real document.
    Web,
    /// Anything else (native builds, tests). No document to scroll.
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }
}

/// Shareable handle to a page host, suitable for Dioxus context.
#[derive(Clone)]
pub struct PageHandle(pub Rc<dyn PageHost>);

impl PageHandle {
    pub fn new(host: impl PageHost + 'static) -> Self {
        Self(Rc::new(host))
    }
}

impl PartialEq for PageHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The host for the platform we were compiled for.
pub fn page_host() -> PageHandle {
    match Platform::current() {
        #[cfg(target_arch = "wasm32")]
        Platform::Web => PageHandle::new(web::WebHost),
        _ => PageHandle::new(MemoryHost::default()),
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebHost;

#[cfg(target_arch = "wasm32")]
mod web {
    use dioxus::logger::tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

    use crate::core::page::{PageHost, ScrollListener, ScrollOutcome, ScrollSubscription};

    /// Browser window and document via `web-sys`.
    pub struct WebHost;

    fn current_offset() -> Option<f64> {
        web_sys::window().and_then(|window| window.scroll_y().ok())
    }

    impl PageHost for WebHost {
        fn scroll_offset(&self) -> f64 {
            current_offset().unwrap_or(0.0)
        }

        fn scroll_to_top(&self) {
            let Some(window) = web_sys::window() else {
                warn!("no window; cannot scroll to top");
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }

        fn scroll_into_view(&self, id: &str) -> ScrollOutcome {
            let target = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.get_element_by_id(id));
            let Some(element) = target else {
                return ScrollOutcome::TargetMissing;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            ScrollOutcome::Scrolled
        }

        fn subscribe_scroll(&self, listener: ScrollListener) -> ScrollSubscription {
            let Some(window) = web_sys::window() else {
                warn!("no window; scroll styling stays static");
                return ScrollSubscription::inert();
            };

            let callback = Closure::<dyn Fn()>::new(move || {
                if let Some(offset) = current_offset() {
                    listener(offset);
                }
            });
            if let Err(err) =
                window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                warn!(?err, "failed to register scroll listener");
                return ScrollSubscription::inert();
            }

            ScrollSubscription::new(move || {
                if let Err(err) = window
                    .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                {
                    warn!(?err, "failed to remove scroll listener");
                }
            })
        }
    }
}

/// In-memory page: a settable offset, a set of section ids and a record of
/// every scroll request. Used off-browser and by tests.
///
/// Clones share the same page.
#[derive(Clone, Default)]
pub struct MemoryHost {
    page: Rc<MemoryPage>,
}

#[derive(Default)]
struct MemoryPage {
    offset: Cell<f64>,
    sections: RefCell<BTreeSet<String>>,
    scrolled_into_view: RefCell<Vec<String>>,
    top_scrolls: Cell<usize>,
    listeners: RefCell<Vec<(u64, Rc<dyn Fn(f64)>)>>,
    next_listener: Cell<u64>,
}

impl MemoryHost {
    pub fn with_sections<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let host = Self::default();
        host.page
            .sections
            .borrow_mut()
            .extend(ids.into_iter().map(Into::into));
        host
    }

    pub fn add_section(&self, id: impl Into<String>) {
        self.page.sections.borrow_mut().insert(id.into());
    }

    /// Move the page and notify every registered listener.
    pub fn set_offset(&self, offset: f64) {
        self.page.offset.set(offset);
        // Snapshot so a listener may unsubscribe while we iterate.
        let listeners: Vec<Rc<dyn Fn(f64)>> = self
            .page
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(offset);
        }
    }

    /// Ids passed to successful `scroll_into_view` calls, in order.
    pub fn scroll_calls(&self) -> Vec<String> {
        self.page.scrolled_into_view.borrow().clone()
    }

    pub fn top_scrolls(&self) -> usize {
        self.page.top_scrolls.get()
    }

    pub fn listener_count(&self) -> usize {
        self.page.listeners.borrow().len()
    }
}

impl PageHost for MemoryHost {
    fn scroll_offset(&self) -> f64 {
        self.page.offset.get()
    }

    fn scroll_to_top(&self) {
        self.page.top_scrolls.set(self.page.top_scrolls.get() + 1);
        self.set_offset(0.0);
    }

    fn scroll_into_view(&self, id: &str) -> ScrollOutcome {
        if !self.page.sections.borrow().contains(id) {
            return ScrollOutcome::TargetMissing;
        }
        self.page.scrolled_into_view.borrow_mut().push(id.to_string());
        ScrollOutcome::Scrolled
    }

    fn subscribe_scroll(&self, listener: ScrollListener) -> ScrollSubscription {
        let id = self.page.next_listener.get();
        self.page.next_listener.set(id + 1);
        self.page
            .listeners
            .borrow_mut()
            .push((id, Rc::from(listener)));

        let page = Rc::downgrade(&self.page);
        ScrollSubscription::new(move || {
            if let Some(page) = page.upgrade() {
                page.listeners.borrow_mut().retain(|(other, _)| *other != id);
            }
        })
    }
}
