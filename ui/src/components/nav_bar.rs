use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::controller::{dispatch, NavCommand};
use crate::core::nav_state::{NavEvent, NavState};
use crate::core::platform::{page_host, PageHandle};
use crate::core::section::Section;
use crate::core::variant::{Surface, Variant};
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

const MOBILE_PANEL_ID: &str = "navbar-mobile-panel";

/// State and command dispatch behind the navigation bar.
///
/// Owns the two navigation flags, keeps a scroll listener registered on the
/// page for as long as the calling component is mounted, and routes commands
/// to page scrolls or to `on_login_click` / `on_get_started`.
#[derive(Clone, Copy, PartialEq)]
pub struct NavControls {
    state: Signal<NavState>,
    dispatch: Callback<NavCommand>,
}

impl NavControls {
    /// Current flags, without subscribing the caller.
    pub fn state(&self) -> NavState {
        *self.state.peek()
    }

    pub fn run(&self, command: NavCommand) {
        self.dispatch.call(command);
    }
}

/// Hook form of the bar's behaviour. The page is reached through a
/// [`PageHandle`] from context when one is provided, otherwise through the
/// platform default.
pub fn use_nav_controls(on_login_click: EventHandler, on_get_started: EventHandler) -> NavControls {
    let host = use_hook(|| try_consume_context::<PageHandle>().unwrap_or_else(page_host));
    let mut state = use_signal(NavState::default);

    // Offsets arrive from the page's own event loop; funnel them through a
    // coroutine so the signal is only written inside the runtime.
    let scroll_events = use_coroutine(move |mut rx: UnboundedReceiver<f64>| async move {
        while let Some(offset) = rx.next().await {
            let current = *state.peek();
            let next = current.apply(NavEvent::Scrolled { offset });
            if next != current {
                state.set(next);
            }
        }
    });

    // Held for the lifetime of the component; released on unmount.
    let subscription = use_hook({
        let host = host.clone();
        move || {
            let tx = scroll_events.tx();
            let listener = host.0.subscribe_scroll(Box::new(move |offset| {
                // Only fails once the coroutine is gone, i.e. during teardown.
                if tx.unbounded_send(offset).is_err() {
                    debug!(offset, "scroll event after teardown dropped");
                }
            }));
            Rc::new(RefCell::new(Some(listener)))
        }
    });
    use_drop(move || {
        if let Some(mut listener) = subscription.borrow_mut().take() {
            listener.cancel();
        }
    });

    let dispatcher = use_callback(move |command: NavCommand| {
        let current = *state.peek();
        let mut next = current;
        let delegate = dispatch(&mut next, host.0.as_ref(), command);
        if next != current {
            state.set(next);
        }
        if let Some(delegate) = delegate {
            delegate.invoke(|| on_login_click.call(()), || on_get_started.call(()));
        }
    });

    NavControls {
        state,
        dispatch: dispatcher,
    }
}

/// Fixed site header with section links and login-dependent actions.
///
/// The bar starts in its `navbar--top` treatment, listens to page scrolling
/// while mounted and switches to `navbar--scrolled` past the scroll
/// threshold. Section links smooth-scroll to `#features`, `#pricing` and
/// `#sample`; links whose target is missing from the page do nothing.
#[component]
pub fn NavBar(
    on_login_click: EventHandler,
    on_get_started: EventHandler,
    #[props(default)] is_logged_in: bool,
    #[props(default)] show_locale_switcher: bool,
) -> Element {
    let controls = use_nav_controls(on_login_click, on_get_started);
    rsx! {
        NavBarView { controls, is_logged_in, show_locale_switcher }
    }
}

/// Markup for the bar, driven by [`NavControls`].
#[component]
pub fn NavBarView(
    controls: NavControls,
    #[props(default)] is_logged_in: bool,
    #[props(default)] show_locale_switcher: bool,
) -> Element {
    i18n::init();

    let run = move |command: NavCommand| controls.run(command);

    let mut language = use_signal(|| i18n::DEFAULT_LANGUAGE.to_string());
    let current_language = language();

    let snapshot = (controls.state)();
    let variant = Variant::from_logged_in(is_logged_in);
    let bar_class = if snapshot.scrolled() {
        "navbar navbar--scrolled"
    } else {
        "navbar navbar--top"
    };
    let menu_label = if snapshot.menu_open() {
        t!("nav-menu-close")
    } else {
        t!("nav-menu-open")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "{bar_class}",
            div { class: "navbar__inner",
                button {
                    r#type: "button",
                    class: "navbar__brand",
                    aria_label: t!("nav-brand-home"),
                    onclick: move |_| run(NavCommand::Logo),
                    span { class: "navbar__brand-mark", {t!("nav-brand")} }
                }

                nav { class: "navbar__links",
                    for section in Section::ALL {
                        button {
                            key: "{section.id()}",
                            r#type: "button",
                            class: "navbar__link",
                            onclick: move |_| run(NavCommand::Section(section)),
                            {section.label()}
                        }
                    }
                }

                div { class: "navbar__actions",
                    if show_locale_switcher {
                        LocaleSwitcher {
                            current: current_language,
                            on_select: move |tag: String| match i18n::set_language(&tag) {
                                Ok(()) => language.set(tag),
                                Err(err) => warn!("language switch to {tag} failed: {err}"),
                            },
                        }
                    }
                    for action in variant.actions().iter().copied() {
                        button {
                            key: "{action:?}",
                            r#type: "button",
                            class: action.class(),
                            onclick: move |_| run(NavCommand::Action { action, surface: Surface::Desktop }),
                            {action.label()}
                        }
                    }
                }

                button {
                    r#type: "button",
                    class: "navbar__hamburger",
                    aria_label: "{menu_label}",
                    aria_expanded: "{snapshot.menu_open()}",
                    aria_controls: MOBILE_PANEL_ID,
                    onclick: move |_| run(NavCommand::ToggleMenu),
                    span { class: "navbar__hamburger-bar" }
                    span { class: "navbar__hamburger-bar" }
                    span { class: "navbar__hamburger-bar" }
                }
            }

            if snapshot.menu_open() {
                div { id: MOBILE_PANEL_ID, class: "navbar__mobile-panel",
                    for section in Section::ALL {
                        button {
                            key: "{section.id()}",
                            r#type: "button",
                            class: "navbar__mobile-link",
                            onclick: move |_| run(NavCommand::Section(section)),
                            {section.label()}
                        }
                    }
                    div { class: "navbar__mobile-actions",
                        for action in variant.actions().iter().copied() {
                            button {
                                key: "{action:?}",
                                r#type: "button",
                                class: action.class(),
                                onclick: move |_| run(NavCommand::Action { action, surface: Surface::MobileMenu }),
                                {action.label()}
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Locale `<select>` fed from the embedded bundles.
#[component]
fn LocaleSwitcher(current: String, on_select: EventHandler<String>) -> Element {
    let langs = use_signal(i18n::available_languages);
    if langs().len() < 2 {
        return rsx! {};
    }

    rsx! {
        div { class: "navbar__locale",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!("nav-language-label")}
            }
            select {
                id: "locale-select",
                value: "{current}",
                oninput: move |evt: FormEvent| on_select.call(evt.value()),
                { langs().iter().map(|code| {
                    let c = code.clone();
                    rsx!{
                        option { key: "{c}", value: "{c}", "{c}" }
                    }
                })}
            }
        }
    }
}
