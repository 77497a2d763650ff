//! Mounts the bar in a headless `VirtualDom` against an in-memory page and
//! inspects the server-rendered markup.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use ui::core::controller::NavCommand;
use ui::core::page::PageHost;
use ui::core::section::Section;
use ui::core::variant::{Action, Surface};
use ui::{use_nav_controls, MemoryHost, NavBar, NavBarView, NavControls, PageHandle};

/// Cell a harness fills while rendering so the test can reach into it.
struct Slot<T>(Rc<RefCell<Option<T>>>);

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Copy> Slot<T> {
    fn fill(&self, value: T) {
        *self.0.borrow_mut() = Some(value);
    }

    fn get(&self) -> T {
        (*self.0.borrow()).expect("harness has rendered")
    }
}

/// Counts caller callback invocations.
#[derive(Clone, Default)]
struct CallLog {
    logins: Rc<Cell<u32>>,
    starts: Rc<Cell<u32>>,
}

impl CallLog {
    fn login(&self) {
        self.logins.set(self.logins.get() + 1);
    }

    fn start(&self) {
        self.starts.set(self.starts.get() + 1);
    }

    fn counts(&self) -> (u32, u32) {
        (self.logins.get(), self.starts.get())
    }
}

impl PartialEq for CallLog {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.logins, &other.logins)
    }
}

/// The real `NavBar`, mounted until the `visible` signal turns false.
#[component]
fn Page(page: PageHandle, is_logged_in: bool, log: CallLog, visible: Slot<Signal<bool>>) -> Element {
    use_context_provider(|| page.clone());
    let shown = use_signal(|| true);
    visible.fill(shown);

    let on_login_click = use_callback({
        let log = log.clone();
        move |_: ()| log.login()
    });
    let on_get_started = use_callback(move |_: ()| log.start());

    rsx! {
        if shown() {
            NavBar { is_logged_in, on_login_click, on_get_started }
        }
    }
}

/// The bar's hook and markup wired by hand, exposing the controls.
#[component]
fn WiredPage(page: PageHandle, is_logged_in: bool, log: CallLog, controls: Slot<NavControls>) -> Element {
    use_context_provider(|| page.clone());

    let on_login_click = use_callback({
        let log = log.clone();
        move |_: ()| log.login()
    });
    let on_get_started = use_callback(move |_: ()| log.start());
    let nav = use_nav_controls(on_login_click, on_get_started);
    controls.fill(nav);

    rsx! {
        NavBarView { controls: nav, is_logged_in }
    }
}

struct Mounted<T> {
    dom: VirtualDom,
    log: CallLog,
    slot: Slot<T>,
}

fn mount_page(host: &MemoryHost, is_logged_in: bool) -> Mounted<Signal<bool>> {
    let log = CallLog::default();
    let slot = Slot::default();
    let mut dom = VirtualDom::new_with_props(
        Page,
        PageProps {
            page: PageHandle::new(host.clone()),
            is_logged_in,
            log: log.clone(),
            visible: slot.clone(),
        },
    );
    dom.rebuild_in_place();
    Mounted { dom, log, slot }
}

fn mount_wired(host: &MemoryHost, is_logged_in: bool) -> Mounted<NavControls> {
    let log = CallLog::default();
    let slot = Slot::default();
    let mut dom = VirtualDom::new_with_props(
        WiredPage,
        WiredPageProps {
            page: PageHandle::new(host.clone()),
            is_logged_in,
            log: log.clone(),
            controls: slot.clone(),
        },
    );
    dom.rebuild_in_place();
    Mounted { dom, log, slot }
}

fn run(mounted: &mut Mounted<NavControls>, command: NavCommand) {
    let nav = mounted.slot.get();
    mounted.dom.in_runtime(|| nav.run(command));
    mounted.dom.render_immediate_to_vec();
}

/// Let the scroll coroutine drain and re-render whatever it dirtied.
async fn settle(dom: &mut VirtualDom) {
    for _ in 0..3 {
        let woke = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        if woke.is_err() {
            break;
        }
        dom.render_immediate_to_vec();
    }
}

fn html(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}

fn occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[test]
fn starts_unscrolled_even_when_mounted_mid_page() {
    let host = MemoryHost::default();
    host.set_offset(240.0);
    let mounted = mount_page(&host, false);

    let html = html(&mounted.dom);
    assert!(html.contains("navbar navbar--top"), "{html}");
    assert!(!html.contains("navbar--scrolled"), "{html}");
}

#[tokio::test]
async fn scroll_threshold_switches_the_treatment() {
    let host = MemoryHost::default();
    let mut mounted = mount_page(&host, false);
    settle(&mut mounted.dom).await;

    for (offset, expected) in [
        (50.0, "navbar navbar--top"),
        (51.0, "navbar navbar--scrolled"),
        (120.0, "navbar navbar--scrolled"),
        (10.0, "navbar navbar--top"),
    ] {
        host.set_offset(offset);
        settle(&mut mounted.dom).await;
        let html = html(&mounted.dom);
        assert!(html.contains(expected), "offset {offset}: {html}");
    }
}

#[test]
fn guest_bar_shows_login_and_get_started() {
    ui::i18n::init();
    let host = MemoryHost::default();
    let mounted = mount_page(&host, false);

    let html = html(&mounted.dom);
    assert_eq!(occurrences(&html, "로그인"), 1, "{html}");
    assert_eq!(occurrences(&html, "지금 시작하기"), 1, "{html}");
    assert_eq!(occurrences(&html, "대시보드로 이동"), 0, "{html}");
    assert!(!html.contains("navbar__mobile-panel"), "{html}");
}

#[test]
fn signed_in_bar_shows_only_dashboard() {
    ui::i18n::init();
    let host = MemoryHost::default();
    let mounted = mount_page(&host, true);

    let html = html(&mounted.dom);
    assert_eq!(occurrences(&html, "class=\"navbar__action "), 1, "{html}");
    assert_eq!(occurrences(&html, "대시보드로 이동"), 1, "{html}");
    assert_eq!(occurrences(&html, "로그인"), 0, "{html}");
    assert_eq!(occurrences(&html, "지금 시작하기"), 0, "{html}");
}

#[test]
fn mounting_registers_one_listener_and_never_scrolls() {
    let host = MemoryHost::with_sections(["features", "pricing", "sample"]);
    host.set_offset(240.0);
    let _mounted = mount_page(&host, false);

    assert_eq!(host.listener_count(), 1);
    assert!(host.scroll_calls().is_empty());
    assert_eq!(host.top_scrolls(), 0);
    assert_eq!(host.scroll_offset(), 240.0);
}

#[test]
fn dropping_the_dom_releases_the_listener() {
    let host = MemoryHost::default();
    for logged_in in [false, true] {
        let mounted = mount_page(&host, logged_in);
        assert_eq!(host.listener_count(), 1);
        drop(mounted);
        assert_eq!(host.listener_count(), 0);
    }

    host.set_offset(400.0);
    assert_eq!(host.listener_count(), 0);
}

#[tokio::test]
async fn unmounted_bar_ignores_later_scrolling() {
    let host = MemoryHost::default();
    let mut mounted = mount_page(&host, false);
    assert!(html(&mounted.dom).contains("id=\"navbar\""));

    let mut shown = mounted.slot.get();
    mounted.dom.in_runtime(|| shown.set(false));
    mounted.dom.render_immediate_to_vec();
    assert_eq!(host.listener_count(), 0);

    host.set_offset(400.0);
    settle(&mut mounted.dom).await;
    let html = html(&mounted.dom);
    assert!(!html.contains("navbar"), "{html}");
    assert_eq!(mounted.log.counts(), (0, 0));
}

#[test]
fn hamburger_opens_panel_and_section_link_closes_it() {
    let host = MemoryHost::with_sections(["features", "pricing", "sample"]);
    let mut mounted = mount_wired(&host, false);

    run(&mut mounted, NavCommand::ToggleMenu);
    let open = html(&mounted.dom);
    assert!(open.contains("navbar__mobile-panel"), "{open}");
    assert!(open.contains("aria-expanded=\"true\""), "{open}");

    run(&mut mounted, NavCommand::Section(Section::Pricing));
    let closed = html(&mounted.dom);
    assert!(!closed.contains("navbar__mobile-panel"), "{closed}");
    assert_eq!(host.scroll_calls(), ["pricing"]);
    assert_eq!(mounted.log.counts(), (0, 0));
}

#[test]
fn section_missing_from_page_leaves_panel_open() {
    let host = MemoryHost::with_sections(["features"]);
    let mut mounted = mount_wired(&host, false);

    run(&mut mounted, NavCommand::ToggleMenu);
    run(&mut mounted, NavCommand::Section(Section::Sample));

    assert!(host.scroll_calls().is_empty());
    assert!(html(&mounted.dom).contains("navbar__mobile-panel"));
    let nav = mounted.slot.get();
    assert!(mounted.dom.in_runtime(|| nav.state().menu_open()));
}

#[test]
fn login_button_calls_only_the_login_handler() {
    let host = MemoryHost::default();
    let mut mounted = mount_wired(&host, false);

    run(&mut mounted, NavCommand::ToggleMenu);
    run(
        &mut mounted,
        NavCommand::Action {
            action: Action::Login,
            surface: Surface::MobileMenu,
        },
    );

    assert_eq!(mounted.log.counts(), (1, 0));
    assert!(!html(&mounted.dom).contains("navbar__mobile-panel"));
}

#[test]
fn dashboard_button_calls_get_started_once() {
    let host = MemoryHost::default();
    let mut mounted = mount_wired(&host, true);

    run(
        &mut mounted,
        NavCommand::Action {
            action: Action::Dashboard,
            surface: Surface::Desktop,
        },
    );

    assert_eq!(mounted.log.counts(), (0, 1));
}

#[test]
fn logo_scrolls_the_page_to_top() {
    let host = MemoryHost::default();
    host.set_offset(300.0);
    let mut mounted = mount_wired(&host, false);

    run(&mut mounted, NavCommand::Logo);

    assert_eq!(host.top_scrolls(), 1);
    assert_eq!(host.scroll_offset(), 0.0);
}
