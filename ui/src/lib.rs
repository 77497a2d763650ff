//! Shared UI crate for sitenav: the site navigation bar and the logic behind it.

pub mod core;
pub mod i18n;

pub mod components {
    // Site navigation bar (components/nav_bar.rs)
    pub mod nav_bar;
    pub use nav_bar::{use_nav_controls, NavBar, NavBarView, NavControls};
}

pub use components::{use_nav_controls, NavBar, NavBarView, NavControls};
pub use self::core::platform::{MemoryHost, PageHandle};
