//! The navigation bar's only state: two independent flags.

/// Offsets strictly greater than this switch the bar to its scrolled look.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    scrolled: bool,
    menu_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavEvent {
    Scrolled { offset: f64 },
    ToggleMenu,
    CloseMenu,
}

impl NavState {
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn apply(self, event: NavEvent) -> Self {
        match event {
            NavEvent::Scrolled { offset } => Self {
                scrolled: is_scrolled(offset),
                ..self
            },
            NavEvent::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavEvent::CloseMenu => Self {
                menu_open: false,
                ..self
            },
        }
    }
}
