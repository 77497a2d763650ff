//! Which call-to-action buttons the bar shows, keyed on login status.

/// Login-dependent flavour of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Guest,
    Authenticated,
}

/// A call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    GetStarted,
    Dashboard,
}

/// Where a control was clicked. Only the mobile panel closes itself after an
/// action; the desktop row has nothing to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Desktop,
    MobileMenu,
}

/// Caller-supplied callback an action resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delegate {
    Login,
    GetStarted,
}

const GUEST_ACTIONS: [Action; 2] = [Action::Login, Action::GetStarted];
const AUTHENTICATED_ACTIONS: [Action; 1] = [Action::Dashboard];

impl Variant {
    pub fn from_logged_in(is_logged_in: bool) -> Self {
        if is_logged_in {
            Variant::Authenticated
        } else {
            Variant::Guest
        }
    }

    pub fn actions(self) -> &'static [Action] {
        match self {
            Variant::Guest => &GUEST_ACTIONS,
            Variant::Authenticated => &AUTHENTICATED_ACTIONS,
        }
    }
}

impl Action {
    pub fn delegate(self) -> Delegate {
        match self {
            Action::Login => Delegate::Login,
            Action::GetStarted | Action::Dashboard => Delegate::GetStarted,
        }
    }

    pub fn label(self) -> String {
        match self {
            Action::Login => crate::t!("nav-login"),
            Action::GetStarted => crate::t!("nav-get-started"),
            Action::Dashboard => crate::t!("nav-dashboard"),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Action::Login => "navbar__action navbar__action--ghost",
            Action::GetStarted | Action::Dashboard => "navbar__action navbar__action--primary",
        }
    }
}

impl Delegate {
    /// Run the callback this delegate names, and only that one.
    pub fn invoke(self, on_login: impl FnOnce(), on_get_started: impl FnOnce()) {
        match self {
            Delegate::Login => on_login(),
            Delegate::GetStarted => on_get_started(),
        }
    }
}
