//! Turns clicks into state transitions, page side effects and delegations.

use dioxus::logger::tracing::debug;

use super::nav_state::{NavEvent, NavState};
use super::page::{PageHost, ScrollOutcome};
use super::section::Section;
use super::variant::{Action, Delegate, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Logo,
    Section(Section),
    ToggleMenu,
    Action { action: Action, surface: Surface },
}

/// Apply `command` to `state`, performing any scroll on `host`. Returns the
/// caller callback to run, if the command delegates one.
pub fn dispatch(state: &mut NavState, host: &dyn PageHost, command: NavCommand) -> Option<Delegate> {
    match command {
        NavCommand::Logo => {
            host.scroll_to_top();
            *state = state.apply(NavEvent::CloseMenu);
            None
        }
        NavCommand::Section(section) => {
            match host.scroll_into_view(section.id()) {
                ScrollOutcome::Scrolled => *state = state.apply(NavEvent::CloseMenu),
                ScrollOutcome::TargetMissing => {
                    debug!(id = section.id(), "section not on this page; ignoring click")
                }
            }
            None
        }
        NavCommand::ToggleMenu => {
            *state = state.apply(NavEvent::ToggleMenu);
            None
        }
        NavCommand::Action { action, surface } => {
            if surface == Surface::MobileMenu {
                *state = state.apply(NavEvent::CloseMenu);
            }
            Some(action.delegate())
        }
    }
}
