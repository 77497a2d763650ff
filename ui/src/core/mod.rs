//! Framework-independent navigation logic: state machine, section targets,
//! login-dependent actions and the page host seam.

pub mod controller;
pub mod nav_state;
pub mod page;
pub mod platform;
pub mod section;
pub mod variant;
