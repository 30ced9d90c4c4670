//! Event handling module for keyboard and mouse input.
//!
//! Terminal events are translated into Actions, which the App applies to the
//! carousel and viewport.

mod action;
mod handler;
mod keyboard;
mod mouse;

pub use action::Action;
pub use handler::EventHandler;
