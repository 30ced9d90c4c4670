//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `card_strip` - Visible window onto the looping sighting cards
//! - `status_bar` - Page dots, position, playback state and hotkeys
//! - `separators` - Horizontal line separator

mod card_strip;
mod separators;
mod status_bar;

// Re-export all render functions for use in ui.rs
pub use card_strip::render_card_strip;
pub use separators::render_horizontal_separator;
pub use status_bar::{render_page_dots, render_status_bar};
