//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No-op
    None,

    // === Application ===
    /// Quit the application
    Quit,
    /// Reload the sighting feed from disk
    Reload,

    // === Carousel ===
    /// Pointer pressed on the strip at a column
    DragBegin(u16),
    /// Pointer moved to a column while pressed
    DragTo(u16),
    /// Pointer released
    DragEnd,
    /// Keyboard flick by a number of items (negative = back)
    Nudge(i32),
    /// Wheel tick (negative = back)
    Wheel(i32),
}
