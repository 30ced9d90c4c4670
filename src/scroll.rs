//! Mouse wheel gestures for the carousel.
//!
//! A terminal has no "finger lifted" event for the wheel, so a burst of
//! wheel ticks is treated as one drag: the first tick opens the gesture and
//! the gesture closes once no tick has arrived for the debounce window.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut wheel = WheelGesture::default();
//!
//! // On a wheel event:
//! if wheel.tick(now) {
//!     carousel.on_drag_begin();
//! }
//!
//! // Every frame:
//! if wheel.settle(now) {
//!     carousel.on_drag_end(now, &mut viewport);
//! }
//! ```

use std::time::{Duration, Instant};

/// Tracks an in-progress wheel gesture.
#[derive(Debug, Clone)]
pub struct WheelGesture {
    /// Time of last wheel event, while a gesture is open
    last_event: Option<Instant>,
    /// Quiet period that ends a gesture
    debounce: Duration,
}

impl Default for WheelGesture {
    fn default() -> Self {
        Self::new(Duration::from_millis(150))
    }
}

impl WheelGesture {
    pub fn new(debounce: Duration) -> Self {
        Self {
            last_event: None,
            debounce,
        }
    }

    /// Record a wheel tick. Returns `true` if this tick opened a new gesture.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.last_event.replace(now).is_none()
    }

    /// Close the gesture if it has gone quiet. Returns `true` when it closed.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.last_event {
            Some(last) if now.duration_since(last) >= self.debounce => {
                self.last_event = None;
                true
            }
            _ => false,
        }
    }

    /// When the open gesture will settle if no more ticks arrive.
    pub fn deadline(&self) -> Option<Instant> {
        self.last_event.map(|last| last + self.debounce)
    }
}
