//! Autoplay interval timer.
//!
//! The timer is a deadline rather than a spawned task, so the owning
//! controller decides when it is polled and it can never outlive that owner.

use std::time::{Duration, Instant};

use super::geometry::Geometry;

/// Repeating timer that fires every `interval` while armed.
#[derive(Debug, Clone)]
pub struct AutoplayTimer {
    interval: Duration,
    next_fire: Option<Instant>,
}

/// The result of advancing the carousel by one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub index: usize,
    pub offset: f64,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_fire: None,
        }
    }

    /// Arm the timer so that it first fires one interval from `now`.
    pub fn start(&mut self, now: Instant) {
        self.next_fire = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_fire = None;
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_fire
    }

    /// Returns `true` if the timer fired.
    ///
    /// Fires at most once per call. If the caller fell more than one interval
    /// behind, missed ticks are dropped and the next deadline is realigned
    /// to `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_fire else {
            return false;
        };
        if now < due {
            return false;
        }

        let mut next = due + self.interval;
        if next <= now {
            next = now + self.interval;
        }
        self.next_fire = Some(next);
        true
    }
}

/// Next item after `current`, wrapping, with its offset in the middle section.
pub fn advance(geometry: &Geometry, current: usize) -> Option<Step> {
    if geometry.is_empty() {
        return None;
    }
    let index = (current + 1) % geometry.item_count();
    Some(Step {
        index,
        offset: geometry.offset_for(index),
    })
}
