//! Terminal scroll host.
//!
//! Plays the part of the platform's scrollable view: it owns the visible
//! offset, animates `scroll_to` requests with an eased tween, and turns mouse
//! drags into offset changes. Every change is reported back to the carousel
//! through [`Viewport::frame`].

use std::time::{Duration, Instant};

use crate::carousel::{ScrollHost, ScrollRequest};

#[derive(Debug, Clone, Copy)]
struct Tween {
    from: f64,
    to: f64,
    start: Instant,
    duration: Duration,
}

impl Tween {
    fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn is_done(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    fn sample(&self, now: Instant) -> f64 {
        let eased = smoothstep(self.progress(now));
        self.from + (self.to - self.from) * eased
    }
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    start_column: u16,
    start_offset: f64,
}

/// Scrollable strip with animated scroll-to.
#[derive(Debug)]
pub struct Viewport {
    offset: f64,
    max_offset: f64,
    units_per_column: f64,
    snap_duration: Duration,
    clock: Instant,
    tween: Option<Tween>,
    drag: Option<Drag>,
    /// Offset changed since the last frame
    moved: bool,
}

impl Viewport {
    pub fn new(units_per_column: f64, snap_duration: Duration, now: Instant) -> Self {
        Self {
            offset: 0.0,
            max_offset: 0.0,
            units_per_column: if units_per_column > 0.0 { units_per_column } else { 1.0 },
            snap_duration: snap_duration.max(Duration::from_millis(1)),
            clock: now,
            tween: None,
            drag: None,
            moved: false,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn units_per_column(&self) -> f64 {
        self.units_per_column
    }

    /// Largest reachable offset.
    pub fn set_max_offset(&mut self, max_offset: f64) {
        self.max_offset = max_offset.max(0.0);
        self.set_offset(self.offset);
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Something will change on the next frame.
    pub fn needs_frame(&self) -> bool {
        self.moved || self.is_animating() || self.is_dragging()
    }

    /// Set the time new animations start from, without advancing any.
    pub fn set_clock(&mut self, now: Instant) {
        self.clock = now;
    }

    /// Advance the clock and any running animation.
    ///
    /// Returns the new offset if it changed since the last frame; the caller
    /// passes it to the carousel's `on_scroll`.
    pub fn frame(&mut self, now: Instant) -> Option<f64> {
        self.clock = now;
        if let Some(tween) = self.tween {
            self.set_offset(tween.sample(now));
            if tween.is_done(now) {
                self.tween = None;
            }
        }

        if std::mem::take(&mut self.moved) {
            Some(self.offset)
        } else {
            None
        }
    }

    pub fn begin_drag(&mut self, column: u16) {
        self.tween = None;
        self.drag = Some(Drag {
            start_column: column,
            start_offset: self.offset,
        });
    }

    /// Moving the pointer right pulls content right, so the offset shrinks.
    pub fn drag_to(&mut self, column: u16) {
        if let Some(drag) = self.drag {
            let delta = f64::from(column) - f64::from(drag.start_column);
            self.set_offset(drag.start_offset - delta * self.units_per_column);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Shift the view directly, as a wheel or keyboard flick does.
    pub fn nudge(&mut self, delta: f64) {
        self.tween = None;
        self.set_offset(self.offset + delta);
    }

    fn set_offset(&mut self, offset: f64) {
        let clamped = offset.clamp(0.0, self.max_offset);
        if clamped != self.offset {
            self.offset = clamped;
            self.moved = true;
        }
    }
}

impl ScrollHost for Viewport {
    fn scroll_to(&mut self, request: ScrollRequest) {
        if request.animated {
            self.tween = Some(Tween {
                from: self.offset,
                to: request.offset,
                start: self.clock,
                duration: self.snap_duration,
            });
        } else {
            // Relocation carries an in-flight drag or animation along with it
            let delta = request.offset - self.offset;
            if let Some(drag) = self.drag.as_mut() {
                drag.start_offset += delta;
            }
            if let Some(tween) = self.tween.as_mut() {
                tween.from += delta;
                tween.to += delta;
            }
            self.set_offset(request.offset);
            // A programmatic jump is still reported, even to the same spot
            self.moved = true;
        }
    }
}
