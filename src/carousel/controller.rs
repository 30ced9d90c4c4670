//! Infinite carousel controller.
//!
//! Owns the scroll offset, current index, playback state and every timer for
//! one carousel. The host feeds it scroll and drag events plus the current
//! time, and receives [`ScrollRequest`]s back through [`ScrollHost`].
//!
//! # Example
//!
//! ```rust,ignore
//! let mut carousel = Carousel::new(CarouselConfig::default(), items, Instant::now())?;
//!
//! // In event loop:
//! carousel.advance(Instant::now(), &mut viewport);
//! carousel.on_scroll(viewport.offset(), &mut viewport);
//! ```

#![allow(dead_code)]

use std::time::{Duration, Instant};

use crate::error::CarouselResult;
use crate::log;

use super::autoplay::{self, AutoplayTimer};
use super::drag::{Playback, Transition};
use super::geometry::Geometry;
use super::looping::{self, Boundary, Correction};

/// Tunables for one carousel instance.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Item width, in offset units
    pub card_width: f64,
    /// Spacing between items, in offset units
    pub gap: f64,
    /// Time between autoplay advances
    pub auto_scroll_interval: Duration,
    /// Time after a drag ends before autoplay resumes
    pub resume_delay: Duration,
    /// Wait before the first jump into the middle section, giving the host
    /// view time to lay out
    pub layout_delay: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            card_width: 280.0,
            gap: 12.0,
            auto_scroll_interval: Duration::from_millis(5000),
            resume_delay: Duration::from_millis(5000),
            layout_delay: Duration::from_millis(100),
        }
    }
}

/// A scroll-to command for the host view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub offset: f64,
    pub animated: bool,
}

/// The scrollable view a carousel drives.
pub trait ScrollHost {
    fn scroll_to(&mut self, request: ScrollRequest);
}

impl ScrollHost for Vec<ScrollRequest> {
    fn scroll_to(&mut self, request: ScrollRequest) {
        self.push(request);
    }
}

/// Seamless looping carousel over a list of `T`.
#[derive(Debug)]
pub struct Carousel<T> {
    config: CarouselConfig,
    items: Vec<T>,
    looped: Vec<T>,
    geometry: Geometry,
    offset: f64,
    index: usize,
    playback: Playback,
    autoplay: AutoplayTimer,
    layout_jump_at: Option<Instant>,
}

impl<T: Clone> Carousel<T> {
    /// Build a carousel and activate it if `items` is non-empty.
    pub fn new(config: CarouselConfig, items: Vec<T>, now: Instant) -> CarouselResult<Self> {
        let geometry = Geometry::new(items.len(), config.card_width, config.gap)?;
        let mut carousel = Self {
            autoplay: AutoplayTimer::new(config.auto_scroll_interval),
            looped: looping::triple(&items),
            config,
            items,
            geometry,
            offset: 0.0,
            index: 0,
            playback: Playback::default(),
            layout_jump_at: None,
        };
        carousel.activate(now);
        Ok(carousel)
    }

    /// Replace the item list. All controller state starts over.
    pub fn set_items(&mut self, items: Vec<T>, now: Instant) {
        self.geometry = self.geometry.with_item_count(items.len());
        self.looped = looping::triple(&items);
        self.items = items;
        self.teardown();
        self.offset = 0.0;
        self.activate(now);
    }

    /// Apply new tunables. The autoplay timer is recreated and the view is
    /// re-centred on the current item once the layout delay passes.
    pub fn reconfigure(&mut self, config: CarouselConfig, now: Instant) -> CarouselResult<()> {
        let geometry = Geometry::new(self.items.len(), config.card_width, config.gap)?;
        self.geometry = geometry;
        self.autoplay = AutoplayTimer::new(config.auto_scroll_interval);
        self.config = config;

        if !self.geometry.is_empty() {
            self.autoplay.start(now);
            self.layout_jump_at = Some(now + self.config.layout_delay);
        }
        log::log(&format!(
            "carousel reconfigured: pitch={} section={}",
            self.geometry.item_pitch(),
            self.geometry.section_width()
        ));
        Ok(())
    }
}

impl<T> Carousel<T> {
    fn activate(&mut self, now: Instant) {
        self.index = 0;
        if self.geometry.is_empty() {
            log::log("carousel idle: no items");
            return;
        }
        self.layout_jump_at = Some(now + self.config.layout_delay);
        self.autoplay.start(now);
        log::log(&format!(
            "carousel active: {} items, pitch={} section={}",
            self.geometry.item_count(),
            self.geometry.item_pitch(),
            self.geometry.section_width()
        ));
    }

    /// Clear every timer and return to autoplay. After this, `advance` does nothing.
    pub fn teardown(&mut self) {
        self.autoplay.stop();
        self.layout_jump_at = None;
        let transition = self.playback.reset();
        self.note(transition);
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Three back-to-back copies of the items, for rendering.
    pub fn looped_items(&self) -> &[T] {
        &self.looped
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    pub fn is_paused(&self) -> bool {
        self.playback.is_paused()
    }

    /// Earliest moment at which `advance` has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.layout_jump_at,
            self.playback.resume_deadline(),
            self.autoplay.next_deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Jump into the middle section now instead of waiting for the layout delay.
    pub fn on_layout_ready(&mut self, host: &mut impl ScrollHost) {
        if self.layout_jump_at.take().is_some() {
            self.jump_home(host);
        }
    }

    /// Run whichever timers are due at `now`.
    pub fn advance(&mut self, now: Instant, host: &mut impl ScrollHost) {
        if self.layout_jump_at.is_some_and(|at| now >= at) {
            self.layout_jump_at = None;
            self.jump_home(host);
        }

        if let Some(transition) = self.playback.poll(now) {
            self.note(transition);
        }

        if self.autoplay.poll(now) && !self.playback.is_paused() {
            if let Some(step) = autoplay::advance(&self.geometry, self.index) {
                self.index = step.index;
                host.scroll_to(ScrollRequest {
                    offset: step.offset,
                    animated: true,
                });
            }
        }
    }

    /// Host reports a new scroll offset. Called every frame while moving.
    ///
    /// Returns the boundary correction that was applied, if any.
    pub fn on_scroll(&mut self, offset: f64, host: &mut impl ScrollHost) -> Option<Correction> {
        self.offset = offset;
        let position = self.geometry.locate(offset)?;
        self.index = position.index;

        let correction = looping::correction_for(&self.geometry, &position)?;
        self.offset = correction.target;
        host.scroll_to(ScrollRequest {
            offset: correction.target,
            animated: false,
        });
        log::log(&format!(
            "boundary correction ({}): {:.1} -> {:.1}",
            match correction.boundary {
                Boundary::Leading => "leading",
                Boundary::Trailing => "trailing",
            },
            offset,
            correction.target
        ));
        Some(correction)
    }

    /// User put a finger (or mouse button) on the view.
    pub fn on_drag_begin(&mut self) {
        let transition = self.playback.suspend();
        self.note(transition);
    }

    /// User let go: snap to the nearest item and start the resume countdown.
    pub fn on_drag_end(&mut self, now: Instant, host: &mut impl ScrollHost) {
        if let Some(position) = self.geometry.locate(self.offset) {
            self.index = position.index;
            host.scroll_to(ScrollRequest {
                offset: self.geometry.offset_for(position.index),
                animated: true,
            });
        }

        if let Some(transition) = self.playback.release(now, self.config.resume_delay) {
            self.note(transition);
        }
    }

    fn jump_home(&mut self, host: &mut impl ScrollHost) {
        if self.geometry.is_empty() {
            return;
        }
        self.offset = self.geometry.offset_for(self.index);
        host.scroll_to(ScrollRequest {
            offset: self.offset,
            animated: false,
        });
    }

    fn note(&self, transition: Transition) {
        log::log_event(&format!("playback {:?} -> {:?}", transition, self.playback));
    }
}
