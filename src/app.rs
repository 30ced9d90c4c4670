use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::carousel::Carousel;
use crate::config::Config;
use crate::error::Result;
use crate::events::Action;
use crate::feed::{self, Sighting};
use crate::log;
use crate::scroll::WheelGesture;
use crate::viewport::Viewport;

/// Columns a single wheel tick moves the strip
const WHEEL_STEP_COLUMNS: f64 = 3.0;

/// Longest the event loop sleeps while nothing is scheduled
const IDLE_WAKEUP: Duration = Duration::from_secs(1);

/// How long a status message stays in the status bar
const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// Application state: one carousel over the sighting feed and the view it drives.
#[derive(Debug)]
pub struct App {
    pub carousel: Carousel<Sighting>,
    pub viewport: Viewport,
    wheel: WheelGesture,
    feed_path: Option<PathBuf>,
    frame_interval: Duration,
    /// One-line message for the status bar and when it expires
    status: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        config: &Config,
        sightings: Vec<Sighting>,
        now: Instant,
    ) -> Result<Self> {
        let carousel = Carousel::new(config.carousel_config(), sightings, now)?;
        let viewport = Viewport::new(
            config.display.units_per_column,
            config.snap_duration(),
            now,
        );

        let mut app = Self {
            carousel,
            viewport,
            wheel: WheelGesture::default(),
            feed_path: config.feed_path(),
            frame_interval: config.frame_interval(),
            status: None,
            should_quit: false,
        };
        app.sync_bounds();
        Ok(app)
    }

    /// Read sightings from `path`, or the built-in feed when there is none.
    pub fn load_feed(path: Option<&Path>) -> Result<Vec<Sighting>> {
        match path {
            Some(path) => Ok(feed::load(path)?),
            None => Ok(feed::builtin()),
        }
    }

    /// Current status bar message, if it has not expired yet.
    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn is_dragging(&self) -> bool {
        self.viewport.is_dragging()
    }

    pub fn apply(&mut self, action: Action, now: Instant) {
        self.viewport.set_clock(now);
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Reload => self.reload(now),
            Action::DragBegin(column) => {
                self.carousel.on_drag_begin();
                self.viewport.begin_drag(column);
            }
            Action::DragTo(column) => {
                self.viewport.drag_to(column);
                self.report_scroll(now);
            }
            Action::DragEnd => {
                self.viewport.end_drag();
                self.report_scroll(now);
                self.carousel.on_drag_end(now, &mut self.viewport);
            }
            Action::Nudge(items) => {
                let pitch = self.carousel.geometry().item_pitch();
                self.carousel.on_drag_begin();
                self.viewport.nudge(f64::from(items) * pitch);
                self.report_scroll(now);
                self.carousel.on_drag_end(now, &mut self.viewport);
            }
            Action::Wheel(delta) => {
                if self.wheel.tick(now) {
                    self.carousel.on_drag_begin();
                }
                let step = WHEEL_STEP_COLUMNS * self.viewport.units_per_column();
                self.viewport.nudge(f64::from(delta) * step);
                self.report_scroll(now);
            }
        }
    }

    /// The first frame has been drawn, so the strip can take a scroll command.
    pub fn layout_ready(&mut self, now: Instant) {
        self.viewport.set_clock(now);
        self.carousel.on_layout_ready(&mut self.viewport);
        self.report_scroll(now);
    }

    /// Advance timers and animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.viewport.set_clock(now);
        self.carousel.advance(now, &mut self.viewport);
        self.report_scroll(now);

        if self.wheel.settle(now) {
            self.carousel.on_drag_end(now, &mut self.viewport);
            self.report_scroll(now);
        }

        if self.status.as_ref().is_some_and(|(_, expires)| now >= *expires) {
            self.status = None;
        }
    }

    /// When the event loop should wake up next if no input arrives.
    pub fn next_wakeup(&self, now: Instant) -> Instant {
        let mut wakeup = now + IDLE_WAKEUP;
        if self.viewport.needs_frame() {
            wakeup = wakeup.min(now + self.frame_interval);
        }
        let status_expiry = self.status.as_ref().map(|(_, expires)| *expires);
        for deadline in [self.carousel.next_deadline(), self.wheel.deadline(), status_expiry]
            .into_iter()
            .flatten()
        {
            wakeup = wakeup.min(deadline);
        }
        wakeup.max(now)
    }

    /// Re-read the feed. A bad feed leaves the current list on screen.
    pub fn reload(&mut self, now: Instant) {
        match Self::load_feed(self.feed_path.as_deref()) {
            Ok(sightings) => {
                log::log(&format!("Reloaded feed: {} sightings", sightings.len()));
                self.set_status(format!("Reloaded {} sightings", sightings.len()), now);
                self.carousel.set_items(sightings, now);
                self.sync_bounds();
            }
            Err(e) => {
                log::log(&format!("Failed to reload feed: {}", e));
                self.set_status(format!("Reload failed: {}", e), now);
            }
        }
    }

    /// Stop all carousel timers before exit.
    pub fn shutdown(&mut self) {
        self.carousel.teardown();
        log::log("carousel torn down");
    }

    fn set_status(&mut self, message: String, now: Instant) {
        self.status = Some((message, now + STATUS_TIMEOUT));
    }

    /// Pass any viewport movement back into the carousel.
    fn report_scroll(&mut self, now: Instant) {
        if let Some(offset) = self.viewport.frame(now) {
            self.carousel.on_scroll(offset, &mut self.viewport);
        }
    }

    /// The view may scroll across the whole tripled strip. It stops half an
    /// item short of the end, inside the trailing copy's correction zone, and
    /// the renderer wraps whatever lies past the last card.
    fn sync_bounds(&mut self) {
        let pitch = self.carousel.geometry().item_pitch();
        let content = self.carousel.looped_items().len() as f64 * pitch;
        self.viewport.set_max_offset(content - pitch / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: Duration = Duration::from_millis(100);
    const INTERVAL: Duration = Duration::from_millis(5000);
    const SNAP: Duration = Duration::from_millis(300);

    /// 8 units per column over a 4380-unit strip.
    fn app(t0: Instant) -> App {
        let mut app = App::new(&Config::default(), feed::builtin(), t0).unwrap();
        app.tick(t0 + LAYOUT);
        app
    }

    #[test]
    fn test_initial_jump_reaches_viewport() {
        let t0 = Instant::now();
        let app = app(t0);
        assert_eq!(app.viewport.offset(), 1460.0);
        assert_eq!(app.carousel.offset(), 1460.0);
    }

    #[test]
    fn test_autoplay_animates_viewport() {
        let t0 = Instant::now();
        let mut app = app(t0);

        app.tick(t0 + INTERVAL);
        assert_eq!(app.carousel.current_index(), 1);
        assert!(app.viewport.is_animating());

        app.tick(t0 + INTERVAL + SNAP);
        assert_eq!(app.viewport.offset(), 1752.0);
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn test_drag_into_leading_zone_is_corrected() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let now = t0 + LAYOUT;

        app.apply(Action::DragBegin(10), now);
        assert!(app.carousel.is_paused());
        // 160 columns right pulls the strip back 1280 units, to offset 180
        app.apply(Action::DragTo(170), now);
        assert_eq!(app.carousel.offset(), 1640.0);

        app.tick(now);
        assert_eq!(app.viewport.offset(), 1640.0);
    }

    #[test]
    fn test_dragging_right_wraps_through_trailing_zone() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let now = t0 + LAYOUT;
        let section = app.carousel.geometry().section_width();

        let mut wrapped = false;
        for _ in 0..20 {
            let before = app.viewport.offset();
            app.apply(Action::DragBegin(200), now);
            app.apply(Action::DragTo(0), now);
            // Pulling content left only ever grows the offset unless it was relocated
            if app.viewport.offset() < before {
                wrapped = true;
                break;
            }
            app.apply(Action::DragEnd, now);
        }

        assert!(wrapped, "stuck at {}", app.viewport.offset());
        let offset = app.viewport.offset();
        assert_eq!(app.carousel.offset(), offset);
        assert!(offset >= section && offset < 2.0 * section);
    }

    #[test]
    fn test_drag_past_the_end_lands_in_middle_section() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let now = t0 + LAYOUT;

        // 400 columns is 3200 units: 1460 + 3200 stops at 4380 - 146 = 4234
        app.apply(Action::DragBegin(400), now);
        app.apply(Action::DragTo(0), now);
        assert_eq!(app.carousel.offset(), 2774.0);
        assert_eq!(app.viewport.offset(), 2774.0);
    }

    #[test]
    fn test_drag_end_snaps_and_pauses() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let now = t0 + LAYOUT;

        app.apply(Action::DragBegin(40), now);
        app.apply(Action::DragTo(20), now);
        app.apply(Action::DragEnd, now);
        assert!(app.viewport.is_animating());
        assert_eq!(app.carousel.current_index(), 1);

        app.tick(now + SNAP);
        assert_eq!(app.viewport.offset(), 1752.0);
        app.tick(t0 + INTERVAL);
        assert!(app.carousel.is_paused());
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn test_nudge_flicks_one_item() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let now = t0 + LAYOUT;

        app.apply(Action::Nudge(1), now);
        assert_eq!(app.carousel.current_index(), 1);
        assert!(app.carousel.is_paused());
    }

    #[test]
    fn test_wheel_gesture_ends_as_drag() {
        let t0 = Instant::now();
        let mut app = app(t0);
        let now = t0 + LAYOUT;

        app.apply(Action::Wheel(1), now);
        app.apply(Action::Wheel(1), now + Duration::from_millis(20));
        assert!(app.carousel.is_paused());
        assert_eq!(app.viewport.offset(), 1460.0 + 48.0);

        app.tick(now + Duration::from_millis(500));
        assert!(app.viewport.is_animating());
        app.tick(now + Duration::from_millis(800));
        assert_eq!(app.viewport.offset(), 1460.0);
    }

    #[test]
    fn test_layout_ready_skips_the_delay() {
        let t0 = Instant::now();
        let mut app = App::new(&Config::default(), feed::builtin(), t0).unwrap();
        app.layout_ready(t0);
        assert_eq!(app.viewport.offset(), 1460.0);
        assert_eq!(app.next_wakeup(t0), t0 + Duration::from_secs(1));
    }

    #[test]
    fn test_next_wakeup_tracks_timers() {
        let t0 = Instant::now();
        let app = App::new(&Config::default(), feed::builtin(), t0).unwrap();
        assert_eq!(app.next_wakeup(t0), t0 + LAYOUT);
    }

    #[test]
    fn test_reload_failure_keeps_items() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.feed_path = Some(PathBuf::from("/nonexistent/catreel/feed.toml"));

        app.apply(Action::Reload, t0 + LAYOUT);
        assert_eq!(app.carousel.items().len(), 5);
        assert!(app.status().unwrap_or_default().starts_with("Reload failed"));
    }

    #[test]
    fn test_status_message_expires() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.feed_path = None;
        let now = t0 + LAYOUT;

        app.apply(Action::Reload, now);
        assert_eq!(app.status(), Some("Reloaded 5 sightings"));
        assert!(app.next_wakeup(now) <= now + STATUS_TIMEOUT);

        app.tick(now + STATUS_TIMEOUT - Duration::from_millis(1));
        assert!(app.status().is_some());
        app.tick(now + STATUS_TIMEOUT);
        assert!(app.status().is_none());
    }

    #[test]
    fn test_empty_feed_shows_nothing() {
        let t0 = Instant::now();
        let mut app = App::new(&Config::default(), Vec::new(), t0).unwrap();
        app.apply(Action::DragBegin(4), t0);
        app.apply(Action::DragTo(0), t0);
        app.apply(Action::DragEnd, t0);
        app.tick(t0 + INTERVAL);
        assert_eq!(app.viewport.offset(), 0.0);
        assert!(app.carousel.looped_items().is_empty());
    }

    #[test]
    fn test_quit() {
        let t0 = Instant::now();
        let mut app = app(t0);
        app.apply(Action::Quit, t0);
        assert!(app.should_quit);
        app.shutdown();
        assert!(app.carousel.next_deadline().is_none());
    }
}
