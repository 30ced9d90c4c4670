//! Drag interruption state machine
//!
//! Manual drags suspend autoplay. Releasing the drag arms a resume deadline;
//! autoplay comes back once that deadline passes, whether or not the host
//! has finished animating the snap.

use std::time::{Duration, Instant};

/// Whether autoplay ticks are allowed to move the carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    AutoplayActive,
    AutoplaySuspended {
        /// Set once the drag has been released
        resume_at: Option<Instant>,
    },
}

/// The named edges of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Drag began
    Suspend,
    /// Drag ended, resume countdown armed
    Release,
    /// Resume delay elapsed
    Resume,
    /// Controller torn down or given a new list
    Reset,
}

impl Playback {
    pub fn is_paused(&self) -> bool {
        matches!(self, Playback::AutoplaySuspended { .. })
    }

    pub fn resume_deadline(&self) -> Option<Instant> {
        match self {
            Playback::AutoplaySuspended { resume_at } => *resume_at,
            Playback::AutoplayActive => None,
        }
    }

    /// Suspend autoplay. A resume countdown left over from an earlier drag
    /// is dropped so it cannot unpause this one.
    pub fn suspend(&mut self) -> Transition {
        *self = Playback::AutoplaySuspended { resume_at: None };
        Transition::Suspend
    }

    /// Arm the resume countdown. Returns `None` when autoplay was not
    /// suspended, in which case nothing needs resuming.
    pub fn release(&mut self, now: Instant, resume_delay: Duration) -> Option<Transition> {
        match self {
            Playback::AutoplaySuspended { resume_at } => {
                *resume_at = Some(now + resume_delay);
                Some(Transition::Release)
            }
            Playback::AutoplayActive => None,
        }
    }

    /// Resume if the countdown has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<Transition> {
        match self.resume_deadline() {
            Some(at) if now >= at => {
                *self = Playback::AutoplayActive;
                Some(Transition::Resume)
            }
            _ => None,
        }
    }

    pub fn reset(&mut self) -> Transition {
        *self = Playback::AutoplayActive;
        Transition::Reset
    }
}
