//! Seamless infinite carousel.
//!
//! - `geometry` - Item pitch, section width and offset decomposition
//! - `looping` - Tripled list and boundary correction
//! - `autoplay` - Interval timer and the advance step
//! - `drag` - Autoplay suspend/resume state machine
//! - `controller` - Per-carousel controller tying it together

mod autoplay;
mod controller;
mod drag;
mod geometry;
mod looping;

pub use controller::{Carousel, CarouselConfig, ScrollHost, ScrollRequest};
pub use drag::Playback;
#[allow(unused_imports)]
pub use geometry::{Geometry, Position};
#[allow(unused_imports)]
pub use looping::{Boundary, Correction, SECTION_COUNT};
