//! Height animation support for the refresh header.
//!
//! Animations are sampled rather than rendered: the header state machine
//! samples the active [`HeightAnimation`] on every tick and publishes the
//! resulting height. How that height is drawn is up to the host.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use lattice_refresh::animation::{Easing, HeightAnimation};
//!
//! let start = Instant::now();
//! let anim = HeightAnimation::new(1, 100, Duration::from_millis(500), Easing::Linear, start);
//! assert_eq!(anim.sample(start + Duration::from_millis(500)).height, 100);
//! ```

mod easing;
mod height;

pub use easing::Easing;
pub use height::{HeightAnimation, HeightSample};
