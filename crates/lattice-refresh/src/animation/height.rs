//! Timed animation of the header's visible height.

use std::time::{Duration, Instant};

use super::easing::Easing;

/// An in-flight animation from one height to another.
///
/// The animation does not drive itself: the owner samples it with the current
/// time and applies the returned height.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightAnimation {
    from: u32,
    to: u32,
    duration: Duration,
    started_at: Instant,
    easing: Easing,
}

/// One sample of a [`HeightAnimation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeightSample {
    /// Height at the sampled instant.
    pub height: u32,
    /// Whether the animation has reached its target.
    pub finished: bool,
}

impl HeightAnimation {
    /// Start an animation at `started_at`.
    pub fn new(from: u32, to: u32, duration: Duration, easing: Easing, started_at: Instant) -> Self {
        Self {
            from,
            to,
            duration,
            started_at,
            easing,
        }
    }

    /// The height this animation ends at.
    #[inline]
    pub fn target(&self) -> u32 {
        self.to
    }

    /// The configured duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress at `now`, from 0.0 to 1.0.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Sample the eased height at `now`.
    pub fn sample(&self, now: Instant) -> HeightSample {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return HeightSample {
                height: self.to,
                finished: true,
            };
        }

        let height = self
            .easing
            .lerp(self.from as f32, self.to as f32, progress)
            .round()
            .max(0.0) as u32;
        HeightSample {
            height,
            finished: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_samples() {
        let start = Instant::now();
        let anim = HeightAnimation::new(1, 101, Duration::from_millis(100), Easing::Linear, start);

        assert_eq!(anim.sample(start).height, 1);
        let mid = anim.sample(start + Duration::from_millis(50));
        assert_eq!(mid.height, 51);
        assert!(!mid.finished);

        let end = anim.sample(start + Duration::from_millis(100));
        assert_eq!(end, HeightSample { height: 101, finished: true });
    }

    #[test]
    fn test_collapsing_animation() {
        let start = Instant::now();
        let anim = HeightAnimation::new(300, 1, Duration::from_millis(300), Easing::EaseInOutSine, start);

        let early = anim.sample(start + Duration::from_millis(30)).height;
        let late = anim.sample(start + Duration::from_millis(270)).height;
        assert!(early < 300 && early > late);
        assert!(late > 1);
        assert_eq!(anim.sample(start + Duration::from_secs(1)).height, 1);
        assert_eq!(anim.target(), 1);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let start = Instant::now();
        let anim = HeightAnimation::new(10, 40, Duration::ZERO, Easing::Linear, start);
        assert_eq!(anim.progress(start), 1.0);
        assert!(anim.sample(start).finished);
    }
}
