//! Easing curves for header height animations.
//!
//! An easing maps linear progress (0.0 to 1.0) onto the fraction of the
//! distance covered so far.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    EaseIn,
    /// Quadratic ease-out (starts fast, decelerates).
    EaseOut,
    /// Cubic ease-out, a snappier deceleration.
    EaseOutCubic,
    /// Sinusoidal ease-in-out: accelerates, then decelerates.
    ///
    /// This is the classic accelerate/decelerate curve used for pull-to-refresh
    /// headers.
    #[default]
    EaseInOutSine,
}

impl Easing {
    /// Apply the curve to a progress value. Input is clamped to `0.0..=1.0`.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutSine => -((PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Interpolate between `start` and `end` at progress `t`.
    #[inline]
    pub fn lerp(self, start: f32, end: f32, t: f32) -> f32 {
        start + (end - start) * self.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseOutCubic,
        Easing::EaseInOutSine,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 0.001, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?}");
        }
    }

    #[test]
    fn test_shapes() {
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseOutCubic.apply(0.5) > Easing::EaseOut.apply(0.5));
        assert!((Easing::EaseInOutSine.apply(0.5) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_clamp_and_lerp() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
        assert_eq!(Easing::Linear.lerp(100.0, 1.0, 0.5), 50.5);
    }
}
