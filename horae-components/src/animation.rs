//! Animation mapping for UI components.

use std::time::{Duration, Instant};

/// Cubic ease-in-out mapping.
/// Input: linear progress in [0.0, 1.0].
/// Output: eased progress in [0.0, 1.0].
pub(crate) fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A fixed-duration eased interpolation between two angles.
///
/// Angles are not wrapped here; callers normalize the sampled value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AngleTween {
    begin: f32,
    end: f32,
    start: Instant,
    duration: Duration,
}

impl AngleTween {
    pub(crate) fn new(begin: f32, end: f32, start: Instant, duration: Duration) -> Self {
        Self {
            begin,
            end,
            start,
            duration,
        }
    }

    pub(crate) fn end(&self) -> f32 {
        self.end
    }

    fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// The interpolated angle at `now`.
    pub(crate) fn sample(&self, now: Instant) -> f32 {
        let t = easing(self.progress(now));
        self.begin + (self.end - self.begin) * t
    }

    pub(crate) fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_monotonic_with_fixed_endpoints() {
        assert_eq!(easing(0.0), 0.0);
        assert_eq!(easing(1.0), 1.0);
        assert_eq!(easing(0.5), 0.5);
        let mut last = 0.0;
        for step in 1..=20 {
            let value = easing(step as f32 / 20.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn tween_samples_between_endpoints() {
        let start = Instant::now();
        let tween = AngleTween::new(1.0, 3.0, start, Duration::from_millis(200));
        assert_eq!(tween.sample(start), 1.0);
        assert!((tween.sample(start + Duration::from_millis(100)) - 2.0).abs() < 1e-4);
        assert_eq!(tween.sample(start + Duration::from_millis(500)), 3.0);
        assert!(!tween.is_finished(start + Duration::from_millis(199)));
        assert!(tween.is_finished(start + Duration::from_millis(200)));
    }
}
