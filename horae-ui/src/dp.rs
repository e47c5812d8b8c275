//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type used for every metric in the time
//! picker theme (dial size, header gaps, minimum tap targets).
//!
//! ## Scale Factor
//!
//! The conversion between dp and logical pixels is controlled by a global
//! scale factor stored in [`SCALE_FACTOR`]. It defaults to `1.0` until the
//! host calls [`set_scale_factor`].
//!
//! ## Usage
//!
//! ```
//! use horae_ui::Dp;
//!
//! let gap = Dp(8.0);
//! let pixels = gap.to_px();
//! assert!(pixels > 0.0);
//! ```

use std::sync::OnceLock;

use parking_lot::RwLock;

/// Global scale factor for converting between dp and pixels.
///
/// The scale factor represents how many pixels correspond to one dp unit.
pub static SCALE_FACTOR: OnceLock<RwLock<f64>> = OnceLock::new();

/// Sets the global scale factor.
///
/// Later calls overwrite the previous value.
pub fn set_scale_factor(scale_factor: f64) {
    assert!(
        scale_factor > 0.0 && scale_factor.is_finite(),
        "scale factor must be positive and finite, got {scale_factor}"
    );
    let lock = SCALE_FACTOR.get_or_init(|| RwLock::new(1.0));
    *lock.write() = scale_factor;
}

fn scale_factor() -> f64 {
    SCALE_FACTOR.get().map(|lock| *lock.read()).unwrap_or(1.0)
}

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` wraps a single `f64` value. It is converted to pixels using the
/// global [`SCALE_FACTOR`] whenever a layout or hit test needs real
/// coordinates.
///
/// ```
/// use horae_ui::Dp;
///
/// const MIN_TAP: Dp = Dp::new(48.0);
/// let half = Dp(MIN_TAP.0 / 2.0);
/// assert_eq!(half, Dp(24.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Creates a new `Dp` instance with the specified value.
    pub const fn new(value: f64) -> Self {
        Dp(value)
    }

    /// Converts this dp value to pixels as an `f32`.
    pub fn to_px(self) -> f32 {
        (self.0 * scale_factor()) as f32
    }

    /// Linearly interpolates between two dp values.
    pub fn lerp(a: Dp, b: Dp, t: f64) -> Dp {
        Dp(a.0 + (b.0 - a.0) * t)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Dp(value)
    }
}

impl std::ops::Add for Dp {
    type Output = Dp;

    fn add(self, rhs: Self) -> Self::Output {
        Dp(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Dp {
    type Output = Dp;

    fn sub(self, rhs: Self) -> Self::Output {
        Dp(self.0 - rhs.0)
    }
}

impl std::ops::Mul<f64> for Dp {
    type Output = Dp;

    fn mul(self, rhs: f64) -> Self::Output {
        Dp(self.0 * rhs)
    }
}
