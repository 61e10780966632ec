//! # Density-Independent Pixels (Dp)
//!
//! This module provides the [`Dp`] type for representing density-independent
//! pixels, the unit every range control measures its track and gesture
//! positions in.
//!
//! ## Scale Factor
//!
//! Conversion between dp and physical pixels takes the scale factor as an
//! explicit argument. The layout system that delivers a measurement also knows
//! the density it measured at, so no global scale state is kept here.
//!
//! ## Usage
//!
//! ```
//! use range_ui::{Dp, Px};
//!
//! let thumb = Dp(20.0);
//! assert_eq!(thumb.to_px(2.0), Px(40));
//! assert_eq!(Dp::from_px(Px(40), 2.0), thumb);
//! ```

use crate::Px;

/// Density-independent pixels (dp).
///
/// `Dp` wraps a single `f32`. It does not implement arithmetic operators
/// directly, operate on the inner value instead:
///
/// ```
/// use range_ui::Dp;
///
/// let track = Dp(200.0);
/// let thumb = Dp(20.0);
/// let travel = Dp(track.0 - thumb.0);
/// assert_eq!(travel, Dp(180.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    /// A constant representing zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Converts this dp value to physical pixels as an `f32`.
    pub fn to_pixels_f32(self, scale_factor: f32) -> f32 {
        self.0 * sanitize_scale(scale_factor)
    }

    /// Creates a dp value from physical pixels given as an `f32`.
    pub fn from_pixels_f32(value: f32, scale_factor: f32) -> Self {
        Dp(value / sanitize_scale(scale_factor))
    }

    /// Converts this dp value to [`Px`], saturating at the `i32` bounds.
    pub fn to_px(self, scale_factor: f32) -> Px {
        Px::saturating_from_f32(self.to_pixels_f32(scale_factor).round())
    }

    /// Converts a [`Px`] measurement into dp.
    ///
    /// A non-positive or non-finite `scale_factor` is treated as `1.0`.
    pub fn from_px(px: Px, scale_factor: f32) -> Self {
        Self::from_pixels_f32(px.to_f32(), scale_factor)
    }

    /// Returns this value with negative and NaN measurements replaced by zero.
    ///
    /// ```
    /// use range_ui::Dp;
    ///
    /// assert_eq!(Dp(-4.0).non_negative(), Dp::ZERO);
    /// assert_eq!(Dp(f32::NAN).non_negative(), Dp::ZERO);
    /// assert_eq!(Dp(12.5).non_negative(), Dp(12.5));
    /// ```
    pub fn non_negative(self) -> Self {
        if self.0.is_nan() || self.0 < 0.0 {
            Self::ZERO
        } else {
            self
        }
    }
}

fn sanitize_scale(scale_factor: f32) -> f32 {
    if scale_factor.is_finite() && scale_factor > 0.0 {
        scale_factor
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_px_conversion() {
        assert_eq!(Dp(10.0).to_px(1.5), Px(15));
        assert_eq!(Dp::from_px(Px(30), 1.5), Dp(20.0));
    }

    #[test]
    fn test_invalid_scale_factor_is_identity() {
        assert_eq!(Dp::from_px(Px(30), 0.0), Dp(30.0));
        assert_eq!(Dp::from_px(Px(30), -2.0), Dp(30.0));
        assert_eq!(Dp::from_px(Px(30), f32::NAN), Dp(30.0));
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(Dp(-1.0).non_negative(), Dp::ZERO);
        assert_eq!(Dp(f32::INFINITY).non_negative(), Dp(f32::INFINITY));
    }
}
