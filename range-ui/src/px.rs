//! Physical pixel measurements.
//!
//! Layout systems usually report box sizes in physical pixels. [`Px`] carries
//! such a measurement until it is converted into [`Dp`](crate::Dp) with the
//! scale factor it was measured at.
//!
//! # Example
//!
//! ```
//! use range_ui::px::Px;
//!
//! let width = Px(320);
//! assert_eq!(width.to_f32(), 320.0);
//! assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
//! ```

/// A physical pixel value.
///
/// Negative values are representable because layout systems may report them
/// for boxes scrolled out of view; consumers that need a length clamp them.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Px(pub i32);

impl Px {
    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, saturating at the numeric bounds
    /// instead of overflowing. NaN maps to zero.
    ///
    /// ```
    /// use range_ui::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7), Px(42));
    /// assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f32() {
        assert_eq!(Px(42).to_f32(), 42.0);
        assert_eq!(Px(-10).to_f32(), -10.0);
    }

    #[test]
    fn test_saturating_from_f32() {
        assert_eq!(Px::saturating_from_f32(f32::MAX), Px(i32::MAX));
        assert_eq!(Px::saturating_from_f32(f32::MIN), Px(i32::MIN));
        assert_eq!(Px::saturating_from_f32(100.5), Px(100));
        assert_eq!(Px::saturating_from_f32(-100.5), Px(-100));
        assert_eq!(Px::saturating_from_f32(f32::NAN), Px(0));
    }
}
