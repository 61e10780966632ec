use range_ui::Dp;

use super::{
    GestureState, SliderConfig,
    layout::thumb_diameter,
    value::{display_value, fill_fraction},
};

/// Thumb scale while a drag is in progress.
pub const PRESSED_SCALE: f32 = 1.2;
/// Thumb scale at rest.
pub const RESTING_SCALE: f32 = 1.0;

/// Visuals for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// Thumb scale factor.
    pub scale: f32,
    /// Horizontal offset of the thumb's leading edge within the track.
    pub thumb_offset: Dp,
    /// Fraction of the track covered by the fill, in `[0, 1]`.
    pub fill_fraction: f32,
}

impl AnimationFrame {
    /// Fill extent as a percentage of the track width.
    pub fn fill_percent(&self) -> f32 {
        self.fill_fraction * 100.0
    }
}

/// Inputs a frame is derived from.
///
/// A frame is a pure function of these four inputs, so an external change to
/// `value` shows up in the very next frame with nothing to reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Last value confirmed by the logic domain.
    pub value: f32,
    /// Current track width.
    pub track_width: Dp,
    /// Slider configuration.
    pub config: SliderConfig,
    /// Drag state.
    pub gesture: GestureState,
}

impl AnimationState {
    /// Value the thumb is drawn at.
    ///
    /// During a drag this is the locally mapped sample, so the thumb follows
    /// the pointer before the logic domain round-trips. Otherwise it is the
    /// confirmed value, clamped into range.
    pub fn display_value(&self) -> f32 {
        match self.gesture {
            GestureState::Active {
                local_value: Some(local),
                ..
            } => local,
            _ => display_value(self.value, &self.config),
        }
    }

    /// Thumb scale for the current drag state.
    pub fn scale(&self) -> f32 {
        if self.gesture.is_active() {
            PRESSED_SCALE
        } else {
            RESTING_SCALE
        }
    }

    /// Derives the frame.
    pub fn frame(&self) -> AnimationFrame {
        let fill_fraction = fill_fraction(self.display_value(), &self.config);
        let travel = self.track_width.non_negative().0 - thumb_diameter(self.config.size).0;
        let thumb_offset = Dp(fill_fraction * travel.max(0.0));
        AnimationFrame {
            scale: self.scale(),
            thumb_offset,
            fill_fraction,
        }
    }
}
