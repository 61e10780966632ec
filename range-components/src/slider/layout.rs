use range_ui::{Dp, Px};
use tracing::trace;

use super::{SliderSize, value::clamp_progress};

struct SliderSpecs {
    container_height: Dp,
    track_height: Dp,
    thumb_diameter: Dp,
}

fn get_slider_specs(size: SliderSize) -> SliderSpecs {
    match size {
        SliderSize::Small => SliderSpecs {
            container_height: Dp(24.0),
            track_height: Dp(4.0),
            thumb_diameter: Dp(16.0),
        },
        SliderSize::Medium => SliderSpecs {
            container_height: Dp(32.0),
            track_height: Dp(6.0),
            thumb_diameter: Dp(20.0),
        },
        SliderSize::Large => SliderSpecs {
            container_height: Dp(40.0),
            track_height: Dp(8.0),
            thumb_diameter: Dp(24.0),
        },
    }
}

const DISABLED_OPACITY: f32 = 0.5;

/// Fixed presentation attributes for a size/disabled combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderProfile {
    /// Height of the touch container around the track.
    pub container_height: Dp,
    /// Thickness of the track and of the fill drawn over it.
    pub track_height: Dp,
    /// Diameter of the thumb.
    pub thumb_diameter: Dp,
    /// Opacity applied to the whole control.
    pub opacity: f32,
}

/// Looks up the presentation profile for a size and disabled flag.
///
/// ```
/// use range_components::slider::{SliderSize, slider_profile};
/// use range_ui::Dp;
///
/// let profile = slider_profile(SliderSize::Large, true);
/// assert_eq!(profile.thumb_diameter, Dp(24.0));
/// assert_eq!(profile.opacity, 0.5);
/// ```
pub fn slider_profile(size: SliderSize, disabled: bool) -> SliderProfile {
    let specs = get_slider_specs(size);
    SliderProfile {
        container_height: specs.container_height,
        track_height: specs.track_height,
        thumb_diameter: specs.thumb_diameter,
        opacity: if disabled { DISABLED_OPACITY } else { 1.0 },
    }
}

/// Thumb diameter for a size variant.
pub fn thumb_diameter(size: SliderSize) -> Dp {
    get_slider_specs(size).thumb_diameter
}

/// Holds the measured width of the slider track.
///
/// The width is `0` until the first layout pass. Readers must query
/// [`width`](Self::width) whenever they need it; a previous reading is stale
/// as soon as the next layout event arrives.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct LayoutTracker {
    width: Dp,
}

impl LayoutTracker {
    /// Creates a tracker with an unmeasured (zero) width.
    pub fn new() -> Self {
        Self { width: Dp::ZERO }
    }

    /// Stores a new track width. Negative and NaN widths are stored as zero.
    pub fn on_layout(&mut self, width: Dp) {
        let width = width.non_negative();
        if width != self.width {
            trace!(width = width.0, "slider track measured");
        }
        self.width = width;
    }

    /// Stores a physical-pixel measurement taken at `scale_factor`.
    pub fn on_layout_px(&mut self, width: Px, scale_factor: f32) {
        self.on_layout(Dp::from_px(width, scale_factor));
    }

    /// Current track width.
    pub fn width(&self) -> Dp {
        self.width
    }

    /// Whether a non-zero width has been measured.
    pub fn is_measured(&self) -> bool {
        self.width.0 > 0.0
    }

    /// Converts a track-local position into a progress fraction in `[0, 1]`.
    ///
    /// An unmeasured track reports `0` for every position.
    pub fn progress_at(&self, position: Dp) -> f32 {
        if !self.is_measured() {
            return 0.0;
        }
        clamp_progress(position.0 / self.width.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_track_has_zero_progress() {
        let tracker = LayoutTracker::new();
        assert!(!tracker.is_measured());
        assert_eq!(tracker.width(), Dp::ZERO);
        assert_eq!(tracker.progress_at(Dp(120.0)), 0.0);
        assert_eq!(tracker.progress_at(Dp(f32::NAN)), 0.0);
    }

    #[test]
    fn progress_follows_latest_width() {
        let mut tracker = LayoutTracker::new();
        tracker.on_layout(Dp(200.0));
        assert_eq!(tracker.progress_at(Dp(50.0)), 0.25);

        tracker.on_layout(Dp(100.0));
        assert_eq!(tracker.progress_at(Dp(50.0)), 0.5);
        assert_eq!(tracker.progress_at(Dp(-10.0)), 0.0);
        assert_eq!(tracker.progress_at(Dp(400.0)), 1.0);
    }

    #[test]
    fn invalid_widths_are_stored_as_zero() {
        let mut tracker = LayoutTracker::new();
        tracker.on_layout(Dp(-5.0));
        assert_eq!(tracker.width(), Dp::ZERO);
        tracker.on_layout(Dp(f32::NAN));
        assert_eq!(tracker.width(), Dp::ZERO);
    }

    #[test]
    fn physical_measurements_are_scaled() {
        let mut tracker = LayoutTracker::new();
        tracker.on_layout_px(Px(600), 3.0);
        assert_eq!(tracker.width(), Dp(200.0));
    }

    #[test]
    fn profiles_follow_size_table() {
        assert_eq!(thumb_diameter(SliderSize::Small), Dp(16.0));
        assert_eq!(thumb_diameter(SliderSize::Medium), Dp(20.0));
        assert_eq!(thumb_diameter(SliderSize::Large), Dp(24.0));

        let medium = slider_profile(SliderSize::Medium, false);
        assert_eq!(medium.container_height, Dp(32.0));
        assert_eq!(medium.track_height, Dp(6.0));
        assert_eq!(medium.opacity, 1.0);
        assert_eq!(slider_profile(SliderSize::Small, true).opacity, 0.5);
    }
}
