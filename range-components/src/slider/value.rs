use super::SliderConfig;

/// Clamps a progress fraction into `[0, 1]`. NaN becomes `0`.
pub(super) fn clamp_progress(progress: f32) -> f32 {
    if progress.is_nan() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// Maps a drag progress fraction onto the slider's value domain.
///
/// The progress is clamped to `[0, 1]`, scaled onto
/// `[minimum, maximum]`, snapped to the nearest multiple of `step` counted
/// from `minimum`, and clamped again because snapping can overshoot the upper
/// bound when `step` does not divide the range. A collapsed range
/// (`maximum <= minimum`) always yields `minimum`.
///
/// The configuration is sanitized first, so degenerate steps or bounds never
/// produce a non-finite value.
///
/// ```
/// use range_components::slider::{SliderConfig, map_to_value};
///
/// let config = SliderConfig::default();
/// assert_eq!(map_to_value(0.5, &config), 50.0);
///
/// let coarse = SliderConfig {
///     maximum: 10.0,
///     step: 4.0,
///     ..SliderConfig::default()
/// };
/// // 10 / 4 rounds up to 12, which is pulled back onto the bound.
/// assert_eq!(map_to_value(1.0, &coarse), 10.0);
/// ```
pub fn map_to_value(progress: f32, config: &SliderConfig) -> f32 {
    let config = config.sanitized();
    let (minimum, maximum, step) = (config.minimum, config.maximum, config.step);
    if maximum <= minimum {
        return minimum;
    }

    // Widened so that spans between extreme finite bounds stay finite.
    let (low, high, step) = (f64::from(minimum), f64::from(maximum), f64::from(step));
    let progress = f64::from(clamp_progress(progress));
    let offset = progress * (high - low);
    let quantized = (offset / step).round().mul_add(step, low);
    if quantized.is_nan() {
        return minimum;
    }
    (quantized as f32).clamp(minimum, maximum)
}

/// Fraction of the track covered by `value`, display-clamped to `[0, 1]`.
///
/// Out-of-range values are clamped for display only; nothing is written back.
/// A collapsed range reports `0`.
pub fn fill_fraction(value: f32, config: &SliderConfig) -> f32 {
    let config = config.sanitized();
    let low = f64::from(config.minimum);
    let span = f64::from(config.maximum) - low;
    if span <= 0.0 {
        return 0.0;
    }
    clamp_progress(((f64::from(value) - low) / span) as f32)
}

/// Clamps an externally supplied value into the configured range for display.
pub fn display_value(value: f32, config: &SliderConfig) -> f32 {
    let config = config.sanitized();
    if config.maximum <= config.minimum || value.is_nan() {
        return config.minimum;
    }
    value.clamp(config.minimum, config.maximum)
}
