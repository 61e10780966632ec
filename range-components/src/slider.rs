//! A draggable slider for picking a value in a range.
//!
//! ## Usage
//!
//! Drive a [`Slider`] from the rendering thread: forward layout measurements
//! and gesture events to it and draw whatever [`Slider::frame`] returns. Every
//! sample of a drag is mapped to a clamped, step-quantized value and handed to
//! the `on_value_change` sink on the logic domain. The rendering thread never
//! waits for the sink; the application feeds its updated state back through
//! [`Slider::set_args`].
//!
//! ```
//! use range_components::slider::{GestureEvent, Slider, SliderArgs};
//! use range_shard::{LogicDomain, LogicDomainConfig};
//! use range_ui::Dp;
//!
//! let domain = LogicDomain::new(LogicDomainConfig::default()).unwrap();
//! let args = SliderArgs::default()
//!     .value(20.0)
//!     .on_value_change(|value| println!("slider moved to {value}"));
//! let mut slider = Slider::spawn(args, &domain);
//!
//! slider.on_layout(Dp(220.0));
//! slider.handle_gesture(GestureEvent::Start);
//! slider.handle_gesture(GestureEvent::Move { x: Dp(110.0) });
//! assert_eq!(slider.frame().fill_fraction, 0.5);
//! slider.handle_gesture(GestureEvent::End);
//! ```
use derive_setters::Setters;
use range_shard::{LogicDomain, LogicDomainError};
use range_ui::{CallbackWith, Dp, Px};
use tracing::{debug, warn};

pub use animation::{AnimationFrame, AnimationState, PRESSED_SCALE, RESTING_SCALE};
pub use commit::{Commit, CommitBridge, CommitStream};
pub use interaction::{GestureEvent, GestureId, GestureOutcome, GestureSession, GestureState};
pub use layout::{LayoutTracker, SliderProfile, slider_profile, thumb_diameter};
pub use value::{display_value, fill_fraction, map_to_value};

mod animation;
mod commit;
mod interaction;
mod layout;
mod value;

const DEFAULT_MINIMUM: f32 = 0.0;
const DEFAULT_MAXIMUM: f32 = 100.0;
const DEFAULT_STEP: f32 = 1.0;

/// Size variants for the slider component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SliderSize {
    /// Small, 16dp thumb.
    Small,
    /// Medium (default), 20dp thumb.
    #[default]
    Medium,
    /// Large, 24dp thumb.
    Large,
}

/// Rejected slider configuration.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SliderConfigError {
    /// A bound is NaN or infinite.
    #[error("slider bounds must be finite, got [{minimum}, {maximum}]")]
    NonFiniteBound {
        /// Configured lower bound.
        minimum: f32,
        /// Configured upper bound.
        maximum: f32,
    },
    /// `maximum` is below `minimum`.
    #[error("slider maximum {maximum} is below minimum {minimum}")]
    InvalidRange {
        /// Configured lower bound.
        minimum: f32,
        /// Configured upper bound.
        maximum: f32,
    },
    /// `step` is not a positive finite number.
    #[error("slider step must be positive and finite, got {0}")]
    InvalidStep(f32),
}

/// Errors surfaced by slider plumbing.
///
/// Gesture handling itself never fails; these only come out of the explicit
/// `try_` entry points.
#[derive(Debug, thiserror::Error)]
pub enum SliderError {
    /// The logic domain stopped receiving commits.
    #[error("logic domain is no longer receiving commits")]
    LogicDomainClosed,
    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] SliderConfigError),
    /// The logic domain could not be started.
    #[error(transparent)]
    LogicDomain(#[from] LogicDomainError),
}

/// Numeric and interaction configuration of a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    /// Lower bound.
    pub minimum: f32,
    /// Upper bound.
    pub maximum: f32,
    /// Quantization granularity, counted from `minimum`.
    pub step: f32,
    /// Whether gesture input is ignored.
    pub disabled: bool,
    /// Size variant.
    pub size: SliderSize,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            step: DEFAULT_STEP,
            disabled: false,
            size: SliderSize::default(),
        }
    }
}

impl SliderConfig {
    /// Returns a configuration that is always safe to compute with.
    ///
    /// Non-finite bounds fall back to the defaults, a `maximum` below
    /// `minimum` collapses onto `minimum`, and a non-positive or non-finite
    /// `step` becomes `1`.
    ///
    /// ```
    /// use range_components::slider::SliderConfig;
    ///
    /// let config = SliderConfig {
    ///     minimum: 10.0,
    ///     maximum: 2.0,
    ///     step: 0.0,
    ///     ..SliderConfig::default()
    /// }
    /// .sanitized();
    /// assert_eq!((config.minimum, config.maximum, config.step), (10.0, 10.0, 1.0));
    /// ```
    pub fn sanitized(&self) -> Self {
        let minimum = if self.minimum.is_finite() {
            self.minimum
        } else {
            DEFAULT_MINIMUM
        };
        let maximum = if self.maximum.is_finite() {
            self.maximum
        } else {
            DEFAULT_MAXIMUM
        };
        let step = if self.step.is_finite() && self.step > 0.0 {
            self.step
        } else {
            DEFAULT_STEP
        };
        Self {
            minimum,
            maximum: maximum.max(minimum),
            step,
            ..*self
        }
    }

    /// Checks the configuration strictly instead of repairing it.
    pub fn validate(&self) -> Result<Self, SliderConfigError> {
        if !self.minimum.is_finite() || !self.maximum.is_finite() {
            return Err(SliderConfigError::NonFiniteBound {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        if self.maximum < self.minimum {
            return Err(SliderConfigError::InvalidRange {
                minimum: self.minimum,
                maximum: self.maximum,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(SliderConfigError::InvalidStep(self.step));
        }
        Ok(*self)
    }

    /// Whether the range has collapsed to a single value.
    pub fn is_degenerate(&self) -> bool {
        let config = self.sanitized();
        config.maximum <= config.minimum
    }
}

/// Arguments for the [`Slider`] control.
#[derive(Debug, PartialEq, Clone, Setters)]
pub struct SliderArgs {
    /// The externally owned current value.
    pub value: f32,
    /// Sink receiving every committed value on the logic domain.
    #[setters(skip)]
    pub on_value_change: CallbackWith<f32>,
    /// Lower bound.
    pub minimum_value: f32,
    /// Upper bound.
    pub maximum_value: f32,
    /// Quantization granularity.
    pub step: f32,
    /// Ignore all gesture input.
    pub disabled: bool,
    /// Show the current value next to the track.
    pub show_value: bool,
    /// Size variant.
    pub size: SliderSize,
    /// Optional caption shown above the track.
    #[setters(strip_option, into)]
    pub label: Option<String>,
}

impl SliderArgs {
    /// Sets the on_value_change handler.
    pub fn on_value_change<F>(mut self, on_value_change: F) -> Self
    where
        F: Fn(f32) + Send + Sync + 'static,
    {
        self.on_value_change = CallbackWith::new(on_value_change);
        self
    }

    /// Sets the on_value_change handler using a shared callback.
    pub fn on_value_change_shared(
        mut self,
        on_value_change: impl Into<CallbackWith<f32>>,
    ) -> Self {
        self.on_value_change = on_value_change.into();
        self
    }

    /// The numeric and interaction part of these arguments.
    pub fn config(&self) -> SliderConfig {
        SliderConfig {
            minimum: self.minimum_value,
            maximum: self.maximum_value,
            step: self.step,
            disabled: self.disabled,
            size: self.size,
        }
    }
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            value: DEFAULT_MINIMUM,
            on_value_change: CallbackWith::new(|_| {}),
            minimum_value: DEFAULT_MINIMUM,
            maximum_value: DEFAULT_MAXIMUM,
            step: DEFAULT_STEP,
            disabled: false,
            show_value: false,
            size: SliderSize::default(),
            label: None,
        }
    }
}

fn resolve_config(args: &SliderArgs) -> SliderConfig {
    let requested = args.config();
    let config = requested.sanitized();
    if let Err(err) = requested.validate() {
        warn!("slider configuration repaired: {err}");
    }
    config
}

/// A slider control owned by the rendering thread.
///
/// Owns the track width, the drag state and the thumb scale. The committed
/// value is owned by the application and only ever read from [`SliderArgs`].
#[derive(Debug)]
pub struct Slider {
    args: SliderArgs,
    config: SliderConfig,
    layout: LayoutTracker,
    session: GestureSession,
    bridge: CommitBridge,
}

impl Slider {
    /// Creates a slider that commits through `bridge`.
    pub fn new(args: SliderArgs, bridge: CommitBridge) -> Self {
        let config = resolve_config(&args);
        Self {
            args,
            config,
            layout: LayoutTracker::new(),
            session: GestureSession::new(),
            bridge,
        }
    }

    /// Creates a slider whose commits are delivered on `domain`.
    pub fn spawn(args: SliderArgs, domain: &LogicDomain) -> Self {
        Self::new(args, CommitBridge::spawn(domain))
    }

    /// Creates a slider on the process-wide logic domain.
    pub fn try_spawn_global(args: SliderArgs) -> Result<Self, SliderError> {
        let domain = LogicDomain::global()?;
        Ok(Self::spawn(args, domain))
    }

    /// Current arguments.
    pub fn args(&self) -> &SliderArgs {
        &self.args
    }

    /// Effective (sanitized) configuration.
    pub fn config(&self) -> SliderConfig {
        self.config
    }

    /// Current drag state.
    pub fn gesture_state(&self) -> GestureState {
        self.session.state()
    }

    /// Current track width.
    pub fn track_width(&self) -> Dp {
        self.layout.width()
    }

    /// Records a new track width. Never commits a value.
    pub fn on_layout(&mut self, width: Dp) {
        self.layout.on_layout(width);
    }

    /// Records a new track width measured in physical pixels.
    pub fn on_layout_px(&mut self, width: Px, scale_factor: f32) {
        self.layout.on_layout_px(width, scale_factor);
    }

    /// Runs one gesture event through the drag state machine.
    ///
    /// A mapped sample is dispatched to the logic domain before this returns,
    /// without waiting for delivery.
    pub fn handle_gesture(&mut self, event: GestureEvent) -> GestureOutcome {
        let outcome = self.session.handle(event, &self.config, &self.layout);
        if let GestureOutcome::Sample { gesture, value } = outcome {
            self.bridge
                .dispatch(gesture, value, &self.args.on_value_change);
        }
        self.session.settle();
        outcome
    }

    /// Replaces the arguments, typically after the application stored a
    /// committed value.
    ///
    /// Disabling the slider during a drag ends the drag without a commit.
    pub fn set_args(&mut self, args: SliderArgs) {
        if args.config() != self.args.config() {
            self.config = resolve_config(&args);
        }
        self.args = args;
        if self.config.disabled
            && let Some(gesture) = self.session.interrupt()
        {
            debug!(gesture = gesture.0, "slider disabled during drag");
        }
    }

    /// Updates only the externally owned value.
    pub fn set_value(&mut self, value: f32) {
        self.args.value = value;
    }

    /// Derived visual state for the current inputs.
    pub fn animation_state(&self) -> AnimationState {
        AnimationState {
            value: self.args.value,
            track_width: self.layout.width(),
            config: self.config,
            gesture: self.session.state(),
        }
    }

    /// Visuals for the next frame.
    pub fn frame(&self) -> AnimationFrame {
        self.animation_state().frame()
    }

    /// Value readout, or `None` when `show_value` is off.
    pub fn value_text(&self) -> Option<String> {
        self.args
            .show_value
            .then(|| format!("{}", self.animation_state().display_value()))
    }

    /// Presentation profile for the current size and disabled flag.
    pub fn profile(&self) -> SliderProfile {
        slider_profile(self.config.size, self.config.disabled)
    }
}
