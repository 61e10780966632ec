use range_ui::Dp;
use tracing::{debug, trace};

use super::{LayoutTracker, SliderConfig, value::map_to_value};

/// Gesture lifecycle events delivered by the input-capture surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The pointer went down on the track.
    Start,
    /// The pointer moved; `x` is the track-local horizontal offset.
    Move {
        /// Track-local horizontal position.
        x: Dp,
    },
    /// The pointer was lifted.
    End,
    /// The platform took the gesture away (system gesture, focus loss).
    Cancel,
}

/// Identifies one drag from start to release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GestureId(pub u64);

/// Drag lifecycle state.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum GestureState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Active {
        /// The drag being tracked.
        id: GestureId,
        /// Value mapped from the most recent sample of this drag, if any.
        local_value: Option<f32>,
    },
    /// The drag just ended or was cancelled; settles back to `Idle`.
    Released {
        /// The drag that ended.
        id: GestureId,
    },
}

impl GestureState {
    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// What the rendering domain has to do after a gesture event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Nothing changed.
    Ignored,
    /// A drag started; the thumb shows its pressed scale.
    Pressed(GestureId),
    /// A sample was mapped and must be committed exactly once.
    Sample {
        /// The drag the sample belongs to.
        gesture: GestureId,
        /// The clamped, quantized value.
        value: f32,
    },
    /// A drag ended; the thumb returns to resting scale.
    Released {
        /// The drag that ended.
        gesture: GestureId,
        /// Whether the platform cancelled the drag.
        cancelled: bool,
    },
}

/// Drag state machine of a slider.
///
/// Lives on the rendering thread. Every sample received while active is mapped
/// synchronously, without throttling.
#[derive(Debug, Default)]
pub struct GestureSession {
    state: GestureState,
    next_id: u64,
}

impl GestureSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Feeds one gesture event through the state machine.
    ///
    /// A disabled `config` makes the session inert: the event is dropped and
    /// no transition happens.
    pub fn handle(
        &mut self,
        event: GestureEvent,
        config: &SliderConfig,
        layout: &LayoutTracker,
    ) -> GestureOutcome {
        if config.disabled {
            trace!(?event, "slider disabled, gesture ignored");
            return GestureOutcome::Ignored;
        }

        match (self.state, event) {
            (GestureState::Idle | GestureState::Released { .. }, GestureEvent::Start) => {
                let id = GestureId(self.next_id);
                self.next_id += 1;
                self.state = GestureState::Active {
                    id,
                    local_value: None,
                };
                debug!(gesture = id.0, "slider gesture started");
                GestureOutcome::Pressed(id)
            }
            (GestureState::Active { id, .. }, GestureEvent::Move { x }) => {
                let progress = layout.progress_at(x);
                let value = map_to_value(progress, config);
                self.state = GestureState::Active {
                    id,
                    local_value: Some(value),
                };
                trace!(gesture = id.0, x = x.0, progress, value, "slider sample");
                GestureOutcome::Sample { gesture: id, value }
            }
            (GestureState::Active { id, .. }, GestureEvent::End) => self.release(id, false),
            (GestureState::Active { id, .. }, GestureEvent::Cancel) => self.release(id, true),
            _ => GestureOutcome::Ignored,
        }
    }

    /// Ends an active drag without a final sample, as if it was cancelled.
    ///
    /// Returns the interrupted drag, or `None` when idle.
    pub fn interrupt(&mut self) -> Option<GestureId> {
        let GestureState::Active { id, .. } = self.state else {
            return None;
        };
        self.release(id, true);
        self.settle();
        Some(id)
    }

    /// Completes a release: `Released` becomes `Idle`.
    pub fn settle(&mut self) {
        if let GestureState::Released { id } = self.state {
            trace!(gesture = id.0, "slider gesture settled");
            self.state = GestureState::Idle;
        }
    }

    fn release(&mut self, id: GestureId, cancelled: bool) -> GestureOutcome {
        self.state = GestureState::Released { id };
        debug!(gesture = id.0, cancelled, "slider gesture released");
        GestureOutcome::Released {
            gesture: id,
            cancelled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(width: f32) -> LayoutTracker {
        let mut layout = LayoutTracker::new();
        layout.on_layout(Dp(width));
        layout
    }

    #[test]
    fn idle_session_ignores_samples() {
        let mut session = GestureSession::new();
        let config = SliderConfig::default();
        let layout = measured(100.0);
        for event in [
            GestureEvent::Move { x: Dp(40.0) },
            GestureEvent::End,
            GestureEvent::Cancel,
        ] {
            assert_eq!(
                session.handle(event, &config, &layout),
                GestureOutcome::Ignored
            );
            assert_eq!(session.state(), GestureState::Idle);
        }
    }

    #[test]
    fn drag_lifecycle() {
        let mut session = GestureSession::new();
        let config = SliderConfig::default();
        let layout = measured(200.0);

        let GestureOutcome::Pressed(id) = session.handle(GestureEvent::Start, &config, &layout)
        else {
            panic!("start must press");
        };
        assert_eq!(
            session.state(),
            GestureState::Active {
                id,
                local_value: None
            }
        );

        assert_eq!(
            session.handle(GestureEvent::Move { x: Dp(50.0) }, &config, &layout),
            GestureOutcome::Sample {
                gesture: id,
                value: 25.0
            }
        );
        assert_eq!(
            session.state(),
            GestureState::Active {
                id,
                local_value: Some(25.0)
            }
        );

        assert_eq!(
            session.handle(GestureEvent::End, &config, &layout),
            GestureOutcome::Released {
                gesture: id,
                cancelled: false
            }
        );
        assert_eq!(session.state(), GestureState::Released { id });
        session.settle();
        assert_eq!(session.state(), GestureState::Idle);
    }

    #[test]
    fn every_sample_is_reported() {
        let mut session = GestureSession::new();
        let config = SliderConfig::default();
        let layout = measured(100.0);
        session.handle(GestureEvent::Start, &config, &layout);

        let samples = (0..5)
            .map(|_| session.handle(GestureEvent::Move { x: Dp(30.0) }, &config, &layout))
            .filter(|outcome| matches!(outcome, GestureOutcome::Sample { .. }))
            .count();
        assert_eq!(samples, 5);
    }

    #[test]
    fn restart_while_active_keeps_gesture() {
        let mut session = GestureSession::new();
        let config = SliderConfig::default();
        let layout = measured(100.0);
        let first = session.handle(GestureEvent::Start, &config, &layout);
        assert_eq!(
            session.handle(GestureEvent::Start, &config, &layout),
            GestureOutcome::Ignored
        );
        assert_eq!(first, GestureOutcome::Pressed(GestureId(0)));
        assert!(session.is_active());
    }

    #[test]
    fn gestures_get_fresh_ids() {
        let mut session = GestureSession::new();
        let config = SliderConfig::default();
        let layout = measured(100.0);
        session.handle(GestureEvent::Start, &config, &layout);
        session.handle(GestureEvent::End, &config, &layout);
        assert_eq!(
            session.handle(GestureEvent::Start, &config, &layout),
            GestureOutcome::Pressed(GestureId(1))
        );
    }

    #[test]
    fn disabled_config_makes_input_inert() {
        let mut session = GestureSession::new();
        let config = SliderConfig {
            disabled: true,
            ..SliderConfig::default()
        };
        let layout = measured(100.0);
        for event in [
            GestureEvent::Start,
            GestureEvent::Move { x: Dp(10.0) },
            GestureEvent::End,
        ] {
            assert_eq!(
                session.handle(event, &config, &layout),
                GestureOutcome::Ignored
            );
        }
        assert_eq!(session.state(), GestureState::Idle);
    }

    #[test]
    fn cancel_releases_without_sample() {
        let mut session = GestureSession::new();
        let config = SliderConfig::default();
        let layout = measured(100.0);
        session.handle(GestureEvent::Start, &config, &layout);
        assert!(matches!(
            session.handle(GestureEvent::Cancel, &config, &layout),
            GestureOutcome::Released {
                cancelled: true,
                ..
            }
        ));
        session.settle();
        assert!(!session.is_active());
    }

    #[test]
    fn interrupt_returns_to_idle() {
        let mut session = GestureSession::new();
        let config = SliderConfig::default();
        let layout = measured(100.0);
        assert_eq!(session.interrupt(), None);
        session.handle(GestureEvent::Start, &config, &layout);
        assert_eq!(session.interrupt(), Some(GestureId(0)));
        assert_eq!(session.state(), GestureState::Idle);
    }

    #[test]
    fn unmeasured_track_samples_minimum() {
        let mut session = GestureSession::new();
        let config = SliderConfig {
            minimum: 10.0,
            ..SliderConfig::default()
        };
        let layout = LayoutTracker::new();
        session.handle(GestureEvent::Start, &config, &layout);
        assert!(matches!(
            session.handle(GestureEvent::Move { x: Dp(80.0) }, &config, &layout),
            GestureOutcome::Sample { value, .. } if value == 10.0
        ));
    }
}
