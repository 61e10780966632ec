//! Gesture-driven range controls.
//!
//! # Usage
//!
//! A control is split across two execution domains. Gesture handling, layout
//! tracking and per-frame visuals run on the rendering thread; the value sink
//! runs on a [`range_shard::LogicDomain`]. The two only talk through a
//! fire-and-forget commit channel.
//!
//! ```
//! use range_components::slider::{GestureEvent, Slider, SliderArgs};
//! use range_shard::{LogicDomain, LogicDomainConfig};
//! use range_ui::Dp;
//!
//! let domain = LogicDomain::new(LogicDomainConfig::default()).unwrap();
//! let mut slider = Slider::spawn(SliderArgs::default().step(10.0), &domain);
//! slider.on_layout(Dp(100.0));
//! slider.handle_gesture(GestureEvent::Start);
//! slider.handle_gesture(GestureEvent::Move { x: Dp(34.0) });
//! assert_eq!(slider.frame().fill_fraction, 0.3);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod slider;
