//! range-ui is the foundation crate for gesture-driven range controls.
//!
//! # Units
//!
//! Layout measurements and gesture positions are expressed in
//! density-independent pixels ([`Dp`]). Physical measurements ([`Px`]) are
//! converted with an explicit scale factor supplied by the layout system.
//!
//! ```
//! use range_ui::{Dp, Px};
//!
//! let track = Dp::from_px(Px(600), 2.0);
//! assert_eq!(track, Dp(300.0));
//! ```
//!
//! # Callbacks
//!
//! Value sinks are passed around as [`CallbackWith`] handles, which compare by
//! identity so argument structs holding them can still derive `PartialEq`.
//!
//! ```
//! use range_ui::CallbackWith;
//!
//! let on_change = CallbackWith::new(|value: f32| println!("new value {value}"));
//! on_change.call(42.0);
//! ```
//!
//! # Logging
//!
//! Every crate in the workspace logs through `tracing`. Applications call
//! [`init_tracing`] once at startup to install a formatter honouring `RUST_LOG`.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod dp;
mod entry_point;
pub mod prop;
pub mod px;

pub use crate::{
    dp::Dp,
    entry_point::{DEFAULT_LOG_FILTER, init_tracing},
    prop::{CallbackWith, Slot},
    px::Px,
};
pub use tracing;
