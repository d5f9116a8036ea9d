//! Board-agnostic core logic for the traffic signal firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Intersection data model (approaches, light colors, signal state)
//! - LED pattern encoding for the shift-register bank
//! - Per-approach car counting
//! - Button debounce policy
//! - Phase state machine and adaptive green timing
//! - Timing configuration and its TOML-subset parser
//!
//! Every decision takes the current time as an argument, so the whole
//! crate runs deterministically on the host under test.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod counter;
pub mod debounce;
pub mod encoder;
pub mod signal;
pub mod state;
pub mod timer;

pub use config::TimingConfig;
pub use counter::CarCounter;
pub use encoder::{encode, LedBitVector};
pub use signal::{Approach, ApproachSet, Axis, IndicatorState, LightColor, SignalState};
pub use state::{Phase, PhaseController, Transition};
