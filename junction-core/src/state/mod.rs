//! Phase state machine
//!
//! Defines the authoritative runtime behavior of the intersection.
//! The cycle is explicit, finite and never terminates.

pub mod controller;
pub mod phase;

pub use controller::{PhaseController, TickOutcome, Transition, Transitions};
pub use phase::Phase;
