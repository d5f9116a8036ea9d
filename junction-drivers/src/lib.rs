//! Hardware driver implementations
//!
//! This crate drives the physical side of the intersection through the
//! `junction-hal` traits:
//!
//! - 74HC595-style shift-register LED bank
//! - Debounced vehicle-arrival buttons
//! - The signal cabinet, which runs one full control-loop iteration
//!   (sample, decide, render) per call

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod cabinet;
pub mod input;
pub mod shift_register;

pub use cabinet::{Cabinet, CabinetError, StepReport};
pub use input::{InputError, InputSampler};
pub use shift_register::{Line, ShiftRegister, ShiftRegisterError};
