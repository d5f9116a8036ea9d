//! RP2040-specific HAL for the traffic signal firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `junction-hal` traits:
//!
//! - GPIO outputs for the shift-register control lines
//! - Pulled-down GPIO inputs for the arrival buttons
//! - A [`Clock`](junction_hal::Clock) backed by the embassy time driver

#![no_std]

pub mod gpio;
pub mod time;

pub use gpio::{button, output, RpInput, RpOutput};
pub use time::EmbassyClock;

// Re-export shared traits from junction-hal for convenience
pub use junction_hal::{Clock, InputPin, OutputPin, PinError};
