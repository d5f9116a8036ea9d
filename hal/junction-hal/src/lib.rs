//! Junction Hardware Abstraction Layer
//!
//! This crate defines the narrow hardware surface the signal controller
//! needs. Chip-specific HALs implement these traits so the drivers and the
//! control loop can be exercised on the host with mock pins and a manual
//! clock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (junction-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  junction-drivers (shift register, etc) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  junction-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ junction-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`time::Clock`] - Monotonic millisecond time source
//!
//! [`adapter`] wraps `embedded-hal` 1.0 pins so any compliant chip HAL can
//! drive the LED bank and read the buttons.

#![no_std]
#![deny(unsafe_code)]

pub mod adapter;
pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adapter::{EhInput, EhOutput};
pub use gpio::{InputPin, OutputPin, PinError};
pub use time::Clock;
