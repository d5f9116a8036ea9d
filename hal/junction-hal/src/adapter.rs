//! Adapters from `embedded-hal` 1.0 digital pins
//!
//! Any chip HAL that implements the `embedded-hal` digital traits can be
//! used with the Junction drivers by wrapping its pins here. Pin-specific
//! error types are collapsed into [`PinError`].

use embedded_hal::digital;

use crate::gpio::{InputPin, OutputPin, PinError};

/// Output pin backed by an `embedded-hal` output
///
/// Tracks the last level successfully driven, so `is_set_high` needs no
/// hardware access.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin> EhOutput<P> {
    /// Wrap a pin whose current level is `initially_high`
    pub fn new(pin: P, initially_high: bool) -> Self {
        Self {
            pin,
            high: initially_high,
        }
    }

    /// Unwrap the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::OutputPin> OutputPin for EhOutput<P> {
    fn set_high(&mut self) -> Result<(), PinError> {
        self.pin.set_high().map_err(|_| PinError::WriteFailed)?;
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), PinError> {
        self.pin.set_low().map_err(|_| PinError::WriteFailed)?;
        self.high = false;
        Ok(())
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin backed by an `embedded-hal` input
pub struct EhInput<P> {
    pin: P,
}

impl<P: digital::InputPin> EhInput<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::InputPin> InputPin for EhInput<P> {
    fn is_high(&mut self) -> Result<bool, PinError> {
        self.pin.is_high().map_err(|_| PinError::ReadFailed)
    }
}
