//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.
//!
//! Output operations are fallible. The LED bank is the only thing standing
//! between the controller and two conflicting greens, so a driver must be
//! able to notice a write that did not happen.

/// Errors reported by a GPIO operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// The pin could not be driven to the requested level
    WriteFailed,
    /// The pin level could not be read
    ReadFailed,
}

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self) -> Result<(), PinError>;

    /// Set the pin low (logic 0)
    fn set_low(&mut self) -> Result<(), PinError>;

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) -> Result<(), PinError> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }

    /// Drive the pin high then low
    fn pulse(&mut self) -> Result<(), PinError> {
        self.set_high()?;
        self.set_low()
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    ///
    /// Takes `&mut self` to match `embedded_hal::digital::InputPin`.
    fn is_high(&mut self) -> Result<bool, PinError>;

    /// Check if the pin reads low (logic 0)
    fn is_low(&mut self) -> Result<bool, PinError> {
        self.is_high().map(|high| !high)
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_high(&mut self) -> Result<(), PinError> {
        (**self).set_high()
    }

    fn set_low(&mut self) -> Result<(), PinError> {
        (**self).set_low()
    }

    fn is_set_high(&self) -> bool {
        (**self).is_set_high()
    }
}
