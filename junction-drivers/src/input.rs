//! Vehicle-arrival buttons
//!
//! One push-button per approach, read active-high and fed through the
//! [`Debouncer`] so each press counts as exactly one arrival.

use junction_core::debounce::Debouncer;
use junction_core::signal::{Approach, ApproachSet};
use junction_hal::gpio::{InputPin, PinError};

/// A button line could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputError {
    pub approach: Approach,
    pub error: PinError,
}

/// Samples the four arrival buttons and debounces them
pub struct InputSampler<P> {
    /// Indexed by [`Approach::index`]
    buttons: [P; 4],
    debouncer: Debouncer,
}

impl<P: InputPin> InputSampler<P> {
    /// Buttons in `Approach::ALL` order (north, east, south, west)
    pub fn new(buttons: [P; 4], debounce_ms: u32) -> Self {
        Self {
            buttons,
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    /// Read every button and return the approaches with a new arrival
    ///
    /// All four lines are read before any are debounced, so a failed read
    /// leaves the debounce state untouched.
    pub fn poll(&mut self, now_ms: u64) -> Result<ApproachSet, InputError> {
        let mut levels = [false; 4];
        for approach in Approach::ALL {
            levels[approach.index()] = self.buttons[approach.index()]
                .is_high()
                .map_err(|error| InputError { approach, error })?;
        }

        Ok(self.debouncer.sample(now_ms, levels))
    }
}
