//! Serial-in, parallel-out LED bank driver
//!
//! Drives two daisy-chained 74HC595s from four GPIO lines:
//!
//! - `data` (DS): serial data in
//! - `clock` (SHCP): shifts DS in on the rising edge
//! - `latch` (STCP): copies the shift stage to the outputs on the rising edge
//! - `output_enable` (/OE): active-low; high blanks every output
//!
//! Bits go out last storage index first, so after sixteen clocks storage
//! index `i` sits on parallel output `i`. The outputs only change on the
//! single latch pulse at the end, so a viewer never sees a half-shifted
//! pattern.

use junction_core::encoder::LedBitVector;
use junction_hal::gpio::{OutputPin, PinError};

/// Control line of the shift register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    Data,
    Clock,
    Latch,
    OutputEnable,
}

/// A control line could not be driven
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftRegisterError {
    pub line: Line,
    pub error: PinError,
}

fn on(line: Line) -> impl Fn(PinError) -> ShiftRegisterError {
    move |error| ShiftRegisterError { line, error }
}

/// Shift-register LED bank
pub struct ShiftRegister<D, C, L, E> {
    data: D,
    clock: C,
    latch: L,
    output_enable: E,
    enabled: bool,
}

impl<D, C, L, E> ShiftRegister<D, C, L, E>
where
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
    E: OutputPin,
{
    /// Take ownership of the four control lines
    ///
    /// Nothing is driven until [`ShiftRegister::init`].
    pub fn new(data: D, clock: C, latch: L, output_enable: E) -> Self {
        Self {
            data,
            clock,
            latch,
            output_enable,
            enabled: false,
        }
    }

    /// First write after power-up
    ///
    /// The outputs are blanked while the initial pattern is shifted and
    /// latched, then enabled, so whatever garbage the registers powered up
    /// with is never shown.
    pub fn init(&mut self, bits: &LedBitVector) -> Result<(), ShiftRegisterError> {
        self.output_enable.set_high().map_err(on(Line::OutputEnable))?;
        self.enabled = false;

        self.clock.set_low().map_err(on(Line::Clock))?;
        self.latch.set_low().map_err(on(Line::Latch))?;
        self.write(bits)?;

        self.output_enable.set_low().map_err(on(Line::OutputEnable))?;
        self.enabled = true;
        Ok(())
    }

    /// Shift out all sixteen bits and latch them
    pub fn write(&mut self, bits: &LedBitVector) -> Result<(), ShiftRegisterError> {
        for bit in bits.bits().iter().rev() {
            self.data.set_state(*bit).map_err(on(Line::Data))?;
            self.clock.pulse().map_err(on(Line::Clock))?;
        }
        self.latch.pulse().map_err(on(Line::Latch))
    }

    /// True once `init` has un-blanked the outputs
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
