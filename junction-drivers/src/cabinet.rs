//! Signal cabinet
//!
//! Owns the clock, the button panel, the LED bank and the phase
//! controller, and runs one control-loop iteration per [`Cabinet::step`]:
//!
//! ```text
//!   now = clock ─► buttons ─► debounce ─► controller.tick ─► encode ─► LED bank
//! ```
//!
//! The LED bank is rewritten in full every step, so the outputs always
//! show the controller's current signal and indicator state.

use junction_core::encoder::LedBitVector;
use junction_core::state::{PhaseController, TickOutcome};
use junction_core::TimingConfig;
use junction_hal::gpio::{InputPin, OutputPin};
use junction_hal::time::Clock;

use crate::input::{InputError, InputSampler};
use crate::shift_register::{ShiftRegister, ShiftRegisterError};

/// Hardware failure during a control-loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CabinetError {
    Input(InputError),
    Output(ShiftRegisterError),
}

impl From<InputError> for CabinetError {
    fn from(e: InputError) -> Self {
        CabinetError::Input(e)
    }
}

impl From<ShiftRegisterError> for CabinetError {
    fn from(e: ShiftRegisterError) -> Self {
        CabinetError::Output(e)
    }
}

/// What one step did
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    pub now_ms: u64,
    pub outcome: TickOutcome,
    /// Pattern latched onto the LED bank
    pub bits: LedBitVector,
}

pub struct Cabinet<K, P, D, C, L, E> {
    clock: K,
    buttons: InputSampler<P>,
    leds: ShiftRegister<D, C, L, E>,
    controller: PhaseController,
}

impl<K, P, D, C, L, E> Cabinet<K, P, D, C, L, E>
where
    K: Clock,
    P: InputPin,
    D: OutputPin,
    C: OutputPin,
    L: OutputPin,
    E: OutputPin,
{
    /// Start the controller and show its initial pattern
    ///
    /// `config` is expected to have passed [`TimingConfig::validate`].
    pub fn new(
        clock: K,
        buttons: InputSampler<P>,
        mut leds: ShiftRegister<D, C, L, E>,
        config: TimingConfig,
    ) -> Result<Self, CabinetError> {
        let controller = PhaseController::new(config, clock.now_ms());
        leds.init(&controller.led_bits())?;

        Ok(Self {
            clock,
            buttons,
            leds,
            controller,
        })
    }

    /// Run one iteration of the control loop
    pub fn step(&mut self) -> Result<StepReport, CabinetError> {
        let now_ms = self.clock.now_ms();
        let arrivals = self.buttons.poll(now_ms)?;
        let outcome = self.controller.tick(now_ms, arrivals);

        let bits = self.controller.led_bits();
        self.leds.write(&bits)?;

        Ok(StepReport {
            now_ms,
            outcome,
            bits,
        })
    }

    pub fn controller(&self) -> &PhaseController {
        &self.controller
    }

    pub fn leds(&self) -> &ShiftRegister<D, C, L, E> {
        &self.leds
    }
}
