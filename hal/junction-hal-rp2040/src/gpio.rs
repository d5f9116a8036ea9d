//! GPIO setup
//!
//! Wraps embassy-rp pins in the `junction-hal` adapters. Both pin types
//! are infallible on the RP2040, so the adapters never report an error.

use embassy_rp::gpio::{Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use junction_hal::{EhInput, EhOutput};

pub type RpOutput<'d> = EhOutput<Output<'d>>;
pub type RpInput<'d> = EhInput<Input<'d>>;

/// Configure `pin` as a push-pull output starting at `level`
pub fn output<'d>(pin: Peri<'d, impl Pin>, level: Level) -> RpOutput<'d> {
    EhOutput::new(Output::new(pin, level), level == Level::High)
}

/// Configure `pin` as an active-high button input
///
/// The internal pull-down holds the line low while the button is released.
pub fn button<'d>(pin: Peri<'d, impl Pin>) -> RpInput<'d> {
    EhInput::new(Input::new(pin, Pull::Down))
}
