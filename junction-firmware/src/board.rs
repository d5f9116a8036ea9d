//! Raspberry Pi Pico wiring
//!
//! Pin assignments are board-specific:
//!
//! | Signal                 | GPIO |
//! |------------------------|------|
//! | 74HC595 DS (data)      | 20   |
//! | 74HC595 SHCP (clock)   | 18   |
//! | 74HC595 STCP (latch)   | 19   |
//! | 74HC595 /OE            | 21   |
//! | North button           | 10   |
//! | East button            | 11   |
//! | South button           | 12   |
//! | West button            | 13   |
//!
//! Buttons pull their line high when pressed and rely on the internal
//! pull-down otherwise.

use embassy_rp::gpio::Level;
use embassy_rp::Peripherals;
use junction_drivers::ShiftRegister;
use junction_hal_rp2040::{button, output, RpInput, RpOutput};

pub type SignalLeds = ShiftRegister<
    RpOutput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
>;

/// Arrival buttons in north, east, south, west order
pub type ArrivalButtons = [RpInput<'static>; 4];

pub struct Board {
    pub leds: SignalLeds,
    pub buttons: ArrivalButtons,
}

impl Board {
    pub fn new(p: Peripherals) -> Self {
        // /OE starts high so nothing shows until the first pattern is latched
        let leds = ShiftRegister::new(
            output(p.PIN_20, Level::Low),
            output(p.PIN_18, Level::Low),
            output(p.PIN_19, Level::Low),
            output(p.PIN_21, Level::High),
        );

        let buttons = [
            button(p.PIN_10),
            button(p.PIN_11),
            button(p.PIN_12),
            button(p.PIN_13),
        ];

        Self { leds, buttons }
    }
}
