//! LED bank encoding
//!
//! The LED bank is two daisy-chained 8-bit shift registers driving sixteen
//! LEDs, four per approach in the order North, East, South, West:
//!
//! ```text
//! index:  0  1  2  3 | 4  5  6  7 | 8  9 10 11 | 12 13 14 15
//!         R  Y  G  W | R  Y  G  W | R  Y  G  W |  R  Y  G  W
//!           North    |    East    |   South    |    West
//! ```
//!
//! `W` is the white "cars waiting" indicator. The vector is always rebuilt
//! from the full signal and indicator state.

use crate::signal::{Approach, IndicatorState, LightColor, SignalState};

/// Number of LEDs in the bank
pub const LED_COUNT: usize = 16;

/// LEDs per approach: three lamps plus the waiting indicator
pub const LEDS_PER_APPROACH: usize = 4;

const INDICATOR_OFFSET: usize = 3;

/// LED states in storage order (index 0 = North red)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedBitVector([bool; LED_COUNT]);

impl LedBitVector {
    /// All LEDs off
    pub const DARK: LedBitVector = LedBitVector([false; LED_COUNT]);

    pub const fn from_bits(bits: [bool; LED_COUNT]) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> &[bool; LED_COUNT] {
        &self.0
    }

    /// The (red, yellow, green) lamps of one approach
    pub fn lamps(&self, approach: Approach) -> [bool; 3] {
        let base = approach.index() * LEDS_PER_APPROACH;
        [self.0[base], self.0[base + 1], self.0[base + 2]]
    }

    /// Color shown to one approach, if the lamps form a valid pattern
    pub fn color(&self, approach: Approach) -> Option<LightColor> {
        LightColor::from_lamps(self.lamps(approach))
    }

    pub fn indicator(&self, approach: Approach) -> bool {
        self.0[approach.index() * LEDS_PER_APPROACH + INDICATOR_OFFSET]
    }

    /// Pack as a word with storage index `i` in bit `i`
    pub fn to_u16(&self) -> u16 {
        self.0
            .iter()
            .enumerate()
            .fold(0u16, |acc, (i, on)| acc | ((*on as u16) << i))
    }
}

/// Encode the signal and indicator state into the LED bank layout
pub fn encode(signal: &SignalState, indicators: &IndicatorState) -> LedBitVector {
    let mut bits = [false; LED_COUNT];
    for approach in Approach::ALL {
        let base = approach.index() * LEDS_PER_APPROACH;
        bits[base..base + 3].copy_from_slice(&signal.color(approach).lamps());
        bits[base + INDICATOR_OFFSET] = indicators.get(approach);
    }
    LedBitVector(bits)
}
