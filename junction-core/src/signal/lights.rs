//! Light colors, signal state and waiting-car indicators

use super::approach::{Approach, Axis};

/// Color shown by one signal head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightColor {
    Red,
    Yellow,
    Green,
}

impl LightColor {
    pub const ALL: [LightColor; 3] = [LightColor::Red, LightColor::Yellow, LightColor::Green];

    /// Lamp pattern as (red, yellow, green)
    pub const fn lamps(self) -> [bool; 3] {
        match self {
            LightColor::Red => [true, false, false],
            LightColor::Yellow => [false, true, false],
            LightColor::Green => [false, false, true],
        }
    }

    /// Inverse of [`LightColor::lamps`]; `None` for anything but a single lit lamp
    pub fn from_lamps(lamps: [bool; 3]) -> Option<Self> {
        LightColor::ALL.into_iter().find(|c| c.lamps() == lamps)
    }
}

/// Colors shown on all four approaches
///
/// Stored per axis, so North/South and East/West always agree. A value can
/// only be built with at least one axis red, so two conflicting greens (or
/// a green facing a yellow) are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalState {
    north_south: LightColor,
    east_west: LightColor,
}

impl SignalState {
    /// Build a signal state, rejecting any combination where both roads
    /// may move
    pub fn new(north_south: LightColor, east_west: LightColor) -> Option<Self> {
        if north_south != LightColor::Red && east_west != LightColor::Red {
            return None;
        }
        Some(Self {
            north_south,
            east_west,
        })
    }

    /// Right-of-way on `axis` with the given color; the cross road is red
    pub const fn serving(axis: Axis, color: LightColor) -> Self {
        match axis {
            Axis::NorthSouth => Self {
                north_south: color,
                east_west: LightColor::Red,
            },
            Axis::EastWest => Self {
                north_south: LightColor::Red,
                east_west: color,
            },
        }
    }

    pub const fn axis_color(&self, axis: Axis) -> LightColor {
        match axis {
            Axis::NorthSouth => self.north_south,
            Axis::EastWest => self.east_west,
        }
    }

    /// Color shown to a single approach
    pub const fn color(&self, approach: Approach) -> LightColor {
        self.axis_color(approach.axis())
    }

    /// True if both roads show green at once
    ///
    /// Never true for a constructed value; kept as a runtime check for
    /// callers that assert the invariant.
    pub fn is_conflicting(&self) -> bool {
        self.north_south == LightColor::Green && self.east_west == LightColor::Green
    }
}

/// Per-approach "cars waiting" flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorState([bool; 4]);

impl IndicatorState {
    pub const fn new(flags: [bool; 4]) -> Self {
        Self(flags)
    }

    pub const fn get(&self, approach: Approach) -> bool {
        self.0[approach.index()]
    }

    pub fn set(&mut self, approach: Approach, waiting: bool) {
        self.0[approach.index()] = waiting;
    }
}
