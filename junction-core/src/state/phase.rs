//! Phase definition
//!
//! All light output is a function of the current phase. Each road gets a
//! mandatory green, an extendable green and a yellow, then the other road
//! takes over.

use crate::signal::{Axis, LightColor, SignalState};

/// Signal phases, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// North/South green, minimum not yet served
    NsGreenMandatory,
    /// North/South green past the minimum; ends on time or opposing demand
    NsGreenExtended,
    /// North/South yellow
    NsYellow,
    /// East/West green, minimum not yet served
    EwGreenMandatory,
    /// East/West green past the minimum; ends on time or opposing demand
    EwGreenExtended,
    /// East/West yellow
    EwYellow,
}

impl Phase {
    /// Phase the controller powers up in
    pub const INITIAL: Phase = Phase::NsGreenMandatory;

    /// Every phase, in cycle order
    pub const ALL: [Phase; 6] = [
        Phase::NsGreenMandatory,
        Phase::NsGreenExtended,
        Phase::NsYellow,
        Phase::EwGreenMandatory,
        Phase::EwGreenExtended,
        Phase::EwYellow,
    ];

    /// The road that has right-of-way in this phase
    pub const fn axis(self) -> Axis {
        match self {
            Phase::NsGreenMandatory | Phase::NsGreenExtended | Phase::NsYellow => {
                Axis::NorthSouth
            }
            Phase::EwGreenMandatory | Phase::EwGreenExtended | Phase::EwYellow => Axis::EastWest,
        }
    }

    /// Successor in the cycle
    pub const fn next(self) -> Phase {
        match self {
            Phase::NsGreenMandatory => Phase::NsGreenExtended,
            Phase::NsGreenExtended => Phase::NsYellow,
            Phase::NsYellow => Phase::EwGreenMandatory,
            Phase::EwGreenMandatory => Phase::EwGreenExtended,
            Phase::EwGreenExtended => Phase::EwYellow,
            Phase::EwYellow => Phase::NsGreenMandatory,
        }
    }

    pub const fn is_mandatory_green(self) -> bool {
        matches!(self, Phase::NsGreenMandatory | Phase::EwGreenMandatory)
    }

    pub const fn is_extended_green(self) -> bool {
        matches!(self, Phase::NsGreenExtended | Phase::EwGreenExtended)
    }

    pub const fn is_green(self) -> bool {
        self.is_mandatory_green() || self.is_extended_green()
    }

    pub const fn is_yellow(self) -> bool {
        matches!(self, Phase::NsYellow | Phase::EwYellow)
    }

    /// Color shown to the road with right-of-way
    pub const fn color(self) -> LightColor {
        if self.is_yellow() {
            LightColor::Yellow
        } else {
            LightColor::Green
        }
    }

    /// Light pattern for this phase
    pub const fn signal(self) -> SignalState {
        SignalState::serving(self.axis(), self.color())
    }
}
