//! Button debounce policy
//!
//! Each approach is debounced independently, so a press on one button
//! never hides a press on another. A press counts on the idle-to-active
//! edge, and only if the lockout window since that button's last accepted
//! press has expired. Contact bounce inside the window is ignored and a
//! held button counts once.

use crate::signal::{Approach, ApproachSet};

#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct LineState {
    active: bool,
    last_accepted_ms: Option<u64>,
}

/// Per-approach edge detector with a lockout window
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    window_ms: u32,
    lines: [LineState; 4],
}

impl Debouncer {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            lines: [LineState::default(); 4],
        }
    }

    /// Feed one sample of all four lines (true = pressed)
    ///
    /// Returns the approaches that registered a new arrival.
    pub fn sample(&mut self, now_ms: u64, levels: [bool; 4]) -> ApproachSet {
        let mut arrivals = ApproachSet::new();

        for approach in Approach::ALL {
            let line = &mut self.lines[approach.index()];
            let level = levels[approach.index()];
            let rising = level && !line.active;
            line.active = level;

            if !rising {
                continue;
            }

            let locked = line
                .last_accepted_ms
                .is_some_and(|t| now_ms.saturating_sub(t) < u64::from(self.window_ms));
            if !locked {
                line.last_accepted_ms = Some(now_ms);
                arrivals.insert(approach);
            }
        }

        arrivals
    }
}
