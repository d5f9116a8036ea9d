//! Waiting-car counter
//!
//! One count per approach. Arrivals come from the buttons; departures are
//! modelled by the controller's clearing cadence while the approach has a
//! green. Counts saturate in both directions.

use crate::signal::{Approach, Axis, IndicatorState};

/// Waiting cars per approach
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CarCounter {
    counts: [u16; 4],
}

impl CarCounter {
    pub const fn new() -> Self {
        Self { counts: [0; 4] }
    }

    /// A vehicle arrived at `approach`
    ///
    /// No cap is applied here; the controller's demand cutoff is what keeps
    /// queues short in practice.
    pub fn record_arrival(&mut self, approach: Approach) {
        let count = &mut self.counts[approach.index()];
        *count = count.saturating_add(1);
    }

    /// A vehicle left `approach`. Returns false if the queue was already empty.
    pub fn clear_one(&mut self, approach: Approach) -> bool {
        let count = &mut self.counts[approach.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    pub fn count(&self, approach: Approach) -> u16 {
        self.counts[approach.index()]
    }

    /// Combined queue on both approaches of a road
    pub fn axis_total(&self, axis: Axis) -> u32 {
        axis.approaches()
            .iter()
            .map(|a| u32::from(self.count(*a)))
            .sum()
    }

    /// Waiting indicator for each approach (count > 0)
    pub fn indicators(&self) -> IndicatorState {
        IndicatorState::new(self.counts.map(|c| c > 0))
    }
}
