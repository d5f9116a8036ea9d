//! Phase controller
//!
//! Owns the current phase, the car counter and the clearing cadence.
//! The control loop calls [`PhaseController::tick`] once per iteration
//! with the current time and that iteration's arrivals; everything else
//! is derived from the controller's state.
//!
//! Timing policy per road:
//! - A mandatory green of `green_min_ms`, regardless of demand.
//! - An extended green up to `green_min_ms + green_extension_ms` from the
//!   start of green, ended early as soon as the cross road's combined
//!   queue reaches `max_cars`.
//! - A yellow of exactly `yellow_ms`.
//!
//! While a road holds an extended green, each of its approaches loses one
//! waiting car per `clear_period_ms`. The clearing grid is anchored at the
//! start of that road's green.

use heapless::Vec;

use super::phase::Phase;
use crate::config::TimingConfig;
use crate::counter::CarCounter;
use crate::encoder::{encode, LedBitVector};
use crate::signal::{ApproachSet, IndicatorState, SignalState};
use crate::timer::PeriodicTimer;

/// Most phase changes a single tick can produce
///
/// A late tick can carry a road from mandatory green through extended
/// green into yellow. Yellow always lasts at least one tick.
pub const MAX_TRANSITIONS_PER_TICK: usize = 2;

/// Phase changes produced by one tick, in order
pub type Transitions = Vec<Transition, MAX_TRANSITIONS_PER_TICK>;

/// A phase change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    /// Time the new phase was entered
    pub at_ms: u64,
}

/// Everything that happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutcome {
    /// Approaches whose count went up
    pub arrivals: ApproachSet,
    /// Phase changes, in order
    pub transitions: Transitions,
    /// Approaches whose count went down
    pub cleared: ApproachSet,
}

/// The intersection's phase state machine with adaptive green timing
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseController {
    config: TimingConfig,
    phase: Phase,
    phase_entered_ms: u64,
    green_started_ms: u64,
    counter: CarCounter,
    clear_timer: PeriodicTimer,
}

impl PhaseController {
    /// Start a new cycle at `now_ms` in [`Phase::INITIAL`] with empty queues
    pub fn new(config: TimingConfig, now_ms: u64) -> Self {
        Self {
            config,
            phase: Phase::INITIAL,
            phase_entered_ms: now_ms,
            green_started_ms: now_ms,
            counter: CarCounter::new(),
            clear_timer: PeriodicTimer::new(config.clear_period_ms, now_ms),
        }
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn phase_entered_ms(&self) -> u64 {
        self.phase_entered_ms
    }

    /// Time spent in the current phase
    pub fn phase_elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.phase_entered_ms)
    }

    /// Time since the current (or most recent) green began
    pub fn green_elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.green_started_ms)
    }

    pub fn counter(&self) -> &CarCounter {
        &self.counter
    }

    pub fn signal(&self) -> SignalState {
        self.phase.signal()
    }

    pub fn indicators(&self) -> IndicatorState {
        self.counter.indicators()
    }

    /// Full LED bank pattern for the current state
    pub fn led_bits(&self) -> LedBitVector {
        encode(&self.signal(), &self.indicators())
    }

    /// Combined queue on the road waiting for right-of-way
    pub fn opposing_queue(&self) -> u32 {
        self.counter.axis_total(self.phase.axis().cross())
    }

    /// Advance the controller to `now_ms`
    ///
    /// Records `arrivals`, takes every phase change that is due, then
    /// applies the clearing opportunity for the road holding green.
    pub fn tick(&mut self, now_ms: u64, arrivals: ApproachSet) -> TickOutcome {
        for approach in arrivals.iter() {
            self.counter.record_arrival(approach);
        }

        let mut transitions = Transitions::new();
        while !transitions.is_full() {
            let Some(next) = self.due_phase(now_ms) else {
                break;
            };
            let transition = Transition {
                from: self.phase,
                to: next,
                at_ms: now_ms,
            };
            self.enter(next, now_ms);
            // Capacity checked by the loop condition
            let _ = transitions.push(transition);
        }

        let cleared = self.clear_opportunity(now_ms);

        TickOutcome {
            arrivals,
            transitions,
            cleared,
        }
    }

    /// The phase to move to at `now_ms`, if the current one has ended
    fn due_phase(&self, now_ms: u64) -> Option<Phase> {
        let ended = if self.phase.is_mandatory_green() {
            self.green_elapsed_ms(now_ms) >= u64::from(self.config.green_min_ms)
        } else if self.phase.is_extended_green() {
            self.green_elapsed_ms(now_ms) >= self.config.max_green_ms()
                || self.opposing_queue() >= u32::from(self.config.max_cars)
        } else {
            self.phase_elapsed_ms(now_ms) >= u64::from(self.config.yellow_ms)
        };

        ended.then(|| self.phase.next())
    }

    fn enter(&mut self, phase: Phase, now_ms: u64) {
        self.phase = phase;
        self.phase_entered_ms = now_ms;

        if phase.is_mandatory_green() {
            self.green_started_ms = now_ms;
            self.clear_timer.restart(now_ms);
        }
    }

    /// Let one car leave each approach of the green road, once per period
    ///
    /// The timer runs for the whole green so the grid stays anchored at
    /// the start of green; firings during the mandatory part are dropped.
    fn clear_opportunity(&mut self, now_ms: u64) -> ApproachSet {
        let mut cleared = ApproachSet::new();

        if !self.phase.is_green() || !self.clear_timer.poll(now_ms) {
            return cleared;
        }

        if self.phase.is_extended_green() {
            for approach in self.phase.axis().approaches() {
                if self.counter.clear_one(approach) {
                    cleared.insert(approach);
                }
            }
        }

        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::Approach;
    use proptest::prelude::*;

    const STEP_MS: u64 = 10;

    fn one(approach: Approach) -> ApproachSet {
        [approach].into_iter().collect()
    }

    /// Tick every STEP_MS from the controller's last tick up to `until_ms`
    fn run_until(ctl: &mut PhaseController, from_ms: u64, until_ms: u64) {
        let mut now = from_ms;
        while now <= until_ms {
            ctl.tick(now, ApproachSet::EMPTY);
            now += STEP_MS;
        }
    }

    #[test]
    fn test_initial_state() {
        let ctl = PhaseController::new(TimingConfig::default(), 0);
        assert_eq!(ctl.phase(), Phase::NsGreenMandatory);
        assert_eq!(ctl.signal(), Phase::NsGreenMandatory.signal());
        assert_eq!(ctl.indicators(), IndicatorState::default());
    }

    #[test]
    fn test_idle_cycle_timing() {
        let mut ctl = PhaseController::new(TimingConfig::default(), 0);

        run_until(&mut ctl, 0, 4_990);
        assert_eq!(ctl.phase(), Phase::NsGreenMandatory);

        run_until(&mut ctl, 5_000, 5_000);
        assert_eq!(ctl.phase(), Phase::NsGreenExtended);

        run_until(&mut ctl, 5_010, 9_990);
        assert_eq!(ctl.phase(), Phase::NsGreenExtended);

        run_until(&mut ctl, 10_000, 10_000);
        assert_eq!(ctl.phase(), Phase::NsYellow);

        run_until(&mut ctl, 10_010, 12_990);
        assert_eq!(ctl.phase(), Phase::NsYellow);

        run_until(&mut ctl, 13_000, 13_000);
        assert_eq!(ctl.phase(), Phase::EwGreenMandatory);

        // East/West mirrors North/South
        run_until(&mut ctl, 13_010, 23_000);
        assert_eq!(ctl.phase(), Phase::EwYellow);
        run_until(&mut ctl, 23_010, 26_000);
        assert_eq!(ctl.phase(), Phase::NsGreenMandatory);
    }

    #[test]
    fn test_demand_cutoff_during_extension() {
        let mut ctl = PhaseController::new(TimingConfig::default(), 0);
        run_until(&mut ctl, 0, 5_990);
        assert_eq!(ctl.phase(), Phase::NsGreenExtended);

        // Five cars arrive on East, one per tick
        let mut now = 6_000;
        for _ in 0..4 {
            ctl.tick(now, one(Approach::East));
            assert_eq!(ctl.phase(), Phase::NsGreenExtended);
            now += STEP_MS;
        }
        let outcome = ctl.tick(now, one(Approach::East));

        assert_eq!(ctl.counter().count(Approach::East), 5);
        assert_eq!(ctl.phase(), Phase::NsYellow);
        assert_eq!(
            outcome.transitions.as_slice(),
            &[Transition {
                from: Phase::NsGreenExtended,
                to: Phase::NsYellow,
                at_ms: now,
            }]
        );
        assert!(now < 10_000);
    }

    #[test]
    fn test_minimum_green_ignores_demand() {
        let mut ctl = PhaseController::new(TimingConfig::default(), 0);

        for i in 0..6 {
            ctl.tick(100 + i * STEP_MS, one(Approach::West));
        }
        assert_eq!(ctl.opposing_queue(), 6);

        run_until(&mut ctl, 200, 4_990);
        assert_eq!(ctl.phase(), Phase::NsGreenMandatory);

        // Extension is skipped entirely
        let outcome = ctl.tick(5_000, ApproachSet::EMPTY);
        assert_eq!(outcome.transitions.len(), 2);
        assert_eq!(outcome.transitions[0].to, Phase::NsGreenExtended);
        assert_eq!(outcome.transitions[1].to, Phase::NsYellow);
        assert_eq!(ctl.phase(), Phase::NsYellow);
    }

    #[test]
    fn test_late_tick_cascades() {
        let mut ctl = PhaseController::new(TimingConfig::default(), 0);

        let outcome = ctl.tick(12_000, ApproachSet::EMPTY);
        assert_eq!(outcome.transitions.len(), 2);
        assert_eq!(ctl.phase(), Phase::NsYellow);
        assert_eq!(ctl.phase_entered_ms(), 12_000);

        // Yellow is timed from when it was actually shown
        ctl.tick(14_990, ApproachSet::EMPTY);
        assert_eq!(ctl.phase(), Phase::NsYellow);
        ctl.tick(15_000, ApproachSet::EMPTY);
        assert_eq!(ctl.phase(), Phase::EwGreenMandatory);
    }

    #[test]
    fn test_clearing_only_during_extension() {
        let mut ctl = PhaseController::new(TimingConfig::default(), 0);
        ctl.tick(0, one(Approach::North));
        ctl.tick(10, one(Approach::North));
        ctl.tick(20, one(Approach::North));
        ctl.tick(30, one(Approach::South));
        ctl.tick(40, one(Approach::East));

        // 3000 falls in the mandatory green: nothing cleared
        run_until(&mut ctl, 50, 5_990);
        assert_eq!(ctl.counter().count(Approach::North), 3);
        assert_eq!(ctl.counter().count(Approach::South), 1);

        let outcome = ctl.tick(6_000, ApproachSet::EMPTY);
        assert!(outcome.cleared.contains(Approach::North));
        assert!(outcome.cleared.contains(Approach::South));
        assert_eq!(ctl.counter().count(Approach::North), 2);
        assert_eq!(ctl.counter().count(Approach::South), 0);

        run_until(&mut ctl, 6_010, 9_000);
        assert_eq!(ctl.counter().count(Approach::North), 1);

        // Red approaches never clear
        assert_eq!(ctl.counter().count(Approach::East), 1);

        // Nor does anything during yellow or the other road's green
        run_until(&mut ctl, 9_010, 18_990);
        assert_eq!(ctl.phase(), Phase::EwGreenExtended);
        assert_eq!(ctl.counter().count(Approach::North), 1);

        // East/West grid restarted at 13000: 16000 is mandatory, 19000 clears
        assert_eq!(ctl.counter().count(Approach::East), 1);
        let outcome = ctl.tick(19_000, ApproachSet::EMPTY);
        assert!(outcome.cleared.contains(Approach::East));
        assert!(!outcome.cleared.contains(Approach::North));
        assert_eq!(ctl.counter().count(Approach::East), 0);

        run_until(&mut ctl, 19_010, 22_990);
        assert_eq!(ctl.counter().count(Approach::North), 1);
    }

    #[test]
    fn test_indicator_bits_follow_queue() {
        let mut ctl = PhaseController::new(TimingConfig::default(), 0);
        ctl.tick(0, one(Approach::West));

        let bits = ctl.led_bits();
        assert!(bits.indicator(Approach::West));
        assert!(!bits.indicator(Approach::North));
        assert_eq!(bits.color(Approach::North), Some(crate::LightColor::Green));
    }

    fn arrivals_from_mask(mask: u8) -> ApproachSet {
        Approach::ALL
            .into_iter()
            .filter(|a| mask & (1 << a.index()) != 0)
            .collect()
    }

    proptest! {
        #[test]
        fn cycle_invariants_hold(
            ticks in proptest::collection::vec((1u64..=50, 0u8..16), 200..1500)
        ) {
            let config = TimingConfig::default();
            let mut ctl = PhaseController::new(config, 0);

            let mut now = 0u64;
            let mut green_start = Some(0u64);
            let mut yellow_start: Option<u64> = None;

            for (step, mask) in ticks {
                now += step;
                let before = ctl.counter().clone();
                let outcome = ctl.tick(now, arrivals_from_mask(mask));

                // Only the extended-green road loses cars, one per approach
                for a in Approach::ALL {
                    let arrived = u16::from(outcome.arrivals.contains(a));
                    let cleared = u16::from(outcome.cleared.contains(a));
                    prop_assert_eq!(ctl.counter().count(a), before.count(a) + arrived - cleared);
                    if cleared == 1 {
                        prop_assert!(ctl.phase().is_extended_green());
                        prop_assert_eq!(ctl.phase().axis(), a.axis());
                    }
                }

                for t in &outcome.transitions {
                    prop_assert_eq!(t.at_ms, now);
                    if t.to.is_yellow() {
                        let start = green_start.take().expect("yellow without green");
                        let held = t.at_ms - start;
                        prop_assert!(held >= u64::from(config.green_min_ms));
                        prop_assert!(held < config.max_green_ms() + step);
                        yellow_start = Some(t.at_ms);
                    } else if t.to.is_mandatory_green() {
                        let start = yellow_start.take().expect("green without yellow");
                        let held = t.at_ms - start;
                        prop_assert!(held >= u64::from(config.yellow_ms));
                        prop_assert!(held < u64::from(config.yellow_ms) + step);
                        green_start = Some(t.at_ms);
                    }
                }

                prop_assert!(!ctl.signal().is_conflicting());

                if ctl.phase().is_extended_green() {
                    prop_assert!(ctl.opposing_queue() < u32::from(config.max_cars));
                }

                let bits = ctl.led_bits();
                for a in Approach::ALL {
                    prop_assert_eq!(bits.indicator(a), ctl.counter().count(a) > 0);
                    prop_assert_eq!(bits.color(a), Some(ctl.signal().color(a)));
                }
            }
        }
    }
}
