//! Bench rig for cabinet tests: a manual clock, a simulated pair of
//! 74HC595s and four push-buttons, all shared through `Rc` so the test
//! can watch the hardware while the cabinet owns the pins.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use junction_core::encoder::{LedBitVector, LED_COUNT};
use junction_core::signal::Approach;
use junction_core::TimingConfig;
use junction_drivers::{Cabinet, InputSampler, Line, ShiftRegister, StepReport};
use junction_hal::gpio::{InputPin, OutputPin, PinError};
use junction_hal::time::Clock;

#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn set(&self, ms: u64) {
        self.0.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}

#[derive(Default)]
pub struct Hardware {
    data: bool,
    shift: u16,
    /// Parallel outputs as last latched
    pub latched: u16,
    pub output_enabled: bool,
    pub latches: u32,
    pub buttons: [bool; 4],
    pub failing: Option<Line>,
}

impl Hardware {
    /// What a driver would see on the lamps right now
    pub fn shown(&self) -> Option<LedBitVector> {
        if !self.output_enabled {
            return None;
        }
        let mut bits = [false; LED_COUNT];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = self.latched & (1 << i) != 0;
        }
        Some(LedBitVector::from_bits(bits))
    }
}

pub type Rig = Rc<RefCell<Hardware>>;

pub struct SimOutput {
    hw: Rig,
    line: Line,
    high: bool,
}

impl OutputPin for SimOutput {
    fn set_high(&mut self) -> Result<(), PinError> {
        let mut hw = self.hw.borrow_mut();
        if hw.failing == Some(self.line) {
            return Err(PinError::WriteFailed);
        }
        let rising = !self.high;
        match self.line {
            Line::Data => hw.data = true,
            Line::Clock if rising => hw.shift = (hw.shift << 1) | hw.data as u16,
            Line::Latch if rising => {
                hw.latched = hw.shift;
                hw.latches += 1;
            }
            Line::OutputEnable => hw.output_enabled = false,
            _ => {}
        }
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), PinError> {
        let mut hw = self.hw.borrow_mut();
        if hw.failing == Some(self.line) {
            return Err(PinError::WriteFailed);
        }
        match self.line {
            Line::Data => hw.data = false,
            Line::OutputEnable => hw.output_enabled = true,
            _ => {}
        }
        self.high = false;
        Ok(())
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

pub struct SimButton {
    hw: Rig,
    approach: Approach,
}

impl InputPin for SimButton {
    fn is_high(&mut self) -> Result<bool, PinError> {
        Ok(self.hw.borrow().buttons[self.approach.index()])
    }
}

pub type BenchCabinet = Cabinet<ManualClock, SimButton, SimOutput, SimOutput, SimOutput, SimOutput>;

pub struct Bench {
    pub clock: ManualClock,
    pub hw: Rig,
    pub cabinet: BenchCabinet,
    pub poll_ms: u64,
}

impl Bench {
    pub fn new(config: TimingConfig) -> Self {
        let clock = ManualClock::default();
        let hw: Rig = Rc::default();

        let output = |line| SimOutput {
            hw: hw.clone(),
            line,
            high: false,
        };
        let leds = ShiftRegister::new(
            output(Line::Data),
            output(Line::Clock),
            output(Line::Latch),
            output(Line::OutputEnable),
        );
        let buttons = Approach::ALL.map(|approach| SimButton {
            hw: hw.clone(),
            approach,
        });
        let sampler = InputSampler::new(buttons, config.debounce_ms);

        let cabinet = match Cabinet::new(clock.clone(), sampler, leds, config) {
            Ok(cabinet) => cabinet,
            Err(e) => panic!("bench cabinet failed to start: {:?}", e),
        };

        Self {
            clock,
            hw,
            cabinet,
            poll_ms: u64::from(config.poll_interval_ms),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn set_button(&self, approach: Approach, pressed: bool) {
        self.hw.borrow_mut().buttons[approach.index()] = pressed;
    }

    /// Step once at the next poll instant
    pub fn step(&mut self) -> StepReport {
        self.clock.set(self.now_ms() + self.poll_ms);
        self.cabinet.step().expect("bench hardware never fails unless told to")
    }

    /// Step at the poll interval until `until_ms`, returning every report
    pub fn run_until(&mut self, until_ms: u64) -> Vec<StepReport> {
        let mut reports = Vec::new();
        while self.now_ms() + self.poll_ms <= until_ms {
            reports.push(self.step());
        }
        reports
    }

    /// Press and release a button, one poll interval each
    pub fn tap(&mut self, approach: Approach) -> Vec<StepReport> {
        self.set_button(approach, true);
        let pressed = self.step();
        self.set_button(approach, false);
        let released = self.step();
        vec![pressed, released]
    }

    pub fn shown(&self) -> LedBitVector {
        self.hw
            .borrow()
            .shown()
            .expect("outputs enabled after cabinet start")
    }
}
