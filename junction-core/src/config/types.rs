//! Timing configuration
//!
//! All durations are milliseconds of monotonic time.

/// Default guaranteed green per cycle
pub const DEFAULT_GREEN_MIN_MS: u32 = 5_000;

/// Default additional green available after the minimum
pub const DEFAULT_GREEN_EXTENSION_MS: u32 = 5_000;

/// Default yellow duration
pub const DEFAULT_YELLOW_MS: u32 = 3_000;

/// Default opposing-queue size that ends an extended green
pub const DEFAULT_MAX_CARS: u16 = 5;

/// Default spacing between modelled departures on a green approach
pub const DEFAULT_CLEAR_PERIOD_MS: u32 = 3_000;

/// Default per-button lockout after an accepted press
pub const DEFAULT_DEBOUNCE_MS: u32 = 200;

/// Default control loop period
pub const DEFAULT_POLL_INTERVAL_MS: u32 = 10;

/// Upper bound on the control loop period
///
/// Phase changes must land within this bound of their nominal time.
pub const MAX_POLL_INTERVAL_MS: u32 = 100;

/// Invalid timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Minimum green must be non-zero
    ZeroMinimumGreen,
    /// Yellow must be non-zero
    ZeroYellow,
    /// Clearing period must be non-zero
    ZeroClearPeriod,
    /// Debounce window must be non-zero
    ZeroDebounce,
    /// Demand cutoff must be at least one car
    ZeroMaxCars,
    /// Poll interval must be in 1..MAX_POLL_INTERVAL_MS
    PollIntervalOutOfRange,
}

/// Signal timing and input configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimingConfig {
    /// Guaranteed green before any cutoff may apply
    pub green_min_ms: u32,
    /// Extra green after the minimum, cut short by opposing demand
    pub green_extension_ms: u32,
    /// Yellow duration
    pub yellow_ms: u32,
    /// Combined opposing queue that ends an extended green
    pub max_cars: u16,
    /// One departure per green approach per period during extended green
    pub clear_period_ms: u32,
    /// Per-button lockout after an accepted press
    pub debounce_ms: u32,
    /// Control loop period
    pub poll_interval_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            green_min_ms: DEFAULT_GREEN_MIN_MS,
            green_extension_ms: DEFAULT_GREEN_EXTENSION_MS,
            yellow_ms: DEFAULT_YELLOW_MS,
            max_cars: DEFAULT_MAX_CARS,
            clear_period_ms: DEFAULT_CLEAR_PERIOD_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl TimingConfig {
    /// Longest green either road can hold in one cycle
    pub fn max_green_ms(&self) -> u64 {
        u64::from(self.green_min_ms) + u64::from(self.green_extension_ms)
    }

    /// Check the configuration for values the controller cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.green_min_ms == 0 {
            return Err(ConfigError::ZeroMinimumGreen);
        }
        if self.yellow_ms == 0 {
            return Err(ConfigError::ZeroYellow);
        }
        if self.clear_period_ms == 0 {
            return Err(ConfigError::ZeroClearPeriod);
        }
        if self.debounce_ms == 0 {
            return Err(ConfigError::ZeroDebounce);
        }
        if self.max_cars == 0 {
            return Err(ConfigError::ZeroMaxCars);
        }
        if self.poll_interval_ms == 0 || self.poll_interval_ms >= MAX_POLL_INTERVAL_MS {
            return Err(ConfigError::PollIntervalOutOfRange);
        }
        Ok(())
    }
}
