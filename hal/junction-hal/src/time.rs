//! Time source abstraction
//!
//! All timing decisions in the controller are elapsed-time comparisons
//! against a monotonic millisecond counter. Hiding the counter behind a
//! trait lets tests advance time without sleeping.

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since an arbitrary fixed epoch (typically boot)
    ///
    /// Must never go backwards.
    fn now_ms(&self) -> u64;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}
