//! Embassy async tasks

pub mod controller;

pub use controller::{controller_task, SignalCabinet};
