//! Intersection data model
//!
//! Two perpendicular two-lane roads meet at a single intersection. Each of
//! the four approaches shows a three-color head plus a "cars waiting"
//! indicator.

pub mod approach;
pub mod lights;

pub use approach::{Approach, ApproachSet, Axis};
pub use lights::{IndicatorState, LightColor, SignalState};
