//! Configuration loading
//!
//! Timing comes from `intersection.toml`, embedded at compile time and
//! parsed by the no_std parser in junction-core.

pub mod loader;

pub use loader::load_config;
