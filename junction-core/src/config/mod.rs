//! Configuration types
//!
//! Board-agnostic timing configuration, plus a parser for the small TOML
//! subset used by the embedded `intersection.toml`.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError};
pub use types::*;
