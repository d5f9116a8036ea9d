//! Simple TOML parser for the timing configuration
//!
//! This is a minimal parser that handles only the subset needed for
//! `intersection.toml`. It does NOT support the full TOML spec and needs
//! no allocator.
//!
//! Supported features:
//! - `[timing]` section header
//! - `key = integer` pairs, with optional `_` digit separators
//! - Comments (`# ...`), including trailing comments
//!
//! Keys that are not present keep their default values. The result is
//! validated before it is returned.

use super::types::{ConfigError, TimingConfig};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header (1-based line number)
    InvalidSection(usize),
    /// Line is not a `key = value` pair
    InvalidLine(usize),
    /// Key appears outside the `[timing]` section
    KeyOutsideSection(usize),
    /// Key is not a known timing parameter
    UnknownKey(usize),
    /// Value is not a non-negative integer in range
    InvalidValue(usize),
    /// Parsed configuration failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

#[derive(PartialEq)]
enum Section {
    Root,
    Timing,
}

/// Parse TOML configuration into a validated [`TimingConfig`]
pub fn parse_config(input: &str) -> Result<TimingConfig, ParseError> {
    let mut config = TimingConfig::default();
    let mut section = Section::Root;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();

        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            section = match line {
                "[timing]" => Section::Timing,
                _ => return Err(ParseError::InvalidSection(line_no)),
            };
            continue;
        }

        let (key, value) = line
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .ok_or(ParseError::InvalidLine(line_no))?;

        if section != Section::Timing {
            return Err(ParseError::KeyOutsideSection(line_no));
        }

        let value = parse_integer(value).ok_or(ParseError::InvalidValue(line_no))?;
        let narrow = |v: u64| u32::try_from(v).map_err(|_| ParseError::InvalidValue(line_no));

        match key {
            "green_min_ms" => config.green_min_ms = narrow(value)?,
            "green_extension_ms" => config.green_extension_ms = narrow(value)?,
            "yellow_ms" => config.yellow_ms = narrow(value)?,
            "clear_period_ms" => config.clear_period_ms = narrow(value)?,
            "debounce_ms" => config.debounce_ms = narrow(value)?,
            "poll_interval_ms" => config.poll_interval_ms = narrow(value)?,
            "max_cars" => {
                config.max_cars =
                    u16::try_from(value).map_err(|_| ParseError::InvalidValue(line_no))?
            }
            _ => return Err(ParseError::UnknownKey(line_no)),
        }
    }

    config.validate()?;
    Ok(config)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Parse a decimal integer allowing `_` separators between digits
fn parse_integer(s: &str) -> Option<u64> {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') {
        return None;
    }

    let mut value: u64 = 0;
    for c in s.chars() {
        if c == '_' {
            continue;
        }
        let digit = c.to_digit(10)?;
        value = value.checked_mul(10)?.checked_add(u64::from(digit))?;
    }
    Some(value)
}
