//! Build script for junction-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates intersection.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Must match `MAX_POLL_INTERVAL_MS` in junction-core
const MAX_POLL_INTERVAL_MS: u32 = 100;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct IntersectionFile {
    /// Missing section means all defaults, as in `parse_config`
    #[serde(default)]
    timing: Timing,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct Timing {
    green_min_ms: Option<u32>,
    green_extension_ms: Option<u32>,
    yellow_ms: Option<u32>,
    max_cars: Option<u16>,
    clear_period_ms: Option<u32>,
    debounce_ms: Option<u32>,
    poll_interval_ms: Option<u32>,
}

/// Validate intersection.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=intersection.toml");

    let config_path = Path::new("intersection.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: intersection.toml not found!                             ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds its timing from intersection.toml.          ║\n\
            ║  Please create one in the junction-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read intersection.toml                         ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Syntax, unknown keys and integer ranges
    let config: IntersectionFile = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid intersection.toml                                ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    validate_timing(&config.timing);

    println!("cargo:warning=intersection.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reject values the controller would refuse at boot
fn validate_timing(timing: &Timing) {
    let mut errors = Vec::new();

    let nonzero = [
        ("green_min_ms", timing.green_min_ms),
        ("yellow_ms", timing.yellow_ms),
        ("clear_period_ms", timing.clear_period_ms),
        ("debounce_ms", timing.debounce_ms),
        ("max_cars", timing.max_cars.map(u32::from)),
    ];
    for (key, value) in nonzero {
        if value == Some(0) {
            errors.push(format!("[timing] {} must be greater than 0", key));
        }
    }

    if let Some(poll) = timing.poll_interval_ms {
        if poll == 0 || poll >= MAX_POLL_INTERVAL_MS {
            errors.push(format!(
                "[timing] poll_interval_ms must be 1-{}",
                MAX_POLL_INTERVAL_MS - 1
            ));
        }
    }

    // Informational only; any extension is valid
    if let Some(extension) = timing.green_extension_ms {
        if extension == 0 {
            println!("cargo:warning=green_extension_ms = 0 disables demand-driven green");
        }
    }

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid timing configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}
