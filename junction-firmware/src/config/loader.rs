//! Embedded configuration loader

use defmt::*;
use junction_core::config::parse_config;
use junction_core::TimingConfig;

/// Parse the embedded configuration, falling back to defaults
///
/// build.rs rejects a bad `intersection.toml`, so the fallback only
/// triggers if the two validators disagree.
pub fn load_config(source: &str) -> TimingConfig {
    match parse_config(source) {
        Ok(config) => {
            log_config_summary(&config);
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            error!("Using default timing");
            TimingConfig::default()
        }
    }
}

fn log_config_summary(config: &TimingConfig) {
    info!("Configuration loaded successfully");
    debug!(
        "  green {}ms + up to {}ms, yellow {}ms",
        config.green_min_ms, config.green_extension_ms, config.yellow_ms
    );
    debug!(
        "  cutoff at {} cars, one car cleared every {}ms",
        config.max_cars, config.clear_period_ms
    );
    debug!(
        "  debounce {}ms, poll every {}ms",
        config.debounce_ms, config.poll_interval_ms
    );
}
