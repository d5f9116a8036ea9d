//! Junction - Adaptive Traffic Signal Firmware
//!
//! Main firmware binary for an RP2040-based single-intersection
//! controller. Two perpendicular roads share the junction; the road with
//! green keeps it for a guaranteed minimum, may extend it while the other
//! road stays quiet, and yields early once enough cars queue on the
//! other road.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

use junction_drivers::{Cabinet, InputSampler};
use junction_hal_rp2040::EmbassyClock;

use crate::board::Board;

/// Embedded timing configuration (compiled into firmware)
/// Edit intersection.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../intersection.toml");

mod board;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Junction firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let timing = config::load_config(EMBEDDED_CONFIG);

    let board = Board::new(p);
    let buttons = InputSampler::new(board.buttons, timing.debounce_ms);

    // Latches the initial pattern with outputs blanked, then enables them
    let cabinet = match Cabinet::new(EmbassyClock, buttons, board.leds, timing) {
        Ok(cabinet) => cabinet,
        Err(e) => defmt::panic!("Failed to initialize signal outputs: {}", e),
    };
    info!(
        "Signals initialized, {} holds green",
        cabinet.controller().phase()
    );

    spawner
        .spawn(tasks::controller_task(cabinet, timing.poll_interval_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
