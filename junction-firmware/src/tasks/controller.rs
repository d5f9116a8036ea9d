//! Signal controller task
//!
//! Runs the cabinet's control loop on a fixed ticker. Every iteration
//! samples the buttons, advances the phase controller and relatches the
//! LED bank.

use defmt::*;
use embassy_time::{Duration, Ticker};

use junction_drivers::{Cabinet, StepReport};
use junction_hal_rp2040::{EmbassyClock, RpInput, RpOutput};

pub type SignalCabinet = Cabinet<
    EmbassyClock,
    RpInput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
>;

#[embassy_executor::task]
pub async fn controller_task(mut cabinet: SignalCabinet, poll_interval_ms: u32) {
    info!("Controller task started ({}ms poll)", poll_interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(poll_interval_ms)));

    loop {
        ticker.next().await;

        // A lamp we cannot drive could leave conflicting greens showing
        let report = match cabinet.step() {
            Ok(report) => report,
            Err(e) => defmt::panic!("Signal hardware fault: {}", e),
        };

        log_report(&cabinet, &report);
    }
}

fn log_report(cabinet: &SignalCabinet, report: &StepReport) {
    let counter = cabinet.controller().counter();

    for approach in report.outcome.arrivals.iter() {
        debug!(
            "Arrival on {} ({} waiting)",
            approach,
            counter.count(approach)
        );
    }

    for approach in report.outcome.cleared.iter() {
        debug!(
            "Car cleared from {} ({} waiting)",
            approach,
            counter.count(approach)
        );
    }

    for transition in &report.outcome.transitions {
        info!(
            "{} -> {} at {}ms ({} waiting on red)",
            transition.from,
            transition.to,
            transition.at_ms,
            cabinet.controller().opposing_queue()
        );
    }

    trace!("LEDs {=u16:#x}", report.bits.to_u16());
}
