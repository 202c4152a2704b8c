//! Heliograph - Infrared Signal Relay Firmware
//!
//! Main firmware binary for RP2040-based IR repeaters. Receives the
//! demodulated output of an IR receiver module and retransmits it on a
//! locally generated 38 kHz carrier, edge by edge, with no protocol
//! knowledge in between.
//!
//! Bring-up order matters: the carrier slice starts free-running and
//! gated off before the relay task arms, so the emitter cannot flash
//! during boot and the first serviced edge finds a settled carrier.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::Pull;
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use heliograph_core::config::RelayConfig;
use heliograph_core::power::PowerPlan;
use heliograph_core::signal::Polarity;
use heliograph_drivers::relay::IrRelay;
use heliograph_hal_rp2040::{CortexPower, EdgeInput, PwmCarrier};

mod board;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Heliograph relay starting...");

    let p = embassy_rp::init(Default::default());
    let core = cortex_m::Peripherals::take().unwrap();

    // Check the board constants against the live clock tree
    let config = RelayConfig {
        clock_hz: embassy_rp::clocks::clk_sys_freq(),
        prescaler: u32::from(board::CARRIER_PRESCALER),
        carrier_hz: board::CARRIER_HZ,
        polarity: Polarity::ActiveLow,
    };
    let timing = match config.carrier_timing() {
        Ok(timing) => timing,
        Err(e) => {
            error!("Carrier configuration rejected: {}", e);
            panic!("carrier configuration rejected");
        }
    };
    info!(
        "Carrier {} Hz -> top {} compare {} ({} Hz realized)",
        config.carrier_hz,
        timing.period_ticks,
        timing.half_period_ticks,
        timing.actual_hz(config.clock_hz, config.prescaler)
    );

    // Power down what the relay never touches and pin sleep to the
    // shallow state that keeps the carrier counting
    let mut power = CortexPower::new(core.SCB);
    let plan = PowerPlan::relay_default();
    if let Err(e) = plan.apply(&mut power) {
        error!("Power plan rejected: {}", e);
        panic!("power plan rejected");
    }
    info!("Power plan applied: {} peripherals shed", plan.shed_list().len());

    // Carrier first (free-running, gated off), then the receive line.
    // The slice gets the same prescaler the timing was derived with.
    let carrier =
        PwmCarrier::new_output_b(p.PWM_SLICE7, p.PIN_15, &timing, board::CARRIER_PRESCALER);
    let line = EdgeInput::new(p.PIN_16.into(), Pull::Up);
    let relay = IrRelay::with_polarity(line, config.polarity, carrier);

    spawner.spawn(tasks::relay_task(relay)).unwrap();
    info!("Relay armed");

    // The executor parks the core in the planned sleep state whenever
    // nothing is runnable; this loop only proves liveness now and then
    loop {
        Timer::after_secs(60).await;
        trace!("Heartbeat: relay idle between edges");
    }
}
