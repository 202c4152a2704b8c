//! Carrier generation on a PWM slice
//!
//! One slice gets its clock divider, TOP, and a near-50 % compare at
//! startup and is never reconfigured again; the counter wraps freely
//! for the life of the process. The gate is the channel compare
//! register: compare 0 parks the pin low (RP2040 PWM drives high while
//! the counter is below the compare), the half-period compare produces
//! the carrier. Either move is a single CC write, so a wake can never
//! catch the slice between two registers.

use embassy_rp::pwm::{ChannelBPin, Config, Pwm, Slice};
use embassy_rp::Peri;
use embedded_hal::pwm::SetDutyCycle;
use fixed::types::U12F4;
use heliograph_core::timing::CarrierTiming;
use heliograph_hal::CarrierOutput;

/// Slice clock divider for an integer prescaler.
///
/// The divider register is 8.4 fixed point with an eight-bit integer
/// field, hence the `u8`; the four fraction bits stay zero.
fn slice_divider(prescaler: u8) -> U12F4 {
    U12F4::from_num(prescaler)
}

/// Free-running PWM slice with its compare register used as the gate.
pub struct PwmCarrier<'d> {
    pwm: Pwm<'d>,
    half_period_ticks: u16,
    connected: bool,
}

impl<'d> PwmCarrier<'d> {
    /// Configure a slice for the given timing and start it gated off.
    ///
    /// `prescaler` must be the prescaler `timing` was derived with: the
    /// slice counts `clk_sys / prescaler`, and TOP only means what the
    /// derivation said when both agree. The emitter pin must be the B
    /// channel of the slice.
    pub fn new_output_b<T: Slice>(
        slice: Peri<'d, T>,
        pin: Peri<'d, impl ChannelBPin<T>>,
        timing: &CarrierTiming,
        prescaler: u8,
    ) -> Self {
        let mut config = Config::default();
        config.divider = slice_divider(prescaler);
        config.top = timing.period_ticks;
        config.compare_b = 0;
        let pwm = Pwm::new_output_b(slice, pin, config);

        Self {
            pwm,
            half_period_ticks: timing.half_period_ticks,
            connected: false,
        }
    }
}

impl CarrierOutput for PwmCarrier<'_> {
    fn connect(&mut self) {
        // Compare moves, the counter keeps its phase
        let _ = self.pwm.set_duty_cycle(self.half_period_ticks);
        self.connected = true;
    }

    fn disconnect(&mut self) {
        let _ = self.pwm.set_duty_cycle(0);
        self.connected = false;
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
