//! Sleep and power control
//!
//! Two mechanisms cover the relay's power story on RP2040. SLEEPDEEP in
//! the Cortex-M system control block picks between shallow sleep, where
//! clk_sys stays alive and the PWM and IO bank keep working, and deep
//! sleep; the relay always runs shallow. The SLEEP_EN registers in the
//! clocks block choose which peripherals keep their clock while the
//! cores sleep; shedding clears the bits for blocks the relay never
//! touches. The PWM, IO bank, and system timer bits stay set, or the
//! carrier would freeze exactly when the core stops to wait for it.

use cortex_m::peripheral::SCB;
use embassy_rp::pac;
use heliograph_hal::{Peripheral, PowerControl, SleepMode};

/// SCB sleep selection plus sleep-time clock gating.
pub struct CortexPower {
    scb: SCB,
}

impl CortexPower {
    /// Take ownership of the system control block.
    pub fn new(scb: SCB) -> Self {
        Self { scb }
    }
}

impl PowerControl for CortexPower {
    fn power_down(&mut self, peripheral: Peripheral) {
        match peripheral {
            Peripheral::Adc => {
                pac::CLOCKS.sleep_en0().modify(|w| {
                    w.set_clk_sys_adc(false);
                    w.set_clk_adc_adc(false);
                });
            }
            Peripheral::SerialEngine => {
                pac::CLOCKS.sleep_en0().modify(|w| {
                    w.set_clk_sys_spi0(false);
                    w.set_clk_peri_spi0(false);
                    w.set_clk_sys_spi1(false);
                    w.set_clk_peri_spi1(false);
                    w.set_clk_sys_i2c0(false);
                    w.set_clk_sys_i2c1(false);
                });
                pac::CLOCKS.sleep_en1().modify(|w| {
                    w.set_clk_sys_uart0(false);
                    w.set_clk_peri_uart0(false);
                    w.set_clk_sys_uart1(false);
                    w.set_clk_peri_uart1(false);
                });
            }
            Peripheral::AuxTimer => {
                pac::CLOCKS.sleep_en0().modify(|w| {
                    w.set_clk_sys_rtc(false);
                    w.set_clk_rtc_rtc(false);
                });
            }
            // Validated plans never name it; leave the PWM clock alone
            // regardless
            Peripheral::CarrierTimer => {}
        }
    }

    fn set_sleep_mode(&mut self, mode: SleepMode) {
        if mode.keeps_peripheral_clocks() {
            self.scb.clear_sleepdeep();
        } else {
            self.scb.set_sleepdeep();
        }
    }
}
