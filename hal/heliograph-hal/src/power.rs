//! Power management abstractions
//!
//! The relay spends nearly all of its life waiting for an edge, so idle
//! current matters more than datapath speed. These types name sleep
//! states and sheddable subsystems in hardware-neutral terms; each board
//! HAL maps them onto its own clock and power registers.

/// Processor sleep states, shallowest first.
///
/// Only [`SleepMode::Idle`] is compatible with relaying: deeper states
/// stop the clock feeding the carrier counter, and some of them also
/// need an oscillator restart on wake, which would eat the front of
/// every burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SleepMode {
    /// Core clock gated, peripheral clocks running, immediate wake
    Idle,
    /// Peripheral clocks stopped, main oscillator kept alive
    Standby,
    /// Everything stopped, wake requires an oscillator restart
    PowerDown,
}

impl SleepMode {
    /// Whether peripheral clocks (and so the carrier counter) keep
    /// running in this state.
    pub fn keeps_peripheral_clocks(self) -> bool {
        matches!(self, SleepMode::Idle)
    }

    /// Whether waking from this state waits on an oscillator restart.
    pub fn wake_needs_oscillator_restart(self) -> bool {
        matches!(self, SleepMode::PowerDown)
    }
}

/// On-chip subsystems the relay can consider powering down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Peripheral {
    /// Analog-to-digital converter
    Adc,
    /// Serial engines (UART/SPI/I2C blocks)
    SerialEngine,
    /// Auxiliary timer not involved in carrier generation
    AuxTimer,
    /// The counter producing the carrier. Listed so power plans can be
    /// checked against it; shedding it would silence the emitter.
    CarrierTimer,
}

/// Sleep mode and peripheral power switching
///
/// The relay calls this once during bring-up: shed what it will never
/// use, then select the sleep state the idle loop re-enters after every
/// serviced edge.
pub trait PowerControl {
    /// Remove power or clocks from a subsystem.
    fn power_down(&mut self, peripheral: Peripheral);

    /// Select the sleep state entered whenever the processor idles.
    fn set_sleep_mode(&mut self, mode: SleepMode);
}
