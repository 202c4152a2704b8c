//! Carrier gate control
//!
//! Shapes bursts by moving the gate of a [`CarrierOutput`]. The wrapped
//! counter is expected to be configured and free-running before it
//! arrives here; this type never touches anything but the gate.

use heliograph_core::signal::SignalLevel;
use heliograph_hal::CarrierOutput;

/// Burst shaper over a gated carrier.
///
/// Construction disconnects the carrier, so a relay always powers up
/// dark no matter what state the output was handed over in.
pub struct CarrierGate<C: CarrierOutput> {
    output: C,
}

impl<C: CarrierOutput> CarrierGate<C> {
    /// Take ownership of a carrier output and disconnect it.
    pub fn new(mut output: C) -> Self {
        output.disconnect();
        Self { output }
    }

    /// Drive the gate from a decoded line level.
    ///
    /// Present connects the carrier, absent disconnects it. Reapplying
    /// the level the gate already has writes the same position again,
    /// which the hardware does not notice.
    pub fn apply(&mut self, level: SignalLevel) {
        self.output.set_connected(level.is_present());
    }

    /// Whether the carrier currently reaches the pin.
    pub fn is_connected(&self) -> bool {
        self.output.is_connected()
    }

    /// Access the wrapped output.
    pub fn output(&self) -> &C {
        &self.output
    }
}
