//! Carrier generator abstractions
//!
//! The transmit side of the relay is a square wave near 38 kHz at 50 %
//! duty, produced by a hardware counter that free-runs from startup to
//! power-off. Bursts are shaped by a gate between the counter and the
//! output pin, never by starting or stopping the counter itself, so the
//! first cycle of every burst already has the settled frequency.

/// Gated carrier output
///
/// Implementations wrap a timer or PWM slice that was configured once at
/// boot and then left running. The only runtime mutation this trait
/// permits is moving the gate, and moving it must be a single register
/// write: an interrupt arriving between two writes could otherwise see a
/// half-programmed output.
///
/// With the carrier disconnected the gate is an open circuit: the pin
/// rests at its inactive level and the emitter stays dark. Connecting
/// closes the gate and routes the live counter to the pin mid-stream,
/// wherever its phase happens to be.
pub trait CarrierOutput {
    /// Route the carrier to the output pin.
    fn connect(&mut self);

    /// Detach the carrier from the output pin, leaving it at rest while
    /// the counter keeps running.
    fn disconnect(&mut self);

    /// Move the gate to match `connected`.
    fn set_connected(&mut self, connected: bool) {
        if connected {
            self.connect();
        } else {
            self.disconnect();
        }
    }

    /// Check whether the carrier currently reaches the pin.
    fn is_connected(&self) -> bool;
}
