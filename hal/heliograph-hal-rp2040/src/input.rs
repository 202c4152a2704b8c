//! Receive line input
//!
//! The demodulating receiver's open-collector output comes in on a
//! GPIO with the internal pull-up enabled, so an undriven line reads
//! high (signal absent). Waits ride the IO bank interrupt through
//! embassy; level reads go straight to the pad register.
//!
//! The IO bank latches edge events, but embassy clears the latch every
//! time an edge wait arms, so an edge that lands between a read and
//! the next arm is unrecoverable. Level waits have no such window: the
//! interrupt fires as long as the line sits at the requested level, so
//! a wait armed after the line already moved completes immediately.

use embassy_rp::gpio::{AnyPin, Input, Pull};
use embassy_rp::Peri;
use heliograph_hal::InputPin;

/// Receive line: live level reads plus async waits.
pub struct EdgeInput<'d> {
    pin: Input<'d>,
}

impl<'d> EdgeInput<'d> {
    /// Claim a pin as the receive line.
    pub fn new(pin: Peri<'d, AnyPin>, pull: Pull) -> Self {
        Self {
            pin: Input::new(pin, pull),
        }
    }

    /// Wait until the line changes level in either direction.
    ///
    /// Arming clears any edge latched earlier, so this cannot chase a
    /// level that was already read. It is the arm-time wait, before
    /// the first service; every later wait goes by level.
    pub async fn wait_any_edge(&mut self) {
        self.pin.wait_for_any_edge().await;
    }

    /// Wait until the line reads high. Completes immediately when it
    /// already does.
    pub async fn wait_for_high(&mut self) {
        self.pin.wait_for_high().await;
    }

    /// Wait until the line reads low. Completes immediately when it
    /// already does.
    pub async fn wait_for_low(&mut self) {
        self.pin.wait_for_low().await;
    }
}

impl InputPin for EdgeInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
