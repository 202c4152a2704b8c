//! GPIO pin abstractions
//!
//! The relay touches exactly one raw GPIO: the receive line coming out of
//! the demodulating IR receiver. The transmit pin is never driven directly;
//! it belongs to the carrier peripheral (see [`crate::carrier`]).

/// Digital input pin
///
/// Implementations should return the live electrical level of the pin at
/// the moment of the call, not a latched or cached value. The relay decides
/// what to do by re-reading the line after every wake, so a stale answer
/// here turns into a stuck emitter.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
