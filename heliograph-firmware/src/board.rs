//! Board wiring for the reference RP2040 relay
//!
//! Pin assignment:
//!
//! - GPIO16: receive line from the demodulating receiver's OUT pin
//!   (open collector, idles high; the internal pull-up is enabled)
//! - GPIO15: emitter driver, PWM slice 7 channel B
//!
//! The receive line can move to any GPIO. The emitter pin has to sit on
//! a PWM B channel so the carrier slice drives it directly.

/// Carrier frequency the common receiver modules are tuned for.
pub const CARRIER_HZ: u32 = 38_000;

/// The carrier counter runs straight off clk_sys; sixteen bits of TOP
/// cover the whole ratio without dividing first. The slice divider
/// register holds eight integer bits, hence the type.
pub const CARRIER_PRESCALER: u8 = 1;
