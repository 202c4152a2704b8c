//! Receive line decoding
//!
//! Demodulating IR receivers drive their output with negative logic: the
//! line idles high and is held low for as long as carrier is detected.
//! [`Polarity`] owns that convention so the rest of the relay can ask
//! "is signal present" without re-deriving it at every call site.

use heliograph_hal::InputPin;

/// Decoded state of the receive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SignalLevel {
    /// The remote side is emitting carrier.
    Present,
    /// The line is at rest.
    Absent,
}

impl SignalLevel {
    /// Check for the active state.
    pub fn is_present(self) -> bool {
        matches!(self, SignalLevel::Present)
    }
}

/// Electrical convention of the receive line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Low means signal present (the common receiver convention).
    ActiveLow,
    /// High means signal present.
    ActiveHigh,
}

impl Polarity {
    /// Decode a raw electrical level.
    pub fn decode(self, line_is_high: bool) -> SignalLevel {
        let present = match self {
            Polarity::ActiveLow => !line_is_high,
            Polarity::ActiveHigh => line_is_high,
        };
        if present {
            SignalLevel::Present
        } else {
            SignalLevel::Absent
        }
    }

    /// Electrical level the line sits at for a given signal state.
    ///
    /// Inverse of [`decode`](Polarity::decode). The wake loop uses it
    /// to arm a level wait for the line leaving the state it last
    /// serviced.
    pub fn line_is_high(self, level: SignalLevel) -> bool {
        match self {
            Polarity::ActiveLow => !level.is_present(),
            Polarity::ActiveHigh => level.is_present(),
        }
    }

    /// Sample a pin and decode it in one step.
    ///
    /// This is the relay's only view of the line: a fresh read at the
    /// moment of the call. Which way the line moved to get here is
    /// deliberately not part of the answer, so a read that follows a
    /// burst of coalesced edges still reports where the line is now.
    pub fn read(self, line: &impl InputPin) -> SignalLevel {
        self.decode(line.is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FixedPin {
        high: Cell<bool>,
    }

    impl InputPin for FixedPin {
        fn is_high(&self) -> bool {
            self.high.get()
        }
    }

    #[test]
    fn test_active_low_decodes_low_as_present() {
        assert_eq!(Polarity::ActiveLow.decode(false), SignalLevel::Present);
        assert_eq!(Polarity::ActiveLow.decode(true), SignalLevel::Absent);
    }

    #[test]
    fn test_active_high_decodes_high_as_present() {
        assert_eq!(Polarity::ActiveHigh.decode(true), SignalLevel::Present);
        assert_eq!(Polarity::ActiveHigh.decode(false), SignalLevel::Absent);
    }

    #[test]
    fn test_present_sits_low_on_an_active_low_line() {
        assert!(!Polarity::ActiveLow.line_is_high(SignalLevel::Present));
        assert!(Polarity::ActiveLow.line_is_high(SignalLevel::Absent));
    }

    #[test]
    fn test_line_level_roundtrips_through_decode() {
        for polarity in [Polarity::ActiveLow, Polarity::ActiveHigh] {
            for level in [SignalLevel::Present, SignalLevel::Absent] {
                assert_eq!(polarity.decode(polarity.line_is_high(level)), level);
            }
        }
    }

    #[test]
    fn test_read_reports_the_pin_level_at_call_time() {
        let pin = FixedPin { high: Cell::new(true) };
        assert_eq!(Polarity::ActiveLow.read(&pin), SignalLevel::Absent);

        pin.high.set(false);
        assert_eq!(Polarity::ActiveLow.read(&pin), SignalLevel::Present);

        // Same pin, opposite convention
        assert_eq!(Polarity::ActiveHigh.read(&pin), SignalLevel::Absent);
    }

    #[test]
    fn test_is_present_matches_variant() {
        assert!(SignalLevel::Present.is_present());
        assert!(!SignalLevel::Absent.is_present());
    }
}
