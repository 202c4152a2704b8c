//! Relay configuration
//!
//! Board constants travel through [`RelayConfig`] so they are checked
//! once at bring-up against what the hardware and the receiving side
//! can actually do, instead of being trusted raw at every use site.

use crate::signal::Polarity;
use crate::timing::{CarrierTiming, TimingError};

/// Lowest carrier the common receiver modules are sold for.
pub const CARRIER_BAND_MIN_HZ: u32 = 30_000;

/// Highest carrier the common receiver modules are sold for.
pub const CARRIER_BAND_MAX_HZ: u32 = 56_000;

/// Worst tolerated offset between requested and realizable carrier, in
/// tenths of a percent. Receiver sensitivity falls off within a few
/// percent of center frequency.
pub const MAX_CARRIER_ERROR_PER_MILLE: u32 = 20;

/// Everything the relay needs to know about its board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayConfig {
    /// Counter input clock before the prescaler
    pub clock_hz: u32,
    /// Prescaler between clock and carrier counter
    pub prescaler: u32,
    /// Target carrier frequency
    pub carrier_hz: u32,
    /// Electrical convention of the receive line
    pub polarity: Polarity,
}

/// Reasons a configuration cannot drive a relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Requested carrier is outside the receiver band
    CarrierOutOfBand {
        /// The offending request
        carrier_hz: u32,
    },
    /// The clock constants cannot express a carrier at all
    Timing(TimingError),
    /// The nearest realizable carrier sits too far from the request
    CarrierDetuned {
        /// What the configuration asked for
        requested_hz: u32,
        /// What the counter would actually produce
        actual_hz: u32,
    },
}

impl From<TimingError> for ConfigError {
    fn from(err: TimingError) -> Self {
        ConfigError::Timing(err)
    }
}

impl RelayConfig {
    /// Derive carrier timing, rejecting configurations the receiver on
    /// the far side would not tolerate.
    pub fn carrier_timing(&self) -> Result<CarrierTiming, ConfigError> {
        if self.carrier_hz < CARRIER_BAND_MIN_HZ || self.carrier_hz > CARRIER_BAND_MAX_HZ {
            return Err(ConfigError::CarrierOutOfBand {
                carrier_hz: self.carrier_hz,
            });
        }

        let timing = CarrierTiming::derive(self.clock_hz, self.prescaler, self.carrier_hz)?;

        let actual_hz = timing.actual_hz(self.clock_hz, self.prescaler);
        let offset = u64::from(actual_hz.abs_diff(self.carrier_hz));
        if offset * 1_000 > u64::from(self.carrier_hz) * u64::from(MAX_CARRIER_ERROR_PER_MILLE) {
            return Err(ConfigError::CarrierDetuned {
                requested_hz: self.carrier_hz,
                actual_hz,
            });
        }

        Ok(timing)
    }
}
