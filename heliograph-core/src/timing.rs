//! Carrier timing derivation
//!
//! Converts a target carrier frequency into the two tick constants a
//! hardware counter needs: the wrap value and the 50 % compare point.
//! Derivation happens once at bring-up; nothing in this module runs per
//! edge.

/// Tick constants for one carrier period.
///
/// `period_ticks` is the counter wrap value, so a full period spans
/// `period_ticks + 1` ticks of the prescaled clock. `half_period_ticks`
/// is the 50 % compare point; when the tick count is odd the two half
/// periods differ by a single tick, which receivers do not notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CarrierTiming {
    /// Counter wrap value (TOP / OCR-style register)
    pub period_ticks: u16,
    /// Compare value splitting the period near 50 %
    pub half_period_ticks: u16,
}

/// Reasons a carrier cannot be derived from a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimingError {
    /// The input clock was given as zero
    ZeroClock,
    /// The prescaler was given as zero
    ZeroPrescaler,
    /// The target carrier was given as zero
    ZeroCarrier,
    /// Fewer than three ticks per period: the counter cannot express a
    /// nonzero high phase at this rate
    CarrierTooFast,
    /// The period does not fit a 16-bit counter; raise the prescaler
    PeriodTooLong {
        /// Ticks the period would have needed
        ticks: u32,
    },
}

impl CarrierTiming {
    /// Derive tick constants for `carrier_hz` from a counter fed with
    /// `clock_hz / prescaler`.
    ///
    /// The tick count is rounded to the nearest integer. Truncating
    /// instead shifts the realized carrier a full percent off target at
    /// the tick counts small parts run at.
    pub fn derive(clock_hz: u32, prescaler: u32, carrier_hz: u32) -> Result<Self, TimingError> {
        if clock_hz == 0 {
            return Err(TimingError::ZeroClock);
        }
        if prescaler == 0 {
            return Err(TimingError::ZeroPrescaler);
        }
        if carrier_hz == 0 {
            return Err(TimingError::ZeroCarrier);
        }

        // round(clock / (prescaler * carrier)), ties up
        let divisor = u64::from(prescaler) * u64::from(carrier_hz);
        let ticks_per_period = (2 * u64::from(clock_hz) + divisor) / (2 * divisor);

        if ticks_per_period < 3 {
            return Err(TimingError::CarrierTooFast);
        }
        let period = ticks_per_period - 1;
        if period > u64::from(u16::MAX) {
            return Err(TimingError::PeriodTooLong {
                ticks: period as u32,
            });
        }

        let period_ticks = period as u16;
        Ok(Self {
            period_ticks,
            half_period_ticks: period_ticks / 2,
        })
    }

    /// Frequency the counter will actually produce, rounded to the
    /// nearest hertz.
    pub fn actual_hz(&self, clock_hz: u32, prescaler: u32) -> u32 {
        let divisor = u64::from(prescaler) * (u64::from(self.period_ticks) + 1);
        ((2 * u64::from(clock_hz) + divisor) / (2 * divisor)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_mhz_part_at_38_khz() {
        // 8 MHz / 8 = 1 MHz timer clock, 26.3 ticks per period
        let timing = CarrierTiming::derive(8_000_000, 8, 38_000).unwrap();
        assert_eq!(timing.period_ticks, 25);
        assert_eq!(timing.half_period_ticks, 12);
        assert_eq!(timing.actual_hz(8_000_000, 8), 38_462);
    }

    #[test]
    fn test_rp2040_sys_clock_at_38_khz() {
        // 125 MHz undivided, 3289.5 ticks per period
        let timing = CarrierTiming::derive(125_000_000, 1, 38_000).unwrap();
        assert_eq!(timing.period_ticks, 3_288);
        assert_eq!(timing.half_period_ticks, 1_644);
        assert_eq!(timing.actual_hz(125_000_000, 1), 38_005);
    }

    #[test]
    fn test_rounds_to_nearest_rather_than_truncating() {
        // 1 MHz / 36 kHz = 27.78 ticks: truncation would pick 27,
        // rounding picks 28
        let timing = CarrierTiming::derive(1_000_000, 1, 36_000).unwrap();
        assert_eq!(timing.period_ticks, 27);
    }

    #[test]
    fn test_exact_half_rounds_up() {
        // 75 kHz / 10 kHz = 7.5 ticks
        let timing = CarrierTiming::derive(75_000, 1, 10_000).unwrap();
        assert_eq!(timing.period_ticks, 7);
        assert_eq!(timing.half_period_ticks, 3);
    }

    #[test]
    fn test_compare_lands_within_a_tick_of_center() {
        let timing = CarrierTiming::derive(8_000_000, 8, 38_000).unwrap();
        let high = u32::from(timing.half_period_ticks);
        let full = u32::from(timing.period_ticks) + 1;
        assert!(full.abs_diff(2 * high) <= 2);
    }

    #[test]
    fn test_zero_inputs_are_rejected() {
        assert_eq!(
            CarrierTiming::derive(0, 8, 38_000),
            Err(TimingError::ZeroClock)
        );
        assert_eq!(
            CarrierTiming::derive(8_000_000, 0, 38_000),
            Err(TimingError::ZeroPrescaler)
        );
        assert_eq!(
            CarrierTiming::derive(8_000_000, 8, 0),
            Err(TimingError::ZeroCarrier)
        );
    }

    #[test]
    fn test_carrier_above_tick_rate_is_rejected() {
        assert_eq!(
            CarrierTiming::derive(1_000, 1, 38_000),
            Err(TimingError::CarrierTooFast)
        );
        // Two ticks per period would leave a zero-length high phase
        assert_eq!(
            CarrierTiming::derive(76_000, 1, 38_000),
            Err(TimingError::CarrierTooFast)
        );
    }

    #[test]
    fn test_period_beyond_sixteen_bits_is_rejected() {
        assert_eq!(
            CarrierTiming::derive(125_000_000, 1, 1_000),
            Err(TimingError::PeriodTooLong { ticks: 124_999 })
        );
    }
}
