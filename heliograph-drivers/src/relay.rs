//! The relay proper
//!
//! One struct owning the receive line and the carrier gate, with a
//! single entry point that does the whole job: read the line, move the
//! gate to match. It runs once per wake and deliberately does nothing
//! else. No timestamps, no protocol decoding, no logging; anything
//! added here becomes latency between the remote and the emitter.

use heliograph_core::signal::{Polarity, SignalLevel};
use heliograph_hal::{CarrierOutput, InputPin};

use crate::gate::CarrierGate;

/// Carrier-for-carrier repeater: receive line in, gated carrier out.
///
/// The emitter starts dark regardless of the line level at boot; it
/// first lights up when an edge gets serviced.
pub struct IrRelay<P: InputPin, C: CarrierOutput> {
    line: P,
    polarity: Polarity,
    gate: CarrierGate<C>,
}

impl<P: InputPin, C: CarrierOutput> IrRelay<P, C> {
    /// Build a relay for the usual active-low receiver line.
    pub fn active_low(line: P, output: C) -> Self {
        Self::with_polarity(line, Polarity::ActiveLow, output)
    }

    /// Build a relay with an explicit line convention.
    pub fn with_polarity(line: P, polarity: Polarity, output: C) -> Self {
        Self {
            line,
            polarity,
            gate: CarrierGate::new(output),
        }
    }

    /// Service one wake: sample the line now, move the gate to match.
    ///
    /// The caller only knows that an edge happened; which way it went is
    /// never asked. Edges that pile up while one wake is being serviced
    /// collapse into the next fresh read, so the gate always lands on
    /// the line's current state, never on a stale history. Returns the
    /// level that was applied.
    pub fn service(&mut self) -> SignalLevel {
        let level = self.polarity.read(&self.line);
        self.gate.apply(level);
        level
    }

    /// Whether the emitter is currently driven with carrier.
    pub fn is_emitting(&self) -> bool {
        self.gate.is_connected()
    }

    /// The line convention this relay reads with.
    ///
    /// The wake loop needs it to translate an applied [`SignalLevel`]
    /// back into the electrical level to wait away from.
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// The receive line, for wiring up waits.
    pub fn line_mut(&mut self) -> &mut P {
        &mut self.line
    }
}


#[cfg(test)]
mod proptests {
    use super::tests::{settle, EdgeLatch, MockCarrier, MockPin};
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// However edges arrive and coalesce, a drained relay mirrors
        /// the line's final level.
        #[test]
        fn gate_lands_on_final_level(
            levels in proptest::collection::vec(any::<bool>(), 1..32),
            serviced in proptest::collection::vec(any::<bool>(), 1..32),
        ) {
            let mut relay = IrRelay::active_low(MockPin::idle(), MockCarrier::default());
            let mut latch = EdgeLatch::default();

            for (i, line_high) in levels.iter().enumerate() {
                relay.line_mut().drive(*line_high);
                latch.edge();
                // Sometimes the edge is serviced right away, sometimes
                // it coalesces with the next one
                if serviced.get(i).copied().unwrap_or(false) {
                    latch.drain(&mut relay);
                    prop_assert_eq!(relay.is_emitting(), !*line_high);
                }
            }

            latch.drain(&mut relay);
            let final_high = *levels.last().unwrap();
            prop_assert_eq!(relay.is_emitting(), !final_high);
        }

        /// However the line moves between waits, the level-park loop
        /// always leaves the gate agreeing with the resting line.
        #[test]
        fn settle_lands_gate_on_resting_level(
            levels in proptest::collection::vec(any::<bool>(), 1..32),
        ) {
            let mut relay = IrRelay::active_low(MockPin::idle(), MockCarrier::default());
            let mut applied = relay.service();

            for line_high in &levels {
                relay.line_mut().drive(*line_high);
                applied = settle(&mut relay, applied);
            }

            let final_high = *levels.last().unwrap();
            prop_assert_eq!(relay.is_emitting(), !final_high);
        }

        /// Servicing with no line movement never changes the gate.
        #[test]
        fn repeated_service_is_stable(
            line_high in any::<bool>(),
            repeats in 1usize..16,
        ) {
            let mut relay = IrRelay::active_low(MockPin::idle(), MockCarrier::default());
            relay.line_mut().drive(line_high);

            relay.service();
            let emitting = relay.is_emitting();
            for _ in 0..repeats {
                relay.service();
                prop_assert_eq!(relay.is_emitting(), emitting);
            }
        }
    }
}
