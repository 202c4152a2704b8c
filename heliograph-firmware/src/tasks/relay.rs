//! The relay task
//!
//! This loop is the entire datapath: wake, re-read the line, move the
//! gate, park until the line leaves the level just applied. All waits
//! after the first go by level, so a change that lands while the gate
//! is being written completes the next wait immediately instead of
//! being lost with its edge. There is no logging and no timekeeping in
//! here; anything added to this loop turns into latency between the
//! remote and the emitter.

use heliograph_drivers::relay::IrRelay;
use heliograph_hal_rp2040::{EdgeInput, PwmCarrier};

/// The relay instantiated with this board's input and carrier types.
pub type BoardRelay = IrRelay<EdgeInput<'static>, PwmCarrier<'static>>;

#[embassy_executor::task]
pub async fn relay_task(mut relay: BoardRelay) {
    // Dark until the line first moves
    relay.line_mut().wait_any_edge().await;
    loop {
        let level = relay.service();
        if relay.polarity().line_is_high(level) {
            relay.line_mut().wait_for_low().await;
        } else {
            relay.line_mut().wait_for_high().await;
        }
    }
}
