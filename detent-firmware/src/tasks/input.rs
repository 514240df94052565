//! Encoder drain task
//!
//! Moves completed detents and presses out of the edge-fed state into the
//! pending counters the bus master reads. Runs on every drain request and
//! at least every [`DRAIN_PERIOD_MS`], which picks up button presses.

use defmt::*;
use embassy_futures::select::select;
use embassy_time::Timer;

use crate::channels::{DRAIN_REQUEST, ENCODER, PENDING_INPUT};

/// Longest gap between two drains
pub const DRAIN_PERIOD_MS: u64 = 20;

#[embassy_executor::task]
pub async fn input_task() {
    loop {
        select(DRAIN_REQUEST.wait(), Timer::after_millis(DRAIN_PERIOD_MS)).await;

        let report = PENDING_INPUT.collect(&ENCODER);
        if !report.is_empty() {
            debug!(
                "Encoder: {} detents, {} presses",
                report.detents, report.presses
            );
        }
    }
}
