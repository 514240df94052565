//! Quadrature edge task
//!
//! Both lines are re-armed on every pass, so an edge that lands while a
//! sample is being decoded can be missed. The next sample then differs in
//! both bits and decodes as two steps. Read in the direction of travel
//! that is exact; otherwise the position stays in phase with the lines
//! and the next detent realigns it.

use embassy_futures::select::select;

use detent_hal_stm32f0::EdgeLine;

use crate::channels::{DRAIN_REQUEST, ENCODER};

#[embassy_executor::task]
pub async fn encoder_task(mut a: EdgeLine<'static>, mut b: EdgeLine<'static>) {
    loop {
        select(a.wait_for_any_edge(), b.wait_for_any_edge()).await;

        if ENCODER.on_quadrature_pins(&a, &b) {
            DRAIN_REQUEST.signal(());
        }
    }
}
