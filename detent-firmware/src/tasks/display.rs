//! Display power-up task

use defmt::*;
use embassy_time::Timer;

use detent_core::display::{DisplayRails, POWER_UP_SEQUENCE};
use detent_hal_stm32f0::{OutputLine, PulledUpLine};

#[embassy_executor::task]
pub async fn display_power_task(
    mut rails: DisplayRails<PulledUpLine<'static>, OutputLine<'static>, OutputLine<'static>>,
) {
    for step in POWER_UP_SEQUENCE {
        trace!("Display power: {:?}", step.action);
        rails.apply(step.action);
        if step.delay_ms > 0 {
            Timer::after_millis(step.delay_ms as u64).await;
        }
    }

    info!("Display powered");
}
