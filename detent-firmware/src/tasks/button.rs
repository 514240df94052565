//! Encoder push button task

use detent_hal_stm32f0::EdgeLine;

use crate::channels::ENCODER;

#[embassy_executor::task]
pub async fn button_task(mut button: EdgeLine<'static>) {
    loop {
        // Active low with pull-up
        button.wait_for_falling_edge().await;
        ENCODER.on_button_edge();
    }
}
