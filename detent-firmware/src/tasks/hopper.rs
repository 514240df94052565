//! Hopper sensor task
//!
//! Alternates the IR LED on and off, sampling the phototransistor after
//! each change settles, and drives the hopper output from the difference.

use defmt::*;
use embassy_stm32::adc::{Adc, AnyAdcChannel};
use embassy_stm32::peripherals::ADC1;
use embassy_time::Timer;

use detent_core::hopper::HopperMonitor;
use detent_hal_stm32f0::OutputLine;

use crate::channels::MEASUREMENT;

/// Hopper timing and threshold
#[derive(Clone, Copy)]
pub struct HopperConfig {
    /// Minimum off-minus-on difference meaning empty
    pub threshold: u16,
    /// Wait after switching the LED (ms)
    pub settle_ms: u32,
}

#[embassy_executor::task]
pub async fn hopper_task(
    mut adc: Adc<'static, ADC1>,
    mut sensor: AnyAdcChannel<ADC1>,
    led: OutputLine<'static>,
    output: OutputLine<'static>,
    config: HopperConfig,
) {
    info!(
        "Hopper task started: threshold={}, settle={}ms",
        config.threshold, config.settle_ms
    );

    let settle = config.settle_ms as u64;
    let mut monitor = HopperMonitor::new(led, output, config.threshold, &MEASUREMENT);
    let mut last_level = None;

    loop {
        monitor.light();
        Timer::after_millis(settle).await;
        let on = adc.read(&mut sensor).await;

        monitor.darken();
        Timer::after_millis(settle).await;
        let off = adc.read(&mut sensor).await;

        let level = monitor.finish(on, off);
        trace!("Hopper: on={} off={}", on, off);

        if last_level != Some(level) {
            info!("Hopper level: {:?}", level);
            last_level = Some(level);
        }
    }
}
