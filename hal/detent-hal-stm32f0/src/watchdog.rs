//! Independent watchdog for STM32F0
//!
//! The IWDG timeout is fixed when the driver is created, so the peripheral
//! is held until [`Watchdog::arm`] picks the timeout.

use detent_hal::watchdog::Watchdog;
use embassy_stm32::peripherals::IWDG;
use embassy_stm32::wdg::IndependentWatchdog;
use embassy_stm32::Peri;

/// IWDG wrapper
pub struct Iwdg<'d> {
    idle: Option<Peri<'d, IWDG>>,
    running: Option<IndependentWatchdog<'d, IWDG>>,
}

impl<'d> Iwdg<'d> {
    /// Take the IWDG peripheral without starting it
    pub fn new(iwdg: Peri<'d, IWDG>) -> Self {
        Self {
            idle: Some(iwdg),
            running: None,
        }
    }
}

impl Watchdog for Iwdg<'_> {
    fn arm(&mut self, timeout_ms: u32) {
        // The IWDG cannot be reconfigured once unleashed
        if let Some(iwdg) = self.idle.take() {
            let mut wdg = IndependentWatchdog::new(iwdg, timeout_ms.saturating_mul(1000));
            wdg.unleash();
            self.running = Some(wdg);
        }
    }
}
