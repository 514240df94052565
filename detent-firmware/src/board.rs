//! Device-wide actions for the bus transport

use defmt::*;
use detent_hal::watchdog::{Watchdog, RESET_TIMEOUT_MS};
use detent_protocol::DeviceControl;

/// Board reset and address handling
pub struct BoardControl<W> {
    watchdog: W,
}

impl<W: Watchdog> BoardControl<W> {
    pub fn new(watchdog: W) -> Self {
        Self { watchdog }
    }
}

impl<W: Watchdog> DeviceControl for BoardControl<W> {
    fn reset(&mut self) {
        warn!("Bus reset requested, restarting in {} ms", RESET_TIMEOUT_MS);
        self.watchdog.arm(RESET_TIMEOUT_MS);
        loop {
            cortex_m::asm::nop();
        }
    }

    fn reset_address(&mut self) {
        // The only address is the one from board.toml, which is the default
        info!("Address reset requested, configured default address already active");
    }
}
