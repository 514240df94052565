//! GPIO wrappers for STM32F0
//!
//! Newtypes over embassy pins implementing the `detent-hal` pin traits.

use detent_hal::gpio::{InputPin, OpenDrainPin, OutputPin};
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Flex, Output, Pull, Speed};

/// Push-pull output
pub struct OutputLine<'d>(Output<'d>);

impl<'d> OutputLine<'d> {
    /// Wrap an embassy output
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl OutputPin for OutputLine<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Input with an EXTI line, for encoder and button edges
pub struct EdgeLine<'d>(ExtiInput<'d>);

impl<'d> EdgeLine<'d> {
    /// Wrap an embassy EXTI input
    pub fn new(pin: ExtiInput<'d>) -> Self {
        Self(pin)
    }

    /// Wait for a rising or falling edge
    pub async fn wait_for_any_edge(&mut self) {
        self.0.wait_for_any_edge().await;
    }

    /// Wait for a falling edge
    pub async fn wait_for_falling_edge(&mut self) {
        self.0.wait_for_falling_edge().await;
    }
}

impl InputPin for EdgeLine<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Line with an external pull-up that is only ever driven low
///
/// Switches between input (released) and push-pull low, so the pin never
/// drives the line to the MCU supply when the pull-up goes to a lower rail.
pub struct PulledUpLine<'d>(Flex<'d>);

impl<'d> PulledUpLine<'d> {
    /// Wrap a flex pin, starting released
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_as_input(Pull::None);
        Self(pin)
    }
}

impl InputPin for PulledUpLine<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

impl OpenDrainPin for PulledUpLine<'_> {
    fn drive_low(&mut self) {
        // Set the level before enabling the driver to avoid a high glitch
        self.0.set_low();
        self.0.set_as_output(Speed::Low);
    }

    fn release(&mut self) {
        self.0.set_as_input(Pull::None);
    }
}
