//! Hopper fill sensor
//!
//! A reflective light sensor looks into the hopper. Each measurement takes
//! one ADC sample with the sensor LED lit and one with it dark; a lower
//! reading means more light. When the lit reading is clearly below the
//! dark one, the LED light reflects back to the sensor unobstructed and
//! the hopper is empty.
//!
//! The raw pair is kept for the bus master, and the result drives a
//! digital output for boards that only watch that line.

use detent_hal::gpio::OutputPin;
use portable_atomic::{AtomicU32, Ordering};

/// One raw sensor measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// ADC reading with the LED on
    pub on: u16,
    /// ADC reading with the LED off
    pub off: u16,
}

/// Hopper fill state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HopperLevel {
    /// Light is blocked by material
    Full,
    /// LED light reaches the sensor
    Empty,
}

impl HopperLevel {
    /// Level of the hopper output line (high means full)
    pub fn output_high(self) -> bool {
        matches!(self, HopperLevel::Full)
    }
}

impl Measurement {
    /// Classify the measurement
    ///
    /// Empty only if the lit reading is lower than the dark one by more
    /// than `threshold`.
    pub fn level(&self, threshold: u16) -> HopperLevel {
        if self.on < self.off && self.off - self.on > threshold {
            HopperLevel::Empty
        } else {
            HopperLevel::Full
        }
    }

    /// Wire format: both readings big-endian, lit first
    pub fn to_bytes(&self) -> [u8; 4] {
        let on = self.on.to_be_bytes();
        let off = self.off.to_be_bytes();
        [on[0], on[1], off[0], off[1]]
    }

    fn pack(&self) -> u32 {
        u32::from(self.on) << 16 | u32::from(self.off)
    }

    fn unpack(raw: u32) -> Self {
        Self {
            on: (raw >> 16) as u16,
            off: raw as u16,
        }
    }
}

/// Last measurement, shared with the bus handler
///
/// Both readings live in one atomic word so a reader never sees the lit
/// value of one measurement next to the dark value of another.
pub struct MeasurementCell(AtomicU32);

impl Default for MeasurementCell {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementCell {
    /// Create a cell holding an all-zero measurement
    pub const fn new() -> Self {
        Self(AtomicU32::new(0))
    }

    /// Publish a new measurement
    pub fn store(&self, measurement: Measurement) {
        self.0.store(measurement.pack(), Ordering::Release);
    }

    /// Read the last published measurement
    pub fn load(&self) -> Measurement {
        Measurement::unpack(self.0.load(Ordering::Acquire))
    }
}

/// Drives the sensor LED and the hopper output line
///
/// Sampling itself needs the chip's ADC and a timer, so the firmware does
/// the sequence: [`light`](Self::light), settle, sample,
/// [`darken`](Self::darken), settle, sample, [`finish`](Self::finish).
pub struct HopperMonitor<'a, L, O> {
    led: L,
    output: O,
    threshold: u16,
    cell: &'a MeasurementCell,
}

impl<'a, L: OutputPin, O: OutputPin> HopperMonitor<'a, L, O> {
    /// Create a monitor publishing into `cell`
    pub fn new(led: L, output: O, threshold: u16, cell: &'a MeasurementCell) -> Self {
        Self {
            led,
            output,
            threshold,
            cell,
        }
    }

    /// Switch the sensor LED on
    pub fn light(&mut self) {
        self.led.set_high();
    }

    /// Switch the sensor LED off
    pub fn darken(&mut self) {
        self.led.set_low();
    }

    /// Publish a finished measurement and update the output line
    pub fn finish(&mut self, on: u16, off: u16) -> HopperLevel {
        let measurement = Measurement { on, off };
        self.cell.store(measurement);

        let level = measurement.level(self.threshold);
        self.output.set_state(level.output_high());
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Output pin whose level stays observable after it is moved
    struct MockPin<'a>(&'a Cell<bool>);

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.0.set(true);
        }

        fn set_low(&mut self) {
            self.0.set(false);
        }

        fn is_set_high(&self) -> bool {
            self.0.get()
        }
    }

    #[test]
    fn test_level_threshold() {
        let threshold = 20;
        assert_eq!(Measurement { on: 100, off: 121 }.level(threshold), HopperLevel::Empty);
        // Difference must exceed the threshold, not just reach it
        assert_eq!(Measurement { on: 100, off: 120 }.level(threshold), HopperLevel::Full);
        assert_eq!(Measurement { on: 500, off: 100 }.level(threshold), HopperLevel::Full);
    }

    #[test]
    fn test_to_bytes() {
        let m = Measurement {
            on: 0x0123,
            off: 0x0ABC,
        };
        assert_eq!(m.to_bytes(), [0x01, 0x23, 0x0A, 0xBC]);
    }

    #[test]
    fn test_cell_keeps_pair() {
        let cell = MeasurementCell::new();
        assert_eq!(cell.load(), Measurement::default());

        let m = Measurement {
            on: 0xFFFF,
            off: 0x0001,
        };
        cell.store(m);
        assert_eq!(cell.load(), m);
    }

    #[test]
    fn test_monitor_cycle() {
        let cell = MeasurementCell::new();
        let led = Cell::new(false);
        let output = Cell::new(false);
        let mut monitor = HopperMonitor::new(MockPin(&led), MockPin(&output), 20, &cell);

        monitor.light();
        assert!(led.get());
        monitor.darken();
        assert!(!led.get());

        assert_eq!(monitor.finish(100, 400), HopperLevel::Empty);
        assert!(!output.get());
        assert_eq!(cell.load(), Measurement { on: 100, off: 400 });

        assert_eq!(monitor.finish(400, 400), HopperLevel::Full);
        assert!(output.get());
    }
}
