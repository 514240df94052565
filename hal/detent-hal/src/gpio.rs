//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip. Encoder lines are read from interrupt-driven
/// tasks, so this must not block.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin that can switch between driving and floating
///
/// Used for lines with an external pull-up that must only ever be driven
/// low, such as a reset line pulled up to a lower supply rail.
pub trait OpenDrainPin: InputPin {
    /// Drive the line low
    fn drive_low(&mut self);

    /// Stop driving and let the external pull-up take over
    fn release(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockOutput {
        high: bool,
    }

    impl OutputPin for MockOutput {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockInput(bool);

    impl InputPin for MockInput {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_set_state_drives_level() {
        let mut pin = MockOutput { high: false };
        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(!pin.is_set_high());
    }

    #[test]
    fn test_is_low_default() {
        assert!(MockInput(false).is_low());
        assert!(!MockInput(true).is_low());
    }
}
