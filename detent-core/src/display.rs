//! Display power sequencing
//!
//! The display's reset line is pulled up to the 3V3 logic rail, so it
//! would leave reset as soon as that rail comes up. The sequence holds it
//! low first, brings up logic power, releases reset, and only then starts
//! the boost converter for the LED supply. Timings are slower than the
//! datasheet minimum.

use detent_hal::gpio::{OpenDrainPin, OutputPin};

/// One step of the power-up sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerAction {
    /// Drive the reset line low
    HoldReset,
    /// Enable the 3V3 logic supply
    EnableLogicSupply,
    /// Float the reset line so the external pull-up releases it
    ReleaseReset,
    /// Enable the boost converter
    EnableBoost,
}

/// An action followed by a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerStep {
    pub action: PowerAction,
    /// Wait after the action (ms)
    pub delay_ms: u32,
}

/// Display power-up sequence
pub const POWER_UP_SEQUENCE: [PowerStep; 4] = [
    PowerStep {
        action: PowerAction::HoldReset,
        delay_ms: 0,
    },
    PowerStep {
        action: PowerAction::EnableLogicSupply,
        delay_ms: 1,
    },
    PowerStep {
        action: PowerAction::ReleaseReset,
        delay_ms: 1,
    },
    PowerStep {
        action: PowerAction::EnableBoost,
        delay_ms: 5,
    },
];

/// The three lines involved in display power-up
pub struct DisplayRails<R, L, B> {
    reset: R,
    logic: L,
    boost: B,
}

impl<R: OpenDrainPin, L: OutputPin, B: OutputPin> DisplayRails<R, L, B> {
    /// Take the reset line and both supply enables
    pub fn new(reset: R, logic: L, boost: B) -> Self {
        Self {
            reset,
            logic,
            boost,
        }
    }

    /// Perform one power action
    pub fn apply(&mut self, action: PowerAction) {
        match action {
            PowerAction::HoldReset => self.reset.drive_low(),
            PowerAction::EnableLogicSupply => self.logic.set_high(),
            PowerAction::ReleaseReset => self.reset.release(),
            PowerAction::EnableBoost => self.boost.set_high(),
        }
    }
}
