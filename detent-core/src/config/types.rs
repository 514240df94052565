//! Configuration type definitions

use detent_hal::i2c::{AddressError, TargetAddress, TargetConfig};

/// Default bus address of the board
pub const DEFAULT_ADDRESS: u8 = 0x08;

const DEFAULT_TARGET: TargetAddress = match TargetAddress::new(DEFAULT_ADDRESS) {
    Ok(address) => address,
    Err(_) => panic!("default address must be assignable"),
};

/// Default light difference (raw ADC counts) that means "hopper empty"
pub const DEFAULT_HOPPER_THRESHOLD: u16 = 20;

/// Default time the sensor LED needs to settle before sampling
pub const DEFAULT_SETTLE_MS: u32 = 10;

/// Longest accepted settle time
pub const MAX_SETTLE_MS: u32 = 1000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Bus address is not an assignable 7-bit address
    InvalidAddress(AddressError),
    /// Settle time is zero or above [`MAX_SETTLE_MS`]
    InvalidSettleTime(u32),
    /// Threshold exceeds the ADC range
    InvalidThreshold(u16),
}

impl From<AddressError> for ConfigError {
    fn from(e: AddressError) -> Self {
        ConfigError::InvalidAddress(e)
    }
}

/// Board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Bus address
    pub address: TargetAddress,
    /// Minimum dark-minus-lit difference that reads as empty
    pub hopper_threshold: u16,
    /// LED settle time before each sample (ms)
    pub settle_ms: u32,
    /// ADC full scale (raw counts)
    pub adc_max: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_TARGET,
            hopper_threshold: DEFAULT_HOPPER_THRESHOLD,
            settle_ms: DEFAULT_SETTLE_MS,
            adc_max: 4095,
        }
    }
}

impl BoardConfig {
    /// Build and validate a configuration from raw values
    pub fn new(
        address: u8,
        hopper_threshold: u16,
        settle_ms: u32,
        adc_max: u16,
    ) -> Result<Self, ConfigError> {
        let address = TargetAddress::new(address)?;

        if settle_ms == 0 || settle_ms > MAX_SETTLE_MS {
            return Err(ConfigError::InvalidSettleTime(settle_ms));
        }

        if hopper_threshold >= adc_max {
            return Err(ConfigError::InvalidThreshold(hopper_threshold));
        }

        Ok(Self {
            address,
            hopper_threshold,
            settle_ms,
            adc_max,
        })
    }

    /// I2C target configuration for this board
    ///
    /// General call is always enabled so broadcast resets reach the board.
    pub fn target(&self) -> TargetConfig {
        TargetConfig::new(self.address)
    }
}
