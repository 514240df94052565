//! I2C target helpers for STM32F0
//!
//! The firmware drives embassy's I2C peripheral in target mode directly.
//! This module converts board addressing into embassy's configuration and
//! maps embassy errors onto [`TargetError`].

use detent_hal::i2c::{TargetConfig, TargetError, GENERAL_CALL_ADDRESS};
use embassy_stm32::i2c::{Address, Error as I2cError, OwnAddresses, SlaveAddrConfig};

/// Build embassy's own-address configuration for a board
pub fn slave_addr_config(config: &TargetConfig) -> SlaveAddrConfig {
    SlaveAddrConfig {
        addr: OwnAddresses::OA1(Address::SevenBit(config.address.get())),
        general_call: config.general_call,
    }
}

/// Raw 7-bit address a transaction was addressed to
///
/// General call matches are reported as [`GENERAL_CALL_ADDRESS`].
pub fn matched_address(address: Address) -> u8 {
    match address {
        Address::SevenBit(a) => a,
        // The board never claims a 10-bit address
        Address::TenBit(_) => GENERAL_CALL_ADDRESS,
    }
}

/// Map embassy I2C errors onto board errors
pub fn target_error(e: I2cError) -> TargetError {
    match e {
        I2cError::Bus => TargetError::Bus,
        I2cError::Arbitration => TargetError::ArbitrationLost,
        I2cError::Nack => TargetError::Nack,
        I2cError::Timeout => TargetError::Timeout,
        I2cError::Overrun => TargetError::Overrun,
        _ => TargetError::Other,
    }
}
