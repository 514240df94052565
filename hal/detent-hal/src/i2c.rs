//! I2C target (slave) abstractions
//!
//! The board answers to a single 7-bit address and, when general call is
//! enabled, to the reserved broadcast address 0. Chip HALs map their
//! peripheral errors onto [`TargetError`].

/// Reserved general call (broadcast) address
pub const GENERAL_CALL_ADDRESS: u8 = 0x00;

/// A validated 7-bit I2C target address
///
/// Excludes the reserved ranges `0x00..=0x07` and `0x78..=0x7F`, so a
/// board can never be configured onto the broadcast address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TargetAddress(u8);

/// Invalid target address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressError {
    /// Address does not fit in 7 bits
    OutOfRange(u8),
    /// Address is in a range reserved by the I2C specification
    Reserved(u8),
}

impl TargetAddress {
    /// Lowest assignable 7-bit address
    pub const MIN: u8 = 0x08;
    /// Highest assignable 7-bit address
    pub const MAX: u8 = 0x77;

    /// Validate a raw 7-bit address
    pub const fn new(address: u8) -> Result<Self, AddressError> {
        if address > 0x7F {
            Err(AddressError::OutOfRange(address))
        } else if address < Self::MIN || address > Self::MAX {
            Err(AddressError::Reserved(address))
        } else {
            Ok(Self(address))
        }
    }

    /// Get the raw 7-bit address
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for TargetAddress {
    type Error = AddressError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// I2C target configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TargetConfig {
    /// Own address the board answers to
    pub address: TargetAddress,
    /// Also answer to the general call address
    pub general_call: bool,
}

impl TargetConfig {
    /// Answer to `address` and to general call
    pub const fn new(address: TargetAddress) -> Self {
        Self {
            address,
            general_call: true,
        }
    }
}

/// Errors from I2C target operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TargetError {
    /// Bus error (misplaced start/stop)
    Bus,
    /// Arbitration lost
    ArbitrationLost,
    /// Controller did not acknowledge a byte we sent
    Nack,
    /// Timeout
    Timeout,
    /// Received more bytes than the transfer buffer holds
    Overrun,
    /// Other error
    Other,
}
