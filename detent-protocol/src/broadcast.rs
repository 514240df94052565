//! Device-wide commands sent to the general call address

/// Reserved address meaning "every device on the bus"
pub const BROADCAST_ADDRESS: u8 = 0x00;

// Wire format values
const BROADCAST_RESET_ADDRESS: u8 = 0x04;
const BROADCAST_RESET: u8 = 0x06;

/// Commands understood on the broadcast address
///
/// Broadcast writes carry no checksum and are never answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BroadcastCommand {
    /// Give up the current bus address and return to the default one
    ResetAddress,
    /// Force a hardware reset through the watchdog
    Reset,
}

impl BroadcastCommand {
    /// Parse a command from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            BROADCAST_RESET_ADDRESS => Some(BroadcastCommand::ResetAddress),
            BROADCAST_RESET => Some(BroadcastCommand::Reset),
            _ => None,
        }
    }

    /// Parse the first byte of a broadcast payload
    ///
    /// An empty payload carries no command.
    pub fn from_payload(payload: &[u8]) -> Option<Self> {
        payload.first().copied().and_then(Self::from_byte)
    }
}
