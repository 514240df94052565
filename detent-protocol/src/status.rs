//! Reply status codes and command results

/// Status byte at the start of every reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Status {
    /// Command executed
    CommandOk = 0x00,
    /// Command was understood but could not be executed
    CommandFailed = 0x01,
    /// Unknown command byte
    CommandNotSupported = 0x02,
    /// Request too short to hold a command and a checksum
    InvalidTransfer = 0x03,
    /// Request checksum did not verify
    InvalidCrc = 0x04,
    /// Command payload has the wrong length or contents
    InvalidArguments = 0x05,
    /// Internal only: send no reply at all. Never put on the wire.
    NoReply = 0xFF,
}

impl Status {
    /// Wire format byte
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Outcome of a dispatched command
///
/// `len` counts the reply payload bytes the handler wrote into its
/// payload region. It is ignored unless the status is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CommandResult {
    pub status: Status,
    pub len: usize,
}

impl CommandResult {
    /// Successful command with `len` reply bytes
    pub const fn ok(len: usize) -> Self {
        Self {
            status: Status::CommandOk,
            len,
        }
    }

    /// Bare status without payload
    pub const fn status(status: Status) -> Self {
        Self { status, len: 0 }
    }

    /// Suppress the reply entirely
    pub const fn no_reply() -> Self {
        Self::status(Status::NoReply)
    }
}

impl From<Status> for CommandResult {
    fn from(status: Status) -> Self {
        Self::status(status)
    }
}
