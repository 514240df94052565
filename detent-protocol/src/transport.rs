//! Transport engine
//!
//! Turns one received bus write into the reply for the following read.
//! Framing and checksums are handled here; what a command means is left to
//! a [`CommandHandler`], and device-wide actions to a [`DeviceControl`].
//!
//! The reply is built in place in the request's buffer:
//! ```text
//! in:  [cmd][payload ....][crc]          len = n
//!        │   └─ handler reads len n-2, may write up to capacity-2
//! out: [status][reply ...][crc]          len = reply + 2
//! ```

use crate::broadcast::{BroadcastCommand, BROADCAST_ADDRESS};
use crate::buffer::TransferBuffer;
use crate::crc::crc8;
use crate::status::{CommandResult, Status};

/// Smallest buffer that can hold a status byte and a checksum
pub const MIN_CAPACITY: usize = 2;

/// Smallest request: a command byte and a checksum
pub const MIN_REQUEST_LEN: usize = 2;

/// Product-specific command handling
pub trait CommandHandler {
    /// Execute `command`
    ///
    /// `payload[..len]` holds the request payload. The reply payload is
    /// written to the start of the same slice; `payload.len()` is the
    /// largest reply that fits.
    fn handle(&mut self, command: u8, payload: &mut [u8], len: usize) -> CommandResult;
}

/// Device-wide actions triggered by broadcast commands
pub trait DeviceControl {
    /// Reset the whole device
    ///
    /// Hardware implementations arm the watchdog and spin until it fires,
    /// so they do not return. The transport does not rely on that and
    /// suppresses the reply either way.
    fn reset(&mut self);

    /// Drop the current bus address and return to the default one
    fn reset_address(&mut self);
}

/// Bus transport engine
pub struct Transport<H, D> {
    handler: H,
    device: D,
}

impl<H: CommandHandler, D: DeviceControl> Transport<H, D> {
    /// Create a transport dispatching to `handler`
    pub fn new(handler: H, device: D) -> Self {
        Self { handler, device }
    }

    /// Get access to the command handler
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Get access to the device control
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Process one write transaction addressed to `address`
    ///
    /// Returns the length of the reply now held in `buf`, or 0 when
    /// nothing must be sent.
    pub fn process(&mut self, address: u8, buf: &mut TransferBuffer<'_>) -> usize {
        if address == BROADCAST_ADDRESS {
            self.process_broadcast(buf.as_slice());
            buf.set_len(0);
            return 0;
        }

        let capacity = buf.capacity();
        if capacity < MIN_CAPACITY {
            buf.set_len(0);
            return 0;
        }

        let len = buf.len();
        let reply_len = if len < MIN_REQUEST_LEN {
            buf.raw_mut()[0] = Status::InvalidTransfer.as_u8();
            1
        } else if crc8(buf.as_slice()) != 0 {
            buf.raw_mut()[0] = Status::InvalidCrc.as_u8();
            1
        } else {
            let data = buf.raw_mut();
            let command = data[0];
            let result = self
                .handler
                .handle(command, &mut data[1..capacity - 1], len - MIN_REQUEST_LEN);

            if result.status == Status::NoReply {
                buf.set_len(0);
                return 0;
            }

            data[0] = result.status.as_u8();
            result.len.min(capacity - MIN_CAPACITY) + 1
        };

        let data = buf.raw_mut();
        data[reply_len] = crc8(&data[..reply_len]);
        buf.set_len(reply_len + 1);
        reply_len + 1
    }

    fn process_broadcast(&mut self, payload: &[u8]) {
        match BroadcastCommand::from_payload(payload) {
            Some(BroadcastCommand::Reset) => self.device.reset(),
            Some(BroadcastCommand::ResetAddress) => self.device.reset_address(),
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes the payload back, or answers with a fixed status
    #[derive(Default)]
    struct EchoHandler {
        calls: usize,
        last_command: Option<u8>,
        status: Option<Status>,
    }

    impl CommandHandler for EchoHandler {
        fn handle(&mut self, command: u8, payload: &mut [u8], len: usize) -> CommandResult {
            self.calls += 1;
            self.last_command = Some(command);
            match self.status {
                Some(status) => CommandResult::status(status),
                None => {
                    // Reply is the payload reversed, to prove in-place writing
                    payload[..len].reverse();
                    CommandResult::ok(len)
                }
            }
        }
    }

    #[derive(Default)]
    struct MockDevice {
        resets: usize,
        address_resets: usize,
    }

    impl DeviceControl for MockDevice {
        fn reset(&mut self) {
            self.resets += 1;
        }

        fn reset_address(&mut self) {
            self.address_resets += 1;
        }
    }

    fn transport() -> Transport<EchoHandler, MockDevice> {
        Transport::new(EchoHandler::default(), MockDevice::default())
    }

    /// Build a request frame with a valid checksum
    fn request(data: &mut [u8; 16], bytes: &[u8]) -> usize {
        data[..bytes.len()].copy_from_slice(bytes);
        data[bytes.len()] = crc8(bytes);
        bytes.len() + 1
    }

    #[test]
    fn test_valid_request_dispatched() {
        let mut t = transport();
        let mut data = [0u8; 16];
        let len = request(&mut data, &[0x42, 1, 2, 3]);

        let mut buf = TransferBuffer::new(&mut data, len);
        let reply_len = t.process(0x08, &mut buf);

        assert_eq!(reply_len, 5);
        assert_eq!(&buf.as_slice()[..4], &[0x00, 3, 2, 1]);
        assert_eq!(crc8(buf.as_slice()), 0);
        assert_eq!(t.handler().last_command, Some(0x42));
    }

    #[test]
    fn test_short_request_invalid_transfer() {
        let mut t = transport();
        let mut data = [0x55u8; 16];

        let mut buf = TransferBuffer::new(&mut data, 1);
        let reply_len = t.process(0x08, &mut buf);

        assert_eq!(reply_len, 2);
        assert_eq!(buf.as_slice()[0], Status::InvalidTransfer.as_u8());
        assert_eq!(crc8(buf.as_slice()), 0);
        assert_eq!(t.handler().calls, 0);
    }

    #[test]
    fn test_empty_request_invalid_transfer() {
        let mut t = transport();
        let mut data = [0u8; 4];

        let mut buf = TransferBuffer::new(&mut data, 0);
        assert_eq!(t.process(0x08, &mut buf), 2);
        assert_eq!(buf.as_slice()[0], Status::InvalidTransfer.as_u8());
    }

    #[test]
    fn test_corrupt_request_invalid_crc() {
        let mut t = transport();
        let mut data = [0u8; 16];
        let len = request(&mut data, &[0x42, 1, 2]);
        data[1] ^= 0x10;

        let mut buf = TransferBuffer::new(&mut data, len);
        let reply_len = t.process(0x08, &mut buf);

        assert_eq!(reply_len, 2);
        assert_eq!(buf.as_slice()[0], Status::InvalidCrc.as_u8());
        assert_eq!(crc8(buf.as_slice()), 0);
        assert_eq!(t.handler().calls, 0);
    }

    #[test]
    fn test_command_error_relayed() {
        let mut t = transport();
        t.handler.status = Some(Status::CommandNotSupported);
        let mut data = [0u8; 16];
        let len = request(&mut data, &[0x99]);

        let mut buf = TransferBuffer::new(&mut data, len);
        assert_eq!(t.process(0x08, &mut buf), 2);
        assert_eq!(buf.as_slice()[0], Status::CommandNotSupported.as_u8());
    }

    #[test]
    fn test_no_reply_suppressed() {
        let mut t = transport();
        t.handler.status = Some(Status::NoReply);
        let mut data = [0u8; 16];
        let len = request(&mut data, &[0x10]);

        let mut buf = TransferBuffer::new(&mut data, len);
        assert_eq!(t.process(0x08, &mut buf), 0);
        assert!(buf.is_empty());
        assert_eq!(t.handler().calls, 1);
    }

    #[test]
    fn test_capacity_too_small() {
        let mut t = transport();
        let mut data = [0x42u8; 1];

        let mut buf = TransferBuffer::new(&mut data, 1);
        assert_eq!(t.process(0x08, &mut buf), 0);
        assert_eq!(data, [0x42]);
    }

    #[test]
    fn test_oversized_reply_clamped() {
        struct Greedy;
        impl CommandHandler for Greedy {
            fn handle(&mut self, _: u8, payload: &mut [u8], _: usize) -> CommandResult {
                payload.fill(0xEE);
                CommandResult::ok(255)
            }
        }

        let mut t = Transport::new(Greedy, MockDevice::default());
        let mut data = [0u8; 6];
        data[0] = 0x01;
        data[1] = crc8(&[0x01]);

        let mut buf = TransferBuffer::new(&mut data, 2);
        assert_eq!(t.process(0x08, &mut buf), 6);
        assert_eq!(crc8(buf.as_slice()), 0);
    }

    #[test]
    fn test_broadcast_reset() {
        let mut t = transport();
        let mut data = [0x06u8, 0, 0, 0];

        let mut buf = TransferBuffer::new(&mut data, 1);
        assert_eq!(t.process(BROADCAST_ADDRESS, &mut buf), 0);
        assert_eq!(t.device().resets, 1);
        assert_eq!(t.device().address_resets, 0);
        assert_eq!(t.handler().calls, 0);
    }

    #[test]
    fn test_broadcast_reset_address() {
        let mut t = transport();
        let mut data = [0x04u8, 0, 0, 0];

        let mut buf = TransferBuffer::new(&mut data, 1);
        assert_eq!(t.process(BROADCAST_ADDRESS, &mut buf), 0);
        assert_eq!(t.device().address_resets, 1);
        assert_eq!(t.device().resets, 0);
    }

    #[test]
    fn test_broadcast_unknown_or_empty_ignored() {
        let mut t = transport();

        let mut data = [0x99u8, 0, 0, 0];
        let mut buf = TransferBuffer::new(&mut data, 1);
        assert_eq!(t.process(BROADCAST_ADDRESS, &mut buf), 0);

        let mut data = [0x06u8, 0, 0, 0];
        let mut buf = TransferBuffer::new(&mut data, 0);
        assert_eq!(t.process(BROADCAST_ADDRESS, &mut buf), 0);

        assert_eq!(t.device().resets, 0);
        assert_eq!(t.device().address_resets, 0);
        assert_eq!(t.handler().calls, 0);
    }

    #[test]
    fn test_broadcast_ignores_checksum() {
        // A valid-looking unicast frame on the broadcast address is not dispatched
        let mut t = transport();
        let mut data = [0u8; 16];
        let len = request(&mut data, &[0x06]);

        let mut buf = TransferBuffer::new(&mut data, len);
        assert_eq!(t.process(BROADCAST_ADDRESS, &mut buf), 0);
        assert_eq!(t.device().resets, 1);
        assert_eq!(t.handler().calls, 0);
    }
}
