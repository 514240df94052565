//! Board command dispatcher
//!
//! Answers the product-specific commands once the transport has verified
//! the frame. Everything here reads shared state only; the values are
//! produced by the measurement loop and the encoder handlers.

use detent_protocol::commands::{
    CMD_GET_ENCODER_BUTTON, CMD_GET_ENCODER_DELTA, CMD_GET_LAST_MEASUREMENT,
    MEASUREMENT_REPLY_LEN,
};
use detent_protocol::{CommandHandler, CommandResult, Status};

use crate::encoder::EncoderState;
use crate::hopper::MeasurementCell;
use crate::input::PendingInput;

/// Shared state the dispatcher reports from
pub struct BoardCommands<'a> {
    encoder: &'a EncoderState,
    pending: &'a PendingInput,
    measurement: &'a MeasurementCell,
}

impl<'a> BoardCommands<'a> {
    /// Create a dispatcher over the board's shared state
    pub fn new(
        encoder: &'a EncoderState,
        pending: &'a PendingInput,
        measurement: &'a MeasurementCell,
    ) -> Self {
        Self {
            encoder,
            pending,
            measurement,
        }
    }

    fn last_measurement(&self, payload: &mut [u8], len: usize) -> CommandResult {
        if len != 0 || payload.len() < MEASUREMENT_REPLY_LEN {
            return Status::InvalidArguments.into();
        }

        payload[..MEASUREMENT_REPLY_LEN].copy_from_slice(&self.measurement.load().to_bytes());
        CommandResult::ok(MEASUREMENT_REPLY_LEN)
    }

    fn encoder_delta(&self, payload: &mut [u8], len: usize) -> CommandResult {
        if len != 0 || payload.is_empty() {
            return Status::InvalidArguments.into();
        }

        self.pending.collect(self.encoder);
        payload[0] = self.pending.take_detents() as u8;
        CommandResult::ok(1)
    }

    fn encoder_button(&self, payload: &mut [u8], len: usize) -> CommandResult {
        if len != 0 || payload.is_empty() {
            return Status::InvalidArguments.into();
        }

        self.pending.collect(self.encoder);
        payload[0] = self.pending.take_presses();
        CommandResult::ok(1)
    }
}

impl CommandHandler for BoardCommands<'_> {
    fn handle(&mut self, command: u8, payload: &mut [u8], len: usize) -> CommandResult {
        match command {
            CMD_GET_LAST_MEASUREMENT => self.last_measurement(payload, len),
            CMD_GET_ENCODER_DELTA => self.encoder_delta(payload, len),
            CMD_GET_ENCODER_BUTTON => self.encoder_button(payload, len),
            _ => Status::CommandNotSupported.into(),
        }
    }
}
