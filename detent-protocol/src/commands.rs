//! Command bytes understood by Detent boards
//!
//! The transport does not interpret these; they are listed here so the
//! board dispatcher and bus masters agree on the values.

/// Read the last raw hopper sensor measurement
///
/// Request payload: none. Reply: `[on_hi, on_lo, off_hi, off_lo]`.
pub const CMD_GET_LAST_MEASUREMENT: u8 = 0x80;

/// Read the encoder movement since the previous read
///
/// Request payload: none. Reply: `[detents]` as a signed byte, clockwise
/// positive.
pub const CMD_GET_ENCODER_DELTA: u8 = 0x40;

/// Read the number of button presses since the previous read
///
/// Request payload: none. Reply: `[presses]`, at most 127.
pub const CMD_GET_ENCODER_BUTTON: u8 = 0x41;

/// Reply payload length of [`CMD_GET_LAST_MEASUREMENT`]
pub const MEASUREMENT_REPLY_LEN: usize = 4;
