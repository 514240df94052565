//! Detent Bus Protocol
//!
//! This crate implements the byte-level protocol a Detent board speaks as an
//! I2C target. The bus master writes a request, the board answers it on the
//! following read. The electrical and timing layer belongs to the I2C
//! peripheral; everything here works on plain byte buffers and runs on the
//! host for testing.
//!
//! # Protocol Overview
//!
//! Requests and replies share one frame shape:
//! ```text
//! request  ┌─────────┬─────────────┬──────────┐
//!          │ COMMAND │ PAYLOAD     │ CRC-8    │
//!          │ 1B      │ 0–n B       │ 1B       │
//!          └─────────┴─────────────┴──────────┘
//! reply    ┌─────────┬─────────────┬──────────┐
//!          │ STATUS  │ PAYLOAD     │ CRC-8    │
//!          │ 1B      │ 0–n B       │ 1B       │
//!          └─────────┴─────────────┴──────────┘
//! ```
//!
//! The CRC covers every byte before it, so a correct frame checksums to
//! zero as a whole. Writes to the general call address carry a single
//! broadcast command byte and are never answered.

#![no_std]
#![deny(unsafe_code)]

pub mod broadcast;
pub mod buffer;
pub mod commands;
pub mod crc;
pub mod status;
pub mod transport;

pub use broadcast::{BroadcastCommand, BROADCAST_ADDRESS};
pub use buffer::TransferBuffer;
pub use crc::crc8;
pub use status::{CommandResult, Status};
pub use transport::{CommandHandler, DeviceControl, Transport};
