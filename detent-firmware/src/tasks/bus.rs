//! Bus target task
//!
//! A master write carries one request frame. The reply is computed right
//! away and held until the master reads it back.

use defmt::*;
use embassy_stm32::i2c::{I2c, MultiMaster, SlaveCommand, SlaveCommandKind};
use embassy_stm32::mode::Async;
use heapless::Vec;

use detent_core::BoardCommands;
use detent_hal_stm32f0::i2c::{matched_address, target_error};
use detent_hal_stm32f0::Iwdg;
use detent_protocol::{TransferBuffer, Transport};

use crate::board::BoardControl;

/// Largest frame exchanged on the bus
pub const FRAME_CAPACITY: usize = 32;

/// Board transport with its concrete handler and device
pub type BoardTransport = Transport<BoardCommands<'static>, BoardControl<Iwdg<'static>>>;

#[embassy_executor::task]
pub async fn bus_task(mut i2c: I2c<'static, Async, MultiMaster>, mut transport: BoardTransport) {
    info!("Bus task started");

    let mut frame = [0u8; FRAME_CAPACITY];
    let mut reply: Vec<u8, FRAME_CAPACITY> = Vec::new();

    loop {
        let command: SlaveCommand = match i2c.listen().await {
            Ok(command) => command,
            Err(e) => {
                warn!("Bus listen failed: {:?}", target_error(e));
                continue;
            }
        };

        match command.kind {
            SlaveCommandKind::Write => {
                let received = match i2c.respond_to_write(&mut frame).await {
                    Ok(n) => n,
                    Err(e) => {
                        warn!("Bus write failed: {:?}", target_error(e));
                        continue;
                    }
                };

                let address = matched_address(command.address);
                trace!("Request: {} bytes to {:#04x}", received, address);

                let mut buf = TransferBuffer::new(&mut frame, received);
                let reply_len = transport.process(address, &mut buf);

                reply.clear();
                if reply_len > 0 {
                    // reply_len never exceeds the frame capacity
                    let _ = reply.extend_from_slice(&frame[..reply_len]);
                }
            }
            SlaveCommandKind::Read => {
                if let Err(e) = i2c.respond_to_read(&reply).await {
                    warn!("Bus read failed: {:?}", target_error(e));
                }
                reply.clear();
            }
        }
    }
}
