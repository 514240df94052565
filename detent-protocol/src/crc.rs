//! CRC-8 used by every frame on the bus
//!
//! Polynomial 0x07 (x^8 + x^2 + x + 1), initial value 0, MSB first, no
//! final xor. This is the CRC-8/CCITT variant avr-libc ships as
//! `_crc8_ccitt_update`, which bus masters already implement.
//!
//! Because there is no final xor, appending the checksum of a sequence to
//! that sequence yields a sequence whose checksum is zero.

/// Generator polynomial
pub const POLYNOMIAL: u8 = 0x07;

/// Initial register value
pub const INIT: u8 = 0x00;

const TABLE: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Feed one byte into a running checksum
#[inline]
pub fn update(crc: u8, byte: u8) -> u8 {
    TABLE[(crc ^ byte) as usize]
}

/// Checksum a whole region
pub fn crc8(data: &[u8]) -> u8 {
    data.iter().fold(INIT, |crc, &byte| update(crc, byte))
}
