//! CRC-16/XMODEM checksum used to protect every encoding.
//!
//! Polynomial `0x1021`, initial value `0`, no reflection, no final xor.

use crc::{Crc, CRC_16_XMODEM};

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Computes the 16-bit checksum over `data`.
#[must_use]
pub fn crc16(data: &[u8]) -> u16 {
    CRC16.checksum(data)
}

/// True when `expected` is the checksum of `data`.
#[must_use]
pub fn validate(data: &[u8], expected: u16) -> bool {
    crc16(data) == expected
}
