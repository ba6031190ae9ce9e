//! Variable-length unsigned integers, used as the blob's length header.
//!
//! Each byte carries 7 payload bits, least-significant group first. Bit 7
//! is set iff another group follows. Zero encodes as a single `0x00`.

use crate::error::{Error, Result};

const PAYLOAD_BITS: u32 = 7;
const PAYLOAD_MASK: u64 = (1 << PAYLOAD_BITS) - 1;
const CONTINUATION: u8 = 1 << PAYLOAD_BITS;

/// Append the minimal VarInt encoding of `value` to `dest`.
pub fn write_varint(dest: &mut Vec<u8>, mut value: u64) {
    loop {
        let group = (value & PAYLOAD_MASK) as u8;
        value >>= PAYLOAD_BITS;
        if value == 0 {
            dest.push(group);
            return;
        }
        dest.push(group | CONTINUATION);
    }
}

/// Decode a VarInt from the front of `data`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
/// Returns `Error::MalformedVarInt` if `data` ends before a group without the
/// continuation bit, or if the value needs more than 64 bits.
pub fn read_varint(data: &[u8]) -> Result<(u64, usize)> {
    let mut value = 0u64;
    for (i, &byte) in data.iter().enumerate() {
        let shift = i as u32 * PAYLOAD_BITS;
        let payload = (byte as u64) & PAYLOAD_MASK;
        if shift >= u64::BITS || (payload << shift) >> shift != payload {
            return Err(Error::MalformedVarInt);
        }
        value |= payload << shift;
        if byte & CONTINUATION == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(Error::MalformedVarInt)
}

/// Number of bytes [`write_varint`] emits for `value`.
pub fn encoded_len(value: u64) -> usize {
    let significant = (u64::BITS - value.leading_zeros()).max(1);
    significant.div_ceil(PAYLOAD_BITS) as usize
}
