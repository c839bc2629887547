//! Validation utilities for digest primitives

use super::{Error, Result};

/// Bit-length of a `byte_len`-byte message, as carried in the padding length field
///
/// Fails with [`Error::LengthOverflow`] when the bit-length does not fit in 64 bits.
#[inline(always)]
pub fn bit_length(context: &'static str, byte_len: usize) -> Result<u64> {
    u64::try_from(byte_len)
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or(Error::LengthOverflow { context, byte_len })
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
