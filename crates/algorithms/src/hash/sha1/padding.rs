//! Message padding and chunking
//!
//! The padded stream is the message, a single `1` bit, the fewest `0` bits
//! that leave room for the length field, and the original bit-length as a
//! 64-bit big-endian integer. Its length is always a positive multiple of
//! 512 bits. Only the last one or two chunks differ from the message bytes,
//! so those are built up front and the rest are copied straight out of the
//! message.

use super::SHA1_BLOCK_SIZE;
use crate::error::{validate, Result};
use byteorder::{BigEndian, ByteOrder};
use core::iter::FusedIterator;
use core::slice::ChunksExact;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of the trailing bit-length field in bytes
const LENGTH_FIELD_SIZE: usize = 8;

/// First padding byte: the appended `1` bit followed by seven `0` bits
const PAD_MARKER: u8 = 0x80;

/// One 512-bit chunk of the padded stream
pub type Block = [u8; SHA1_BLOCK_SIZE];

/// Number of padded chunks for a message of `byte_len` bytes
pub const fn chunk_count(byte_len: usize) -> usize {
    byte_len / SHA1_BLOCK_SIZE + tail_blocks(byte_len % SHA1_BLOCK_SIZE)
}

/// Chunks needed for the final partial block, the marker and the length field
const fn tail_blocks(remainder: usize) -> usize {
    if remainder + 1 + LENGTH_FIELD_SIZE > SHA1_BLOCK_SIZE {
        2
    } else {
        1
    }
}

/// Split `message` into the ordered chunks of its padded stream
///
/// Fails with [`Error::LengthOverflow`](crate::Error::LengthOverflow) when the
/// message bit-length does not fit in the 64-bit length field.
pub fn chunks(message: &[u8]) -> Result<Chunks<'_>> {
    let bit_len = validate::bit_length("SHA-1 padding", message.len())?;

    let body = message.chunks_exact(SHA1_BLOCK_SIZE);
    let remainder = body.remainder();
    let tail_blocks = tail_blocks(remainder.len());
    let end = tail_blocks * SHA1_BLOCK_SIZE;

    let mut tail = [0u8; 2 * SHA1_BLOCK_SIZE];
    tail[..remainder.len()].copy_from_slice(remainder);
    tail[remainder.len()] = PAD_MARKER;
    BigEndian::write_u64(&mut tail[end - LENGTH_FIELD_SIZE..end], bit_len);

    Ok(Chunks {
        body,
        tail,
        tail_blocks,
        tail_pos: 0,
    })
}

/// Iterator over the 512-bit chunks of a padded message
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
    /// Whole chunks taken directly from the message
    body: ChunksExact<'a, u8>,
    /// Final partial block plus padding, one or two chunks long
    tail: [u8; 2 * SHA1_BLOCK_SIZE],
    tail_blocks: usize,
    tail_pos: usize,
}

impl Iterator for Chunks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        let src = match self.body.next() {
            Some(chunk) => chunk,
            None if self.tail_pos < self.tail_blocks => {
                let start = self.tail_pos * SHA1_BLOCK_SIZE;
                self.tail_pos += 1;
                &self.tail[start..start + SHA1_BLOCK_SIZE]
            }
            None => return None,
        };

        let mut block = [0u8; SHA1_BLOCK_SIZE];
        block.copy_from_slice(src);
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.body.len() + (self.tail_blocks - self.tail_pos);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Chunks<'_> {}

impl FusedIterator for Chunks<'_> {}

impl Zeroize for Chunks<'_> {
    /// Clear the buffered tail and exhaust the iterator
    fn zeroize(&mut self) {
        self.tail.zeroize();
        self.body = <&[u8]>::default().chunks_exact(SHA1_BLOCK_SIZE);
        self.tail_pos = self.tail_blocks;
    }
}

// The tail holds a copy of the last partial block of the message
impl Drop for Chunks<'_> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Chunks<'_> {}
