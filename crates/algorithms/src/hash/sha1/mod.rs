//! SHA-1 hash function
//!
//! This module implements the SHA-1 hash function as specified in FIPS 180-4.
//! Note: SHA-1 is considered cryptographically broken and should only be used
//! for compatibility with existing systems.
//!
//! A message flows through four stages. [`padding`] appends the `1` bit, the
//! zero fill and the 64-bit length, and yields 512-bit chunks. [`schedule`]
//! expands each chunk into 80 words. [`compress`] runs the 80 rounds and adds
//! the result into the running [`HashState`]. Once the last chunk has been
//! folded in, [`HashState::finalize`] emits the 160-bit digest.

use crate::error::Result;
use crate::hash::HashFunction;
use crate::types::Digest;
use sha1sum_api::HashAlgorithm;
use tracing::trace;
use zeroize::Zeroize;

pub mod compress;
pub mod padding;
pub mod schedule;

pub use compress::HashState;
pub use padding::{chunk_count, chunks, Block, Chunks};
pub use schedule::Schedule;

/// Size of one chunk in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;
/// Size of the digest in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Initial hash values for SHA-1
pub const H0: [u32; 5] = [
    0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0,
];

/// Round constants, one per group of 20 rounds
pub const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// A 160-bit SHA-1 digest
pub type Sha1Digest = Digest<SHA1_OUTPUT_SIZE>;

/// Rotate a 32-bit word left by `n` bits
#[inline(always)]
pub const fn rotl(x: u32, n: u32) -> u32 {
    x.rotate_left(n)
}

/// SHA-1 algorithm marker type
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// SHA-1 hash function
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha1;

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Sha1Digest;

    fn digest(data: &[u8]) -> Result<Self::Output> {
        compute_digest(data)
    }
}

/// Compute the SHA-1 digest of `message`
///
/// Fails with [`Error::LengthOverflow`](crate::Error::LengthOverflow) when the
/// message bit-length does not fit in 64 bits.
pub fn compute_digest(message: &[u8]) -> Result<Sha1Digest> {
    let chunks = padding::chunks(message)?;
    trace!(
        message_len = message.len(),
        chunks = chunks.len(),
        "SHA-1 message padded"
    );

    let mut state = HashState::initial();
    for block in chunks {
        let mut schedule = Schedule::expand(&block);
        state.compress(&schedule);
        schedule.zeroize();
    }

    let digest = state.finalize();
    trace!(%digest, "SHA-1 digest computed");
    Ok(digest)
}
