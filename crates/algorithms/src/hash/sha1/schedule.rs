//! Message schedule expansion

use super::padding::Block;
use super::rotl;
use byteorder::{BigEndian, ByteOrder};
use core::ops::Index;
use zeroize::Zeroize;

/// Number of words in a message schedule
pub const SCHEDULE_LEN: usize = 80;

/// Words copied directly from the chunk
const CHUNK_WORDS: usize = 16;

/// The 80-word message schedule derived from one chunk
///
/// Words 0 to 15 are the chunk read as big-endian words; each later word is
/// `rotl(w[i-3] ^ w[i-8] ^ w[i-14] ^ w[i-16], 1)`.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Schedule {
    w: [u32; SCHEDULE_LEN],
}

impl Schedule {
    /// Expand one chunk into its message schedule
    pub fn expand(block: &Block) -> Self {
        let mut w = [0u32; SCHEDULE_LEN];
        BigEndian::read_u32_into(block, &mut w[..CHUNK_WORDS]);
        // Each word depends on earlier ones, so this must run in index order
        for i in CHUNK_WORDS..SCHEDULE_LEN {
            w[i] = rotl(w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16], 1);
        }
        Self { w }
    }

    /// All 80 schedule words
    pub fn words(&self) -> &[u32; SCHEDULE_LEN] {
        &self.w
    }
}

impl Index<usize> for Schedule {
    type Output = u32;

    fn index(&self, i: usize) -> &u32 {
        &self.w[i]
    }
}
