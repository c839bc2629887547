//! SHA-1 compression function

use super::schedule::{Schedule, SCHEDULE_LEN};
use super::{rotl, Sha1Digest, H0, K, SHA1_OUTPUT_SIZE};
use crate::types::Digest;
use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

/// Rounds per chunk
pub const ROUNDS: usize = SCHEDULE_LEN;

/// Rounds sharing one selection function and round constant
const ROUNDS_PER_STAGE: usize = 20;

/// The running SHA-1 state: five 32-bit registers, A through E
///
/// Starts at [`H0`] and is only ever changed by [`HashState::compress`],
/// once per chunk, in message order.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct HashState {
    h: [u32; 5],
}

impl HashState {
    /// The state before any chunk has been processed
    pub const fn initial() -> Self {
        Self { h: H0 }
    }

    /// Resume from explicit register values
    pub const fn from_words(h: [u32; 5]) -> Self {
        Self { h }
    }

    /// Current register values, A first
    pub const fn words(&self) -> [u32; 5] {
        self.h
    }

    /// Run the 80 rounds over one chunk's schedule and add the result into the state
    pub fn compress(&mut self, schedule: &Schedule) {
        let [mut a, mut b, mut c, mut d, mut e] = self.h;

        for i in 0..ROUNDS {
            let stage = i / ROUNDS_PER_STAGE;
            let temp = rotl(a, 5)
                .wrapping_add(select(stage, b, c, d))
                .wrapping_add(e)
                .wrapping_add(K[stage])
                .wrapping_add(schedule[i]);
            e = d;
            d = c;
            c = rotl(b, 30);
            b = a;
            a = temp;
        }

        for (h, v) in self.h.iter_mut().zip([a, b, c, d, e]) {
            *h = h.wrapping_add(v);
        }
    }

    /// Concatenate the registers, A in the most significant position
    pub fn finalize(mut self) -> Sha1Digest {
        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.h, &mut out);
        self.zeroize();
        Digest::new(out)
    }
}

impl Default for HashState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Selection function for a 20-round stage
#[inline(always)]
fn select(stage: usize, b: u32, c: u32, d: u32) -> u32 {
    match stage {
        // choose
        0 => (b & c) | (!b & d),
        // majority
        2 => (b & c) | (b & d) | (c & d),
        // parity, stages 1 and 3
        _ => b ^ c ^ d,
    }
}
