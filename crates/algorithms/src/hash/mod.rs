//! Hash function implementations

use crate::error::Result;
use sha1sum_api::HashAlgorithm;

pub mod sha1;

// Re-exports
pub use sha1::{compute_digest, Sha1, Sha1Algorithm, Sha1Digest};

/// Trait for one-shot cryptographic hash functions
pub trait HashFunction {
    /// Compile-time parameters of the algorithm
    type Algorithm: HashAlgorithm;

    /// Digest type produced by the hash function
    type Output: AsRef<[u8]>;

    /// Hash `data` in a single call
    fn digest(data: &[u8]) -> Result<Self::Output>;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the hash function
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }
}
