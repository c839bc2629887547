//! # sha1sum
//!
//! SHA-1 message digests in pure Rust, with every stage of the algorithm
//! available as a typed building block.
//!
//! ## Usage
//!
//! ```
//! use sha1sum::prelude::*;
//!
//! let digest = compute_digest(b"The quick brown fox jumps over the lazy dog").unwrap();
//! assert_eq!(digest.to_hex(), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
//! ```
//!
//! ## Features
//!
//! - `cli` (default): builds the `sha1sum` command-line binary
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`sha1sum-api`]: Error types and algorithm marker traits
//! - [`sha1sum-algorithms`]: Padding, message schedule, compression and digest assembly

#![forbid(unsafe_code)]

pub use sha1sum_algorithms as algorithms;
pub use sha1sum_api as api;

pub use sha1sum_algorithms::{compute_digest, Digest, Sha1, Sha1Digest};
pub use sha1sum_api::{Error, Result};

/// Common imports for sha1sum users
pub mod prelude {
    pub use sha1sum_algorithms::hash::sha1::{chunks, rotl, HashState, Schedule};
    pub use sha1sum_algorithms::{compute_digest, Digest, HashFunction, Sha1, Sha1Digest};
    pub use sha1sum_api::{Error, HashAlgorithm, Result};
}

/// Hash the bytes of a UTF-8 string
///
/// Convenience for callers holding text rather than raw bytes.
pub fn digest_str(text: &str) -> Result<Sha1Digest> {
    compute_digest(text.as_bytes())
}
