//! SHA-1 digest primitives
//!
//! This crate implements the SHA-1 message digest as a pipeline of small,
//! individually usable stages:
//!
//! - [`hash::sha1::padding`]: splits a message into padded 512-bit chunks
//! - [`hash::sha1::schedule`]: expands a chunk into the 80-word schedule
//! - [`hash::sha1::compress`]: runs the 80 rounds and updates the hash state
//! - [`hash::sha1::HashState::finalize`]: assembles the 160-bit [`Digest`]
//!
//! Most callers only need [`compute_digest`]:
//!
//! ```
//! let digest = sha1sum_algorithms::compute_digest(b"abc").unwrap();
//! assert_eq!(digest.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{compute_digest, HashFunction, Sha1, Sha1Algorithm, Sha1Digest};

// Type system
pub mod types;
pub use types::Digest;
