//! Public API traits and types for the sha1sum library
//!
//! This crate provides the public API surface shared by the sha1sum crates:
//! the error taxonomy, the `Result` alias, and the algorithm marker traits.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::HashAlgorithm;
