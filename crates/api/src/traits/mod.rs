//! Trait definitions shared across the sha1sum crates

pub mod hash;

pub use hash::HashAlgorithm;
