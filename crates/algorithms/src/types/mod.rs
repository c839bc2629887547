//! Type system for digest primitives

pub mod digest;

pub use digest::Digest;
