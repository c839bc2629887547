//! Hash algorithm marker trait

/// Compile-time description of a hash algorithm
///
/// Implemented by uninhabited marker types so algorithm parameters can be
/// named in generic code without constructing a hasher.
pub trait HashAlgorithm {
    /// Digest size in bytes
    const OUTPUT_SIZE: usize;

    /// Input block size in bytes
    const BLOCK_SIZE: usize;

    /// Canonical algorithm name
    const ALGORITHM_ID: &'static str;
}
