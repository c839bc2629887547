//! Type-safe digest implementation with size guarantees
//!
//! Provides the `Digest` type, representing the output of a
//! cryptographic hash function with compile-time size guarantees.

use core::array::TryFromSliceError;
use core::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

/// A cryptographic digest with a fixed size
#[derive(Clone, Copy, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> Digest<N> {
    /// Create a new digest from an existing array
    pub const fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create from a slice, if it has exactly `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Digest::from_slice", slice.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(slice);
        Ok(Self { data })
    }

    /// Create from a hexadecimal string of exactly `2 * N` digits
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;

        Self::from_slice(&bytes)
    }

    /// Get the length of the digest in bytes
    pub const fn len(&self) -> usize {
        N
    }

    /// Check if the digest is empty
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the digest bytes, most significant first
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }

    /// Consume the digest and return its bytes
    pub fn into_bytes(self) -> [u8; N] {
        self.data
    }

    /// Convert to a lowercase hexadecimal string of exactly `2 * N` characters
    pub fn to_hex(&self) -> String {
        hex::encode(self.data)
    }
}

impl<const N: usize> From<[u8; N]> for Digest<N> {
    fn from(data: [u8; N]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> TryFrom<&[u8]> for Digest<N> {
    type Error = TryFromSliceError;

    fn try_from(slice: &[u8]) -> core::result::Result<Self, Self::Error> {
        <[u8; N]>::try_from(slice).map(Self::new)
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> ConstantTimeEq for Digest<N> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.data[..].ct_eq(&other.data[..])
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({})", N, self.to_hex())
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> fmt::LowerHex for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        f.write_str(&self.to_hex())
    }
}
