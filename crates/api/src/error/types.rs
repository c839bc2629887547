//! Error type definitions for digest operations

use thiserror::Error;

/// Primary error type for digest operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The message bit-length does not fit the 64-bit length field
    #[error("{context}: message of {byte_len} bytes exceeds the 2^64-bit length limit")]
    LengthOverflow {
        /// Operation that rejected the message
        context: &'static str,
        /// Length of the rejected message in bytes
        byte_len: usize,
    },

    /// Text could not be converted to a byte sequence
    #[error("{context}: cannot encode text as UTF-8 bytes: {message}")]
    Encoding {
        /// Where the text came from
        context: &'static str,
        /// Details about the offending input
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Operation that checked the length
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Name of the invalid parameter
        context: &'static str,
        /// Reason why the parameter is invalid
        message: String,
    },
}

/// Result type for digest operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an Encoding error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Error::Encoding {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Context string carried by every variant
    pub fn context(&self) -> &'static str {
        match self {
            Error::LengthOverflow { context, .. }
            | Error::Encoding { context, .. }
            | Error::InvalidLength { context, .. }
            | Error::InvalidParameter { context, .. } => context,
        }
    }
}
