//! Error handling for digest primitives

pub use sha1sum_api::error::{Error, Result};

// Include the validation submodule
pub mod validate;
