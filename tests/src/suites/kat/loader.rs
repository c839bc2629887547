//! Loads known-answer vectors from JSON files.

use super::error::{Result, VectorError};
use super::model::TestSuite;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the JSON vector files
fn vectors_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
}

/// Load a suite by its path relative to the vectors directory
pub fn load_suite(relative: &str) -> Result<TestSuite> {
    let path = vectors_dir().join(relative);
    let json = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| VectorError::Parse { path, source })
}

/// The SHA-1 known-answer suite, parsed once per test binary
pub static SHA1_KNOWN_ANSWERS: Lazy<TestSuite> = Lazy::new(|| {
    load_suite("sha1/known_answers.json").expect("Failed to load SHA-1 known-answer vectors")
});
