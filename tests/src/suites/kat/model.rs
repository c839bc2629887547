//! Pure data model for known-answer test vectors.
//! No dependency on the rest of the framework.

use super::error::{Result, VectorError};
use serde::Deserialize;

/// A single message and its expected digest
#[derive(Debug, Deserialize)]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    /// Message given as UTF-8 text
    #[serde(default)]
    pub text: Option<String>,
    /// Message given as hex, for inputs that are not text
    #[serde(default)]
    pub msg: Option<String>,
    /// The message is `text`/`msg` repeated this many times
    #[serde(default = "default_repeat")]
    pub repeat: usize,
    /// Expected digest, lowercase hex
    pub md: String,
    /// Expected number of padded chunks, when the vector pins it
    #[serde(default)]
    pub chunks: Option<usize>,
}

fn default_repeat() -> usize {
    1
}

impl TestCase {
    /// Materialise the message bytes for this case
    pub fn message(&self) -> Result<Vec<u8>> {
        let unit = match (&self.text, &self.msg) {
            (Some(text), _) => text.as_bytes().to_vec(),
            (None, Some(msg)) => hex::decode(msg)?,
            (None, None) => return Err(VectorError::MissingMessage(self.test_id)),
        };
        Ok(unit.repeat(self.repeat))
    }
}

/// Cases that exercise the same property
#[derive(Debug, Deserialize)]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    pub description: String,
    pub tests: Vec<TestCase>,
}

/// A whole vector file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    pub algorithm: String,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}

impl TestSuite {
    /// Total number of cases across all groups
    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|g| g.tests.len()).sum()
    }
}
