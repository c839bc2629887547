//! Re-export the public surface so callers can do
//! `use sha1sum_tests::suites::kat::*;`.

pub mod loader;
pub mod model;

pub use error::*;
pub use loader::*;
pub use model::*;
pub use runner::*;
