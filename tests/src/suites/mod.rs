//! Test suites driven from data files

pub mod kat;
