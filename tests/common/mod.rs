// tests/common/mod.rs
//! Shared helpers for the binary-level tests.

pub mod temp;

#[allow(unused_imports)]
pub use temp::*;
