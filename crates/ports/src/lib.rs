//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`input`]: reading the lines of an input file
//! - [`output`]: persisting the lines of one category
//!
//! These ports allow the use cases to stay independent of the filesystem.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod input;
pub mod output;

pub use input::LineSource;
pub use output::CategorySink;
