//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: read, classify, write and summarise a set of input files
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{RunOutcome, WrittenFile};
pub use orchestrator::SortLines;
