// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit status for command line misuse, such as a missing input list.
pub const USAGE_EXIT: u8 = 2;
