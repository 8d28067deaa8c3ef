//! # Domain
//!
//! Pure logic of the line filter: how a line is classified, how classified
//! lines are grouped, what statistics are derived from the groups, and the
//! resolved run configuration. Nothing here touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classify;
pub mod config;
pub mod model;

pub use analytics::{CategoryStatistics, NumericSummary, StatisticsReport, Summary, TextSummary};
pub use classify::classify;
pub use config::{OutputLayout, RunConfig, StatsSelection};
pub use model::{ClassifiedLine, Partition};
