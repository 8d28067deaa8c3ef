pub mod statistics;

pub use statistics::{CategoryStatistics, NumericSummary, StatisticsReport, Summary, TextSummary};
