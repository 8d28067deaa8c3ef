use std::path::PathBuf;

use line_filter_domain::{Partition, StatisticsReport};
use line_filter_shared_kernel::{Category, InfrastructureError};

/// A category file that was written successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub category: Category,
    pub path: PathBuf,
    pub lines: usize,
}

/// Everything a run produced, for the caller to present.
#[derive(Debug, Default)]
pub struct RunOutcome {
    pub partition: Partition,
    pub written: Vec<WrittenFile>,
    /// Input files that could not be read, in the order they were given.
    pub read_failures: Vec<InfrastructureError>,
    /// Category files that could not be written, in category order.
    pub write_failures: Vec<InfrastructureError>,
    /// Present only when some statistics were requested.
    pub report: Option<StatisticsReport>,
}

impl RunOutcome {
    pub fn failures(&self) -> impl Iterator<Item = &InfrastructureError> {
        self.read_failures.iter().chain(&self.write_failures)
    }

    pub fn has_failures(&self) -> bool {
        !self.read_failures.is_empty() || !self.write_failures.is_empty()
    }
}
