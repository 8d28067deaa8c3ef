// crates/ports/src/output.rs
use std::path::Path;

use line_filter_shared_kernel::{InfraResult, WriteMode};

/// Port for persisting the lines of a single category.
pub trait CategorySink: Send + Sync {
    /// Write each of `lines` followed by a line terminator to `target`.
    fn write_lines(&self, target: &Path, lines: &[String], mode: WriteMode) -> InfraResult<()>;
}
