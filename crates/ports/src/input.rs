// crates/ports/src/input.rs
use std::path::Path;

use line_filter_shared_kernel::InfraResult;

/// Port for reading every line of an input file.
pub trait LineSource: Send + Sync {
    /// Lines of `path` without their terminators. Either the whole file is
    /// returned or an error, never a partial read.
    fn read_lines(&self, path: &Path) -> InfraResult<Vec<String>>;
}
