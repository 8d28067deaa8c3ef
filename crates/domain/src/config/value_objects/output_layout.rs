use std::path::PathBuf;

use line_filter_shared_kernel::Category;
use serde::Serialize;

/// Where category files go: `<directory>/<prefix><suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLayout {
    directory: PathBuf,
    prefix: String,
}

impl OutputLayout {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self { directory: directory.into(), prefix: prefix.into() }
    }

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.directory.join(format!("{}{}", self.prefix, category.file_suffix()))
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new(".", "")
    }
}
