// crates/infra/src/filesystem.rs
use std::path::Path;

use line_filter_ports::{CategorySink, LineSource};
use line_filter_shared_kernel::{InfraResult, InfrastructureError, WriteMode};

use crate::persistence::{FileReader, FileWriter};

/// Reads input files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLineSource;

impl LineSource for FsLineSource {
    fn read_lines(&self, path: &Path) -> InfraResult<Vec<String>> {
        let lines = FileReader::read_lines(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        log::debug!("read {} lines from {}", lines.len(), path.display());
        Ok(lines)
    }
}

/// Writes category files to the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCategorySink;

impl CategorySink for FsCategorySink {
    fn write_lines(&self, target: &Path, lines: &[String], mode: WriteMode) -> InfraResult<()> {
        let wrap = |source| InfrastructureError::FileWrite { path: target.to_path_buf(), source };
        let mut writer = FileWriter::open(target, mode).map_err(wrap)?;
        FileWriter::write_lines(&mut writer, lines).map_err(wrap)?;
        log::debug!("wrote {} lines to {} ({mode:?})", lines.len(), target.display());
        Ok(())
    }
}
