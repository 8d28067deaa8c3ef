use std::path::PathBuf;

use line_filter_shared_kernel::{DomainError, DomainResult, WriteMode};
use serde::Serialize;

use crate::config::{OutputLayout, StatsSelection};

/// Domain representation of resolved command line options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunConfig {
    /// Input files, processed in this order.
    pub inputs: Vec<PathBuf>,
    pub layout: OutputLayout,
    pub write_mode: WriteMode,
    pub stats: StatsSelection,
}

impl RunConfig {
    /// # Errors
    /// Fails when no input file was given.
    pub fn validate(&self) -> DomainResult<()> {
        if self.inputs.is_empty() {
            return Err(DomainError::InvalidConfiguration {
                reason: "No input files given".to_string(),
            });
        }
        Ok(())
    }
}
