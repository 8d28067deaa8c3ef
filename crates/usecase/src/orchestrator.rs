use std::path::PathBuf;

use line_filter_domain::{OutputLayout, Partition, RunConfig, StatisticsReport};
use line_filter_ports::{CategorySink, LineSource};
use line_filter_shared_kernel::{ErrorContext, InfrastructureError, Result, WriteMode};

use crate::dto::{RunOutcome, WrittenFile};

/// Read every input, split lines by category, write one file per non-empty
/// category and compute statistics when asked to.
pub struct SortLines<'a> {
    source: &'a dyn LineSource,
    sink: &'a dyn CategorySink,
}

impl<'a> SortLines<'a> {
    pub fn new(source: &'a dyn LineSource, sink: &'a dyn CategorySink) -> Self {
        Self { source, sink }
    }

    /// # Errors
    /// Read and write failures are collected in the outcome. Only an invalid
    /// configuration or a statistics invariant violation aborts the run.
    pub fn run(&self, config: &RunConfig) -> Result<RunOutcome> {
        config.validate()?;

        let (partition, read_failures) = self.gather(&config.inputs);
        let (written, write_failures) = self.write(&partition, &config.layout, config.write_mode);
        let report = if config.stats.any() {
            Some(StatisticsReport::compute(&partition).context("failed to compute statistics")?)
        } else {
            None
        };

        Ok(RunOutcome { partition, written, read_failures, write_failures, report })
    }

    fn gather(&self, inputs: &[PathBuf]) -> (Partition, Vec<InfrastructureError>) {
        let mut partition = Partition::new();
        let mut failures = Vec::new();
        for path in inputs {
            match self.source.read_lines(path) {
                Ok(lines) => partition.merge(Partition::from_lines(lines)),
                Err(err) => {
                    log::warn!("{err}");
                    failures.push(err);
                }
            }
        }
        (partition, failures)
    }

    fn write(
        &self,
        partition: &Partition,
        layout: &OutputLayout,
        mode: WriteMode,
    ) -> (Vec<WrittenFile>, Vec<InfrastructureError>) {
        let mut written = Vec::new();
        let mut failures = Vec::new();
        for (category, lines) in partition.non_empty() {
            let path = layout.path_for(category);
            match self.sink.write_lines(&path, lines, mode) {
                Ok(()) => written.push(WrittenFile { category, path, lines: lines.len() }),
                Err(err) => {
                    log::warn!("{err}");
                    failures.push(err);
                }
            }
        }
        (written, failures)
    }
}
