// src/app.rs
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::CommandFactory;
use line_filter_domain::RunConfig;
use line_filter_infra::{FsCategorySink, FsLineSource};
use line_filter_shared_kernel::{DomainError, PresentationError};
use line_filter_usecase::SortLines;

use crate::{USAGE_EXIT, cli::Args, presentation};

pub fn run(args: Args) -> Result<ExitCode> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let config = RunConfig::from(args);
    if let Err(DomainError::InvalidConfiguration { reason }) = config.validate() {
        print_usage_error(&mut out, &reason)?;
        return Ok(ExitCode::from(USAGE_EXIT));
    }
    log_json("resolved config", &config);

    let outcome = SortLines::new(&FsLineSource, &FsCategorySink)
        .run(&config)
        .context("failed to sort input lines")?;

    log::debug!("classified {} lines", outcome.partition.total());
    for file in &outcome.written {
        log::info!("{} {} lines -> {}", file.category, file.lines, file.path.display());
    }
    if outcome.has_failures() {
        presentation::print_failures(&mut out, outcome.failures())
            .map_err(PresentationError::Render)?;
    }

    if let Some(report) = &outcome.report {
        log_json("statistics", report);
        presentation::print_report(&mut out, report, config.stats)
            .map_err(PresentationError::Render)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn print_usage_error<W: Write>(out: &mut W, reason: &str) -> Result<()> {
    let usage = Args::command().render_usage();
    writeln!(out, "Error: {reason}")
        .and_then(|()| writeln!(out, "{usage}"))
        .map_err(PresentationError::Render)?;
    Ok(())
}

fn log_json<T: serde::Serialize>(label: &str, value: &T) {
    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(value) {
            Ok(json) => log::debug!("{label}: {json}"),
            Err(e) => log::debug!("{label}: <unserializable: {e}>"),
        }
    }
}
