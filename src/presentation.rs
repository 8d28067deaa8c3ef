// src/presentation.rs
use std::io::{self, Write};

use line_filter_domain::{CategoryStatistics, StatisticsReport, StatsSelection, Summary};
use line_filter_shared_kernel::InfrastructureError;

/// Print one line per failed file, naming the file and the cause.
pub fn print_failures<'a, W, I>(out: &mut W, failures: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a InfrastructureError>,
{
    for err in failures {
        writeln!(out, "{err}")?;
    }
    Ok(())
}

/// Render the requested statistics blocks. Nothing is written when neither
/// block was selected.
pub fn print_report<W: Write>(
    out: &mut W,
    report: &StatisticsReport,
    selection: StatsSelection,
) -> io::Result<()> {
    for stats in &report.categories {
        if selection.short {
            print_short(out, stats)?;
        }
        if selection.full {
            print_full(out, stats)?;
        }
    }
    Ok(())
}

fn print_short<W: Write>(out: &mut W, stats: &CategoryStatistics) -> io::Result<()> {
    writeln!(out, "Statistics for {}:", stats.category)?;
    writeln!(out, "  Count: {}", stats.count)
}

fn print_full<W: Write>(out: &mut W, stats: &CategoryStatistics) -> io::Result<()> {
    writeln!(out, "Full statistics for {}:", stats.category)?;
    writeln!(out, "  Count: {}", stats.count)?;
    match stats.summary {
        Summary::Numeric(n) => {
            writeln!(out, "  Min: {}", format_number(n.min))?;
            writeln!(out, "  Max: {}", format_number(n.max))?;
            writeln!(out, "  Sum: {}", format_number(n.sum))?;
            writeln!(out, "  Average: {}", format_number(n.average))
        }
        Summary::Text(t) => {
            writeln!(out, "  Shortest line length: {}", t.shortest)?;
            writeln!(out, "  Longest line length: {}", t.longest)
        }
    }
}

/// Whole numbers keep one decimal (`6.0`); everything else uses the shortest
/// decimal form that round-trips.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
