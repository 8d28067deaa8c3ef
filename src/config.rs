// src/config.rs
use line_filter_domain::{OutputLayout, RunConfig, StatsSelection};
use line_filter_shared_kernel::WriteMode;

use crate::cli::Args;

impl From<Args> for RunConfig {
    fn from(args: Args) -> Self {
        Self {
            inputs: args.inputs,
            layout: OutputLayout::new(args.output, args.prefix),
            write_mode: WriteMode::from_append_flag(args.append),
            stats: StatsSelection { short: args.short_stats, full: args.full_stats },
        }
    }
}
