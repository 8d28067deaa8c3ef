pub mod output_layout;
pub mod stats_selection;

pub use output_layout::OutputLayout;
pub use stats_selection::StatsSelection;
