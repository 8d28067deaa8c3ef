pub mod classified_line;
pub mod partition;

pub use classified_line::ClassifiedLine;
pub use partition::Partition;
