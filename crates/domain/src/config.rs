pub mod aggregates;
pub mod value_objects;

pub use aggregates::RunConfig;
pub use value_objects::{OutputLayout, StatsSelection};
