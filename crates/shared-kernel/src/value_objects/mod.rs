// crates/shared-kernel/src/value_objects/mod.rs
pub mod category;
pub mod length;
pub mod write_mode;

pub use category::Category;
pub use length::LineLength;
pub use write_mode::WriteMode;
