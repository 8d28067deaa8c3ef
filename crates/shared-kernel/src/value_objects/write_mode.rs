// crates/shared-kernel/src/value_objects/write_mode.rs
use serde::{Deserialize, Serialize};

/// How an output file is opened when it already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Replace previous contents.
    #[default]
    Truncate,
    /// Keep previous contents and add new lines after them.
    Append,
}

impl WriteMode {
    pub const fn from_append_flag(append: bool) -> Self {
        if append { Self::Append } else { Self::Truncate }
    }

    pub const fn is_append(self) -> bool {
        matches!(self, Self::Append)
    }
}
