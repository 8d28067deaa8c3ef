// crates/shared-kernel/src/value_objects/category.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification outcome for a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Integer,
    Float,
    String,
}

impl Category {
    /// Every category in report and write order.
    pub const ALL: [Self; 3] = [Self::Integer, Self::Float, Self::String];

    /// Default output file name, before the user prefix is applied.
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Integer => "integers.txt",
            Self::Float => "floats.txt",
            Self::String => "strings.txt",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Integer => "integers",
            Self::Float => "floats",
            Self::String => "strings",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Integer | Self::Float)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
