// crates/shared-kernel/src/value_objects/length.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of a line measured in Unicode scalar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineLength(usize);

impl LineLength {
    #[inline]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    pub fn of(line: &str) -> Self {
        Self(line.chars().count())
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for LineLength {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl PartialEq<usize> for LineLength {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<LineLength> for usize {
    fn eq(&self, other: &LineLength) -> bool {
        *self == other.0
    }
}

impl fmt::Display for LineLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
