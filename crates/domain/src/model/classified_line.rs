// crates/domain/src/model/classified_line.rs
use line_filter_shared_kernel::Category;

use crate::classify::classify;

/// One input line together with the category it was assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine {
    pub text: String,
    pub category: Category,
}

impl ClassifiedLine {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let category = classify(&text);
        Self { text, category }
    }
}
