// crates/domain/src/model/partition.rs
use line_filter_shared_kernel::Category;

use crate::model::ClassifiedLine;

/// Classified lines grouped per category, each group in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    integers: Vec<String>,
    floats: Vec<String>,
    strings: Vec<String>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and append every line of `lines`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut partition = Self::new();
        partition.extend_lines(lines);
        partition
    }

    pub fn push(&mut self, line: ClassifiedLine) {
        self.bucket_mut(line.category).push(line.text);
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.push(ClassifiedLine::new(line));
    }

    pub fn extend_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push_line(line);
        }
    }

    /// Append every group of `other` after the lines already held here.
    pub fn merge(&mut self, other: Self) {
        self.integers.extend(other.integers);
        self.floats.extend(other.floats);
        self.strings.extend(other.strings);
    }

    pub fn lines(&self, category: Category) -> &[String] {
        match category {
            Category::Integer => &self.integers,
            Category::Float => &self.floats,
            Category::String => &self.strings,
        }
    }

    pub fn total(&self) -> usize {
        self.integers.len() + self.floats.len() + self.strings.len()
    }

    /// Non-empty groups in fixed category order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.lines(category)))
            .filter(|(_, lines)| !lines.is_empty())
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Integer => &mut self.integers,
            Category::Float => &mut self.floats,
            Category::String => &mut self.strings,
        }
    }
}
