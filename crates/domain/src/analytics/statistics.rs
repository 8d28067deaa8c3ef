// crates/domain/src/analytics/statistics.rs
use line_filter_shared_kernel::{Category, DomainError, DomainResult, LineLength};
use serde::Serialize;

use crate::model::Partition;

/// Min/max/sum/average over the numeric value of each line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericSummary {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub average: f64,
}

/// Shortest and longest line length of the string category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextSummary {
    pub shortest: LineLength,
    pub longest: LineLength,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Summary {
    Numeric(NumericSummary),
    Text(TextSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryStatistics {
    pub category: Category,
    pub count: usize,
    pub summary: Summary,
}

/// Statistics for every non-empty category, in fixed category order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub categories: Vec<CategoryStatistics>,
}

impl StatisticsReport {
    /// Compute statistics for each non-empty group of `partition`.
    ///
    /// # Errors
    /// Returns [`DomainError::NumericInvariant`] when a line stored in a numeric
    /// group does not parse as `f64`, which means classification and statistics
    /// disagree about what a number is.
    pub fn compute(partition: &Partition) -> DomainResult<Self> {
        let categories = partition
            .non_empty()
            .map(|(category, lines)| CategoryStatistics::compute(category, lines))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { categories })
    }

    pub fn get(&self, category: Category) -> Option<&CategoryStatistics> {
        self.categories.iter().find(|s| s.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl CategoryStatistics {
    fn compute(category: Category, lines: &[String]) -> DomainResult<Self> {
        let summary = if category.is_numeric() {
            Summary::Numeric(numeric_summary(category, lines)?)
        } else {
            Summary::Text(text_summary(lines))
        };
        Ok(Self { category, count: lines.len(), summary })
    }
}

fn numeric_summary(category: Category, lines: &[String]) -> DomainResult<NumericSummary> {
    let values = lines
        .iter()
        .map(|line| {
            line.parse::<f64>().map_err(|e| DomainError::NumericInvariant {
                category,
                line: line.clone(),
                details: e.to_string(),
            })
        })
        .collect::<DomainResult<Vec<f64>>>()?;

    let (min, max, sum) = values.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
    );
    #[allow(clippy::cast_precision_loss)]
    let average = sum / values.len() as f64;

    Ok(NumericSummary { min, max, sum, average })
}

fn text_summary(lines: &[String]) -> TextSummary {
    let (shortest, longest) = lines
        .iter()
        .map(|line| LineLength::of(line))
        .fold((LineLength::new(usize::MAX), LineLength::new(0)), |(lo, hi), len| {
            (lo.min(len), hi.max(len))
        });
    TextSummary { shortest, longest }
}
