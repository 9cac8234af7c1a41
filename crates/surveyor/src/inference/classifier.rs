//! Column type inference from answered values.

use crate::config::ClassifierConfig;
use crate::input::Value;
use crate::profile::ColumnType;

/// Outcome of classifying one column, with the coercion tally behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub column_type: ColumnType,
    /// Values that coerced to a number.
    pub numeric_count: usize,
    /// Values that did not.
    pub failed_count: usize,
    /// `numeric_count / total`; 0 for an empty column.
    pub numeric_ratio: f64,
    /// Characters in non-numeric values divided by the total value count.
    pub avg_text_length: f64,
}

impl Classification {
    /// Total values classified.
    pub fn total(&self) -> usize {
        self.numeric_count + self.failed_count
    }
}

/// Infers a column's [`ColumnType`] from its answered values.
///
/// Rules, in order: numeric when the coercible share reaches
/// `numeric_threshold`; free text when non-numeric values average more than
/// `text_length_threshold` characters per value; categorical otherwise.
/// An empty column is unknown.
#[derive(Debug, Clone, Default)]
pub struct TypeClassifier {
    config: ClassifierConfig,
}

impl TypeClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a column. Callers pass answered values only.
    pub fn classify(&self, values: &[&Value]) -> Classification {
        let mut numeric_count = 0usize;
        let mut failed_count = 0usize;
        let mut failed_length = 0usize;

        for value in values {
            match value.as_number() {
                Some(_) => numeric_count += 1,
                None => {
                    failed_count += 1;
                    failed_length += value.to_text().chars().count();
                }
            }
        }

        let total = values.len();
        if total == 0 {
            return Classification {
                column_type: ColumnType::Unknown,
                numeric_count: 0,
                failed_count: 0,
                numeric_ratio: 0.0,
                avg_text_length: 0.0,
            };
        }

        let numeric_ratio = numeric_count as f64 / total as f64;
        let avg_text_length = failed_length as f64 / total as f64;

        let column_type = if numeric_ratio >= self.config.numeric_threshold {
            ColumnType::Numeric
        } else if avg_text_length > self.config.text_length_threshold {
            ColumnType::Text
        } else {
            ColumnType::Categorical
        };

        Classification {
            column_type,
            numeric_count,
            failed_count,
            numeric_ratio,
            avg_text_length,
        }
    }
}
