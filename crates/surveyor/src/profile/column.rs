//! Column profile definition and per-type statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::{ColumnType, Percent};

/// Statistics for numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStatistics {
    /// Values that coerced to numbers and were used.
    pub count: usize,
    /// Values dropped because they did not coerce.
    pub failed_coercions: usize,
    pub mean: f64,
    pub median: f64,
    /// Most frequent value, or the mean when there is no unique mode.
    pub mode: f64,
    /// Sample standard deviation; 0 with fewer than two values.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// `max - min`, saturating at `f64::MAX`.
    pub range: f64,
}

/// Count and share of one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub count: usize,
    pub percentage: Percent,
}

/// Statistics for categorical columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalStatistics {
    /// Number of distinct categories.
    pub categories: usize,
    /// Categories by descending count; ties keep first-seen order.
    pub distribution: IndexMap<String, CategoryCount>,
    /// Label and count of the most frequent category.
    pub most_common: Option<(String, usize)>,
}

/// Statistics for free-text columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Non-empty responses measured.
    pub responses: usize,
    /// Average length in characters.
    pub avg_length: f64,
    pub avg_word_count: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub total_words: usize,
}

/// Type-specific statistics attached to a [`ColumnProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnStatistics {
    Numeric(NumericStatistics),
    Categorical(CategoricalStatistics),
    Text(TextStatistics),
    /// The column's type was inferred but nothing in it could be analyzed.
    Unavailable { error: String },
}

impl ColumnStatistics {
    pub fn as_numeric(&self) -> Option<&NumericStatistics> {
        match self {
            ColumnStatistics::Numeric(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&CategoricalStatistics> {
        match self {
            ColumnStatistics::Categorical(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextStatistics> {
        match self {
            ColumnStatistics::Text(stats) => Some(stats),
            _ => None,
        }
    }

    /// The error marker, if analysis of this column failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            ColumnStatistics::Unavailable { error } => Some(error),
            _ => None,
        }
    }
}

/// Aggregated type and statistics for one survey question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnProfile {
    /// Column name.
    pub name: String,
    /// Inferred type.
    pub data_type: ColumnType,
    /// Number of answered (non-missing) values.
    pub total_values: usize,
    /// Number of distinct answered values, by textual form.
    pub unique_values: usize,
    /// Statistics for the inferred type; absent for unknown columns.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub statistics: Option<ColumnStatistics>,
}

impl ColumnProfile {
    /// Profile for a column with no answered values.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: ColumnType::Unknown,
            total_values: 0,
            unique_values: 0,
            statistics: None,
        }
    }

    pub fn numeric(&self) -> Option<&NumericStatistics> {
        self.statistics.as_ref().and_then(ColumnStatistics::as_numeric)
    }

    pub fn categorical(&self) -> Option<&CategoricalStatistics> {
        self.statistics.as_ref().and_then(ColumnStatistics::as_categorical)
    }

    pub fn text(&self) -> Option<&TextStatistics> {
        self.statistics.as_ref().and_then(ColumnStatistics::as_text)
    }
}
