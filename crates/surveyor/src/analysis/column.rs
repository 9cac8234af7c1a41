//! Per-column profiling: classify, then dispatch to the matching analyzer.

use std::collections::HashSet;

use tracing::debug;

use super::categorical::CategoricalAnalyzer;
use super::numeric::NumericAnalyzer;
use super::text::TextAnalyzer;
use crate::config::ClassifierConfig;
use crate::inference::TypeClassifier;
use crate::input::{Dataset, Value};
use crate::profile::{ColumnProfile, ColumnType};

/// Builds a [`ColumnProfile`] for one column.
#[derive(Debug, Clone, Default)]
pub struct ColumnAnalyzer {
    classifier: TypeClassifier,
}

impl ColumnAnalyzer {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            classifier: TypeClassifier::new(config),
        }
    }

    /// Profile a column of a dataset by name.
    pub fn analyze_column(&self, dataset: &Dataset, name: &str) -> ColumnProfile {
        let values: Vec<&Value> = dataset.column_values(name).collect();
        self.analyze_values(name, &values)
    }

    /// Profile a column from its answered values.
    pub fn analyze_values(&self, name: &str, values: &[&Value]) -> ColumnProfile {
        let classification = self.classifier.classify(values);

        let statistics = match classification.column_type {
            ColumnType::Numeric => NumericAnalyzer::analyze(values),
            ColumnType::Categorical => CategoricalAnalyzer::analyze(values),
            ColumnType::Text => TextAnalyzer::analyze(values),
            ColumnType::Unknown => {
                debug!(column = name, "no answered values; column type unknown");
                return ColumnProfile::unknown(name);
            }
        };

        let unique_values = values
            .iter()
            .map(|v| v.to_text())
            .collect::<HashSet<_>>()
            .len();

        debug!(
            column = name,
            data_type = %classification.column_type,
            values = classification.total(),
            numeric_ratio = classification.numeric_ratio,
            failed_coercions = classification.failed_count,
            "classified column"
        );

        ColumnProfile {
            name: name.to_string(),
            data_type: classification.column_type,
            total_values: values.len(),
            unique_values,
            statistics: Some(statistics),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Record;

    fn dataset(column: &str, values: Vec<Value>) -> Dataset {
        values
            .into_iter()
            .map(|v| {
                let mut r = Record::new();
                r.insert(column.to_string(), v);
                r
            })
            .collect()
    }

    #[test]
    fn test_numeric_column_profile() {
        let data = dataset("age", vec![Value::from(31), Value::from(45), Value::Null]);
        let profile = ColumnAnalyzer::default().analyze_column(&data, "age");

        assert_eq!(profile.data_type, ColumnType::Numeric);
        assert_eq!(profile.total_values, 2);
        assert_eq!(profile.unique_values, 2);
        assert_eq!(profile.numeric().unwrap().mean, 38.0);
        assert!(profile.categorical().is_none());
    }

    #[test]
    fn test_all_empty_column_is_unknown() {
        let data = dataset("comments", vec![Value::from(""); 10]);
        let profile = ColumnAnalyzer::default().analyze_column(&data, "comments");

        assert_eq!(profile, ColumnProfile::unknown("comments"));
        assert_eq!(profile.total_values, 0);
        assert!(profile.statistics.is_none());
    }

    #[test]
    fn test_categorical_dispatch() {
        let data = dataset(
            "department",
            vec![Value::from("Sales"), Value::from("IT"), Value::from("Sales")],
        );
        let profile = ColumnAnalyzer::default().analyze_column(&data, "department");

        assert_eq!(profile.data_type, ColumnType::Categorical);
        assert_eq!(profile.unique_values, 2);
        assert_eq!(
            profile.categorical().unwrap().most_common,
            Some(("Sales".to_string(), 2))
        );
    }
}
