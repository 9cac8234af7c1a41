//! Per-question completion and per-respondent consistency.

use indexmap::IndexMap;

use super::round_to;
use crate::input::Dataset;
use crate::profile::{ColumnProfile, ResponseConsistency, ResponsePatterns};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponsePatternAnalyzer;

impl ResponsePatternAnalyzer {
    /// Summarize how completely each question and each response was answered.
    ///
    /// `columns` supplies numeric coercion failures from the column profiles.
    pub fn analyze(
        dataset: &Dataset,
        columns: &IndexMap<String, ColumnProfile>,
    ) -> ResponsePatterns {
        let names = dataset.column_names();
        let total = dataset.len();

        let completion_rate: IndexMap<String, f64> = names
            .iter()
            .map(|&name| {
                let answered = dataset.column_values(name).count();
                (name.to_string(), percentage(answered, total))
            })
            .collect();

        let mut complete_responses = 0;
        let mut empty_responses = 0;
        for record in dataset.records() {
            let answered = names
                .iter()
                .filter(|&&name| !Dataset::is_missing_cell(record.get(name)))
                .count();
            if answered == names.len() {
                complete_responses += 1;
            } else if answered == 0 {
                empty_responses += 1;
            }
        }

        let coercion_mismatches = columns
            .iter()
            .filter_map(|(name, profile)| {
                let failed = profile.numeric()?.failed_coercions;
                (failed > 0).then(|| (name.clone(), failed))
            })
            .collect();

        ResponsePatterns {
            completion_rate,
            response_consistency: ResponseConsistency {
                complete_responses,
                partial_responses: total - complete_responses - empty_responses,
                empty_responses,
                consistency_rate: percentage(complete_responses, total),
            },
            coercion_mismatches,
        }
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round_to(part as f64 / whole as f64 * 100.0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::ColumnAnalyzer;
    use crate::input::Value;

    fn dataset() -> Dataset {
        let headers = vec!["q1".to_string(), "q2".to_string(), "q3".to_string()];
        Dataset::from_rows(
            &headers,
            vec![
                vec![Value::from(1), Value::from("a"), Value::from(5)],
                vec![Value::from(2), Value::Null, Value::from(4)],
                vec![Value::Null, Value::from(""), Value::Null],
                vec![Value::from(3), Value::from("b"), Value::from("n/a")],
            ],
        )
    }

    fn profiles(dataset: &Dataset) -> IndexMap<String, ColumnProfile> {
        let analyzer = ColumnAnalyzer::default();
        dataset
            .column_names()
            .into_iter()
            .map(|name| (name.to_string(), analyzer.analyze_column(dataset, name)))
            .collect()
    }

    #[test]
    fn test_completion_rate_per_column() {
        let data = dataset();
        let patterns = ResponsePatternAnalyzer::analyze(&data, &profiles(&data));

        assert_eq!(patterns.completion_rate["q1"], 75.0);
        assert_eq!(patterns.completion_rate["q2"], 50.0);
        assert_eq!(patterns.completion_rate["q3"], 75.0);
    }

    #[test]
    fn test_response_consistency_buckets() {
        let data = dataset();
        let patterns = ResponsePatternAnalyzer::analyze(&data, &profiles(&data));
        let consistency = &patterns.response_consistency;

        assert_eq!(consistency.complete_responses, 2);
        assert_eq!(consistency.partial_responses, 1);
        assert_eq!(consistency.empty_responses, 1);
        assert_eq!(consistency.consistency_rate, 50.0);
    }

    #[test]
    fn test_no_mismatches_when_columns_are_clean() {
        let data = dataset();
        let patterns = ResponsePatternAnalyzer::analyze(&data, &profiles(&data));
        // q3 has 2 of 3 numeric answers, below the numeric threshold
        assert!(patterns.coercion_mismatches.is_empty());
    }

    #[test]
    fn test_mismatches_in_numeric_column() {
        let headers = vec!["age".to_string()];
        let data = Dataset::from_rows(
            &headers,
            ["31", "44", "twenty", "52", "38"]
                .into_iter()
                .map(|cell| vec![Value::from_cell(cell)])
                .collect(),
        );
        let patterns = ResponsePatternAnalyzer::analyze(&data, &profiles(&data));
        assert_eq!(patterns.coercion_mismatches["age"], 1);
    }

    #[test]
    fn test_empty_dataset() {
        let patterns = ResponsePatternAnalyzer::analyze(&Dataset::default(), &IndexMap::new());
        assert!(patterns.completion_rate.is_empty());
        assert_eq!(patterns.response_consistency.consistency_rate, 0.0);
    }
}
