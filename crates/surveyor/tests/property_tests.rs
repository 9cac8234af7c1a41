//! Property-based tests for the analysis engine.
//!
//! These tests use proptest to generate random survey columns and verify
//! that the analyzers keep their invariants for any input.
//!
//! # Running Property Tests
//!
//! ```bash
//! # Run all property tests
//! cargo test -p surveyor --test property_tests
//!
//! # Run with more cases (slower but more thorough)
//! PROPTEST_CASES=10000 cargo test -p surveyor --test property_tests
//! ```

use proptest::prelude::*;

use surveyor::analysis::{CategoricalAnalyzer, CorrelationAnalyzer, QualityAssessor};
use surveyor::inference::TypeClassifier;
use surveyor::{ColumnType, Dataset, Record, Surveyor, Value};

// =============================================================================
// Test Strategies
// =============================================================================

/// Any cell a survey export can contain.
fn any_cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(Value::from("")),
        (-1000.0f64..1000.0).prop_map(Value::from),
        (1i64..=10).prop_map(|n| Value::from(n.to_string())),
        "[A-Za-z ]{1,80}".prop_map(Value::from),
    ]
}

/// Short category labels.
fn label() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::from("Yes")),
        Just(Value::from("No")),
        Just(Value::from("Maybe")),
        "[a-z]{1,6}".prop_map(Value::from),
    ]
}

/// A rectangular dataset of arbitrary cells with columns `c0..cN`.
fn dataset() -> impl Strategy<Value = Dataset> {
    (1usize..6).prop_flat_map(|columns| {
        prop::collection::vec(prop::collection::vec(any_cell(), columns), 1..30).prop_map(
            move |rows| {
                let headers: Vec<String> = (0..columns).map(|i| format!("c{}", i)).collect();
                Dataset::from_rows(&headers, rows)
            },
        )
    })
}

/// A dataset of numeric-only columns.
fn numeric_dataset() -> impl Strategy<Value = (Dataset, Vec<String>)> {
    (2usize..5).prop_flat_map(|columns| {
        prop::collection::vec(prop::collection::vec(-100.0f64..100.0, columns), 2..25).prop_map(
            move |rows| {
                let headers: Vec<String> = (0..columns).map(|i| format!("n{}", i)).collect();
                let rows = rows
                    .into_iter()
                    .map(|row| row.into_iter().map(Value::from).collect())
                    .collect();
                (Dataset::from_rows(&headers, rows), headers)
            },
        )
    })
}

// =============================================================================
// Classifier Properties
// =============================================================================

proptest! {
    #[test]
    fn classifier_never_panics(values in prop::collection::vec(any_cell(), 0..50)) {
        let refs: Vec<&Value> = values.iter().filter(|v| !v.is_missing()).collect();
        let _ = TypeClassifier::default().classify(&refs);
    }

    #[test]
    fn high_numeric_ratio_is_numeric(
        numbers in prop::collection::vec(-1e6f64..1e6, 4..40),
        labels in prop::collection::vec("[a-z]{1,10}", 0..10),
    ) {
        let mut values: Vec<Value> = numbers.into_iter().map(Value::from).collect();
        values.extend(labels.into_iter().map(Value::from));
        let refs: Vec<&Value> = values.iter().collect();

        let classification = TypeClassifier::default().classify(&refs);
        let ratio = classification.numeric_count as f64 / refs.len() as f64;
        prop_assert_eq!(classification.numeric_count + classification.failed_count, refs.len());
        if ratio >= 0.8 {
            prop_assert_eq!(classification.column_type, ColumnType::Numeric);
        } else {
            prop_assert_ne!(classification.column_type, ColumnType::Numeric);
        }
    }
}

// =============================================================================
// Categorical Properties
// =============================================================================

proptest! {
    #[test]
    fn percentages_sum_to_hundred(values in prop::collection::vec(label(), 1..60)) {
        let refs: Vec<&Value> = values.iter().collect();
        let stats = CategoricalAnalyzer::analyze(&refs);
        let stats = stats.as_categorical().unwrap();

        let total: f64 = stats.distribution.values().map(|c| c.percentage.value()).sum();
        prop_assert!((total - 100.0).abs() <= 0.1, "sum was {}", total);

        let counts: Vec<usize> = stats.distribution.values().map(|c| c.count).collect();
        prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        prop_assert_eq!(counts.iter().sum::<usize>(), values.len());
    }
}

// =============================================================================
// Correlation Properties
// =============================================================================

proptest! {
    #[test]
    fn correlation_matrix_symmetric((data, headers) in numeric_dataset()) {
        let names: Vec<&str> = headers.iter().map(String::as_str).collect();
        let analysis = CorrelationAnalyzer::default().analyze(&data, &names);
        let matrix = analysis.matrix().unwrap();

        for a in &names {
            prop_assert_eq!(matrix[*a][*a], 1.0);
            for b in &names {
                let r = matrix[*a][*b];
                prop_assert_eq!(r, matrix[*b][*a]);
                prop_assert!((-1.0..=1.0).contains(&r));
            }
        }

        let top = analysis.top_pairs();
        prop_assert!(top.len() <= 5);
        prop_assert!(top.windows(2).all(|w| w[0].correlation.abs() >= w[1].correlation.abs()));
    }
}

// =============================================================================
// Quality and Whole-Report Properties
// =============================================================================

proptest! {
    #[test]
    fn completeness_within_bounds(data in dataset()) {
        let report = QualityAssessor::default().assess(&data);
        prop_assert!((0.0..=100.0).contains(&report.completeness_rate));
        prop_assert!(report.missing_values <= report.total_cells);
        prop_assert_eq!(
            report.recommendations.last().map(String::as_str),
            Some("Monitor data quality metrics regularly")
        );
    }

    #[test]
    fn fully_answered_is_complete(
        rows in prop::collection::vec(prop::collection::vec(1i64..100, 3), 1..20),
    ) {
        let headers = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Value::from).collect())
            .collect();
        let report = QualityAssessor::default().assess(&Dataset::from_rows(&headers, rows));
        prop_assert_eq!(report.completeness_rate, 100.0);
    }

    #[test]
    fn report_profiles_every_column(data in dataset()) {
        let result = Surveyor::new().analyze(&data);
        let report = result.report().unwrap();

        let profiled: Vec<&str> = report
            .basic_statistics
            .column_analysis
            .keys()
            .map(String::as_str)
            .collect();
        prop_assert_eq!(profiled, data.column_names());

        for profile in report.basic_statistics.column_analysis.values() {
            if profile.data_type == ColumnType::Unknown {
                prop_assert!(profile.statistics.is_none());
            }
        }
    }

    #[test]
    fn analysis_is_deterministic(data in dataset()) {
        let surveyor = Surveyor::new();
        prop_assert_eq!(surveyor.analyze(&data), surveyor.analyze(&data));
    }

    #[test]
    fn ragged_records_never_panic(
        rows in prop::collection::vec(prop::collection::vec(("[a-d]", any_cell()), 0..5), 1..10),
    ) {
        let records: Vec<Record> = rows
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect();
        let _ = Surveyor::new().analyze(&Dataset::new(records));
    }
}
