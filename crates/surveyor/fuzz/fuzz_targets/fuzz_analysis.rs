//! Fuzz target for the analysis engine.
//!
//! Builds ragged datasets from arbitrary cells, including non-finite numbers
//! and whitespace-only text, and checks the report's invariants.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use surveyor::{Dataset, Record, Surveyor, Value};

#[derive(Debug, Arbitrary)]
enum Cell {
    Null,
    Number(f64),
    Text(String),
}

#[derive(Debug, Arbitrary)]
struct Input {
    rows: Vec<Vec<(u8, Cell)>>,
}

fuzz_target!(|input: Input| {
    let records: Vec<Record> = input
        .rows
        .into_iter()
        .take(200)
        .map(|row| {
            row.into_iter()
                .map(|(column, cell)| {
                    let value = match cell {
                        Cell::Null => Value::Null,
                        Cell::Number(n) => Value::Number(n),
                        Cell::Text(t) => Value::Text(t),
                    };
                    (format!("q{}", column % 8), value)
                })
                .collect()
        })
        .collect();
    let dataset = Dataset::new(records);

    let result = Surveyor::new().analyze(&dataset);
    if let Some(report) = result.report() {
        let completeness = report.data_quality.completeness_rate;
        assert!((0.0..=100.0).contains(&completeness));
        for pair in report.correlation_analysis.top_pairs() {
            assert!((-1.0..=1.0).contains(&pair.correlation));
        }
    }
});
