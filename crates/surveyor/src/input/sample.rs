//! Deterministic demo survey data.
//!
//! The same `(rows, seed)` always produces the same dataset, which keeps
//! benchmarks and demos reproducible.

use fastrand::Rng;

use super::dataset::{Dataset, Value};

/// Column names of the generated survey, in order.
pub const COLUMNS: &[&str] = &[
    "respondent_id",
    "age",
    "department",
    "overall_satisfaction",
    "product_rating",
    "would_recommend",
    "comments",
];

const DEPARTMENTS: &[&str] = &["Sales", "Engineering", "Support", "Marketing", "HR"];
const RECOMMEND: &[&str] = &["Yes", "No", "Maybe"];
const COMMENTS: &[&str] = &[
    "The onboarding process was smooth and the support team answered every question quickly.",
    "Pricing feels high compared to alternatives, but the reliability has been worth it so far.",
    "I would like better reporting features and an easier way to export my data to spreadsheets.",
    "Several features were confusing at first; clearer documentation would help new users a lot.",
    "Excellent experience overall, I have already recommended the product to two of my colleagues.",
];

/// Share of optional answers left blank.
const MISSING_RATE: f64 = 0.05;

/// Generate a survey with `rows` responses.
pub fn generate(rows: usize, seed: u64) -> Dataset {
    let mut rng = Rng::with_seed(seed);
    let headers: Vec<String> = COLUMNS.iter().map(|c| c.to_string()).collect();

    let rows = (1..=rows)
        .map(|id| {
            let satisfaction = rng.i64(1..=10);
            // Product rating tracks overall satisfaction with some noise
            let rating = (satisfaction + rng.i64(-2..=2)).clamp(1, 10);
            let recommend = match satisfaction {
                8..=10 => "Yes",
                5..=7 => RECOMMEND[rng.usize(..RECOMMEND.len())],
                _ => "No",
            };
            let comment = if rng.bool() {
                Value::from(COMMENTS[rng.usize(..COMMENTS.len())])
            } else {
                Value::from("")
            };

            let age = Value::from(rng.i64(18..=70));
            let department = Value::from(DEPARTMENTS[rng.usize(..DEPARTMENTS.len())]);

            vec![
                Value::from(id as i64),
                maybe_missing(&mut rng, age),
                maybe_missing(&mut rng, department),
                maybe_missing(&mut rng, Value::from(satisfaction)),
                maybe_missing(&mut rng, Value::from(rating)),
                maybe_missing(&mut rng, Value::from(recommend)),
                comment,
            ]
        })
        .collect();

    Dataset::from_rows(&headers, rows)
}

fn maybe_missing(rng: &mut Rng, value: Value) -> Value {
    if rng.f64() < MISSING_RATE {
        Value::Null
    } else {
        value
    }
}
