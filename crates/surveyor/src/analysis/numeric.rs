//! Descriptive statistics for numeric columns.

use super::moments::Moments;
use super::round_to;
use crate::input::Value;
use crate::profile::{ColumnStatistics, NumericStatistics};

/// Computes mean, median, mode, spread and extremes of a numeric column.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericAnalyzer;

impl NumericAnalyzer {
    /// Analyze answered values. Values that do not coerce are dropped and
    /// counted in `failed_coercions`.
    pub fn analyze(values: &[&Value]) -> ColumnStatistics {
        let mut numbers = Vec::with_capacity(values.len());
        let mut failed = 0usize;
        for value in values {
            match value.as_number() {
                Some(n) => numbers.push(n),
                None => failed += 1,
            }
        }

        if numbers.is_empty() {
            return ColumnStatistics::Unavailable {
                error: "No numeric values to analyze".to_string(),
            };
        }

        let moments: Moments = numbers.iter().copied().collect();
        numbers.sort_by(f64::total_cmp);

        let mean = moments.mean();
        let median = median_of_sorted(&numbers);
        let mode = unique_mode_of_sorted(&numbers).unwrap_or_else(|| round_to(mean, 2));

        ColumnStatistics::Numeric(NumericStatistics {
            count: numbers.len(),
            failed_coercions: failed,
            mean: round_to(mean, 2),
            median: round_to(median, 2),
            mode: round_to(mode, 2),
            std_dev: round_to(moments.sample_std(), 2),
            min: moments.min(),
            max: moments.max(),
            // Saturates when the spread exceeds f64::MAX
            range: (moments.max() - moments.min()).min(f64::MAX),
        })
    }
}

fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        sorted[n / 2 - 1] / 2.0 + sorted[n / 2] / 2.0
    }
}

/// The single most frequent value, or `None` when two or more values tie
/// for the highest count.
fn unique_mode_of_sorted(sorted: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, usize)> = None;
    let mut tied = false;

    for run in sorted.chunk_by(|a, b| a == b) {
        let len = run.len();
        match best {
            Some((_, best_len)) if len < best_len => {}
            Some((_, best_len)) if len == best_len => tied = true,
            _ => {
                best = Some((run[0], len));
                tied = false;
            }
        }
    }

    if tied { None } else { best.map(|(value, _)| value) }
}
