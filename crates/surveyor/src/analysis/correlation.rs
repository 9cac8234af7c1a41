//! Pairwise Pearson correlation across numeric columns.

use indexmap::IndexMap;
use tracing::debug;

use super::moments::CoMoments;
use super::round_to;
use crate::config::CorrelationConfig;
use crate::input::Dataset;
use crate::profile::{CorrelationAnalysis, CorrelationEntry};

/// Computes the correlation matrix and strongest pairs.
#[derive(Debug, Clone, Default)]
pub struct CorrelationAnalyzer {
    config: CorrelationConfig,
}

impl CorrelationAnalyzer {
    pub fn new(config: CorrelationConfig) -> Self {
        Self { config }
    }

    /// Correlate the given numeric columns.
    ///
    /// Each pair uses the records where both cells coerce to numbers.
    /// Coefficients that are undefined (fewer than two such records, or a
    /// constant column) are reported as 0.
    pub fn analyze(&self, dataset: &Dataset, numeric_columns: &[&str]) -> CorrelationAnalysis {
        if numeric_columns.len() < 2 {
            return CorrelationAnalysis::Insufficient {
                numeric_columns: numeric_columns.len(),
                message: "Need at least 2 numeric columns for correlation analysis".to_string(),
            };
        }

        let columns: Vec<Vec<Option<f64>>> = numeric_columns
            .iter()
            .map(|name| {
                dataset
                    .column_cells(name)
                    .map(|cell| cell.and_then(|v| v.as_number()))
                    .collect()
            })
            .collect();

        let n = numeric_columns.len();
        let mut coefficients = vec![vec![1.0; n]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                let r = pearson(&columns[i], &columns[j]);
                coefficients[i][j] = r;
                coefficients[j][i] = r;
            }
        }

        let matrix: IndexMap<String, IndexMap<String, f64>> = numeric_columns
            .iter()
            .enumerate()
            .map(|(i, row_name)| {
                let row = numeric_columns
                    .iter()
                    .enumerate()
                    .map(|(j, col_name)| (col_name.to_string(), coefficients[i][j]))
                    .collect();
                (row_name.to_string(), row)
            })
            .collect();

        let mut pairs: Vec<CorrelationEntry> = Vec::with_capacity(n * (n - 1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let correlation = coefficients[i][j];
                pairs.push(CorrelationEntry {
                    columns: (numeric_columns[i].to_string(), numeric_columns[j].to_string()),
                    correlation,
                    strength: self.config.strength(correlation),
                });
            }
        }
        // Stable: equal magnitudes keep matrix order
        pairs.sort_by(|a, b| b.correlation.abs().total_cmp(&a.correlation.abs()));
        pairs.truncate(self.config.top_pairs);

        debug!(columns = n, pairs = pairs.len(), "computed correlation matrix");

        CorrelationAnalysis::Computed {
            matrix,
            top_pairs: pairs,
        }
    }
}

fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let mut moments = CoMoments::default();
    for (x, y) in xs.iter().zip(ys) {
        if let (Some(x), Some(y)) = (x, y) {
            moments.add(*x, *y);
        }
    }
    moments.pearson().map_or(0.0, |r| round_to(r, 3))
}
