//! Dataset-wide completeness, grade and recommendations.

use indexmap::IndexMap;

use super::round_to;
use crate::config::QualityConfig;
use crate::input::Dataset;
use crate::profile::QualityReport;

/// Grades how completely a survey was answered.
#[derive(Debug, Clone, Default)]
pub struct QualityAssessor {
    config: QualityConfig,
}

impl QualityAssessor {
    pub fn new(config: QualityConfig) -> Self {
        Self { config }
    }

    /// Assess completeness over every (record, column) cell.
    ///
    /// A cell is missing when its key is absent, null, or empty text.
    pub fn assess(&self, dataset: &Dataset) -> QualityReport {
        let columns = dataset.column_names();
        let total_records = dataset.len();
        let total_cells = total_records * columns.len();

        let missing_by_column: IndexMap<String, usize> = columns
            .iter()
            .map(|&name| {
                let missing = dataset
                    .column_cells(name)
                    .filter(|cell| Dataset::is_missing_cell(*cell))
                    .count();
                (name.to_string(), missing)
            })
            .collect();
        let missing_values: usize = missing_by_column.values().sum();

        let completeness_rate = if total_cells == 0 {
            0.0
        } else {
            round_to(
                (total_cells - missing_values) as f64 / total_cells as f64 * 100.0,
                1,
            )
        };

        let recommendations =
            self.recommendations(completeness_rate, total_records, &missing_by_column);

        QualityReport {
            completeness_rate,
            quality_grade: self.config.grade(completeness_rate),
            total_records,
            total_cells,
            missing_values,
            missing_by_column,
            recommendations,
        }
    }

    fn recommendations(
        &self,
        completeness_rate: f64,
        total_records: usize,
        missing_by_column: &IndexMap<String, usize>,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if completeness_rate < self.config.excellent {
            recommendations
                .push("Review data collection methods to reduce missing responses".to_string());
        }

        if completeness_rate < self.config.fair {
            recommendations.push("Implement validation rules for survey inputs".to_string());
            recommendations.push("Make key questions required fields".to_string());
        }

        // Name the least answered question when it drags quality down;
        // ties go to the earliest column
        let mut worst: Option<(&String, usize)> = None;
        for (column, &missing) in missing_by_column {
            if missing > worst.map_or(0, |(_, most)| most) {
                worst = Some((column, missing));
            }
        }
        if let Some((column, missing)) = worst {
            let column_rate = round_to(
                (total_records - missing) as f64 / total_records as f64 * 100.0,
                1,
            );
            if column_rate < self.config.excellent {
                recommendations.push(format!(
                    "Question '{}' is only {:.1}% complete; consider revising or making it required",
                    column, column_rate
                ));
            }
        }

        recommendations.push("Monitor data quality metrics regularly".to_string());
        recommendations
    }
}
