//! Main Surveyor struct and public API.

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::analysis::{
    ColumnAnalyzer, CorrelationAnalyzer, QualityAssessor, ResponsePatternAnalyzer,
    SatisfactionScorer,
};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::input::{Dataset, Parser, SourceMetadata};
use crate::profile::{
    AnalysisFailure, AnalysisResult, BasicStatistics, ColumnProfile, ColumnType, FailureCode,
    Percent, SurveyReport,
};

/// The survey analysis engine.
///
/// Holds only configuration; every call to [`Surveyor::analyze`] computes a
/// fresh report from its input.
#[derive(Debug, Clone)]
pub struct Surveyor {
    config: AnalysisConfig,
    parser: Parser,
    columns: ColumnAnalyzer,
    correlation: CorrelationAnalyzer,
    satisfaction: SatisfactionScorer,
    quality: QualityAssessor,
}

impl Default for Surveyor {
    fn default() -> Self {
        Self::new()
    }
}

impl Surveyor {
    /// Create a new Surveyor with default thresholds.
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    /// Create a Surveyor with custom thresholds.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            parser: Parser::new(),
            columns: ColumnAnalyzer::new(config.classifier.clone()),
            correlation: CorrelationAnalyzer::new(config.correlation.clone()),
            satisfaction: SatisfactionScorer::new(config.satisfaction.clone()),
            quality: QualityAssessor::new(config.quality.clone()),
            config,
        }
    }

    /// Use a custom parser for [`Surveyor::analyze_file`].
    pub fn with_parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }

    /// The thresholds this engine runs with.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Load a survey export and analyze it.
    pub fn analyze_file(&self, path: impl AsRef<Path>) -> Result<(AnalysisResult, SourceMetadata)> {
        let (dataset, source) = self.parser.parse_file(path)?;
        Ok((self.analyze(&dataset), source))
    }

    /// Analyze a dataset.
    ///
    /// An empty dataset yields [`AnalysisResult::Failed`] rather than an error.
    pub fn analyze(&self, dataset: &Dataset) -> AnalysisResult {
        if dataset.is_empty() {
            warn!("no survey responses to analyze");
            return AnalysisResult::Failed(AnalysisFailure {
                code: FailureCode::EmptyDataset,
                error: "No data to analyze".to_string(),
            });
        }

        info!(
            responses = dataset.len(),
            columns = dataset.column_count(),
            "analyzing survey"
        );

        let columns = dataset.column_names();
        let column_analysis: IndexMap<String, ColumnProfile> = columns
            .iter()
            .map(|&name| (name.to_string(), self.columns.analyze_column(dataset, name)))
            .collect();

        let answered = dataset
            .records()
            .iter()
            .filter(|record| {
                columns
                    .iter()
                    .any(|&name| !Dataset::is_missing_cell(record.get(name)))
            })
            .count();

        let response_patterns = ResponsePatternAnalyzer::analyze(dataset, &column_analysis);

        let numeric_columns: Vec<&str> = column_analysis
            .values()
            .filter(|profile| profile.data_type == ColumnType::Numeric)
            .map(|profile| profile.name.as_str())
            .collect();
        debug!(numeric_columns = numeric_columns.len(), "selected columns for correlation");
        let correlation_analysis = self.correlation.analyze(dataset, &numeric_columns);

        let satisfaction_analysis = self.satisfaction.analyze(dataset);
        let data_quality = self.quality.assess(dataset);

        info!(
            completeness = data_quality.completeness_rate,
            grade = %data_quality.quality_grade,
            satisfaction_columns = satisfaction_analysis.len(),
            "analysis complete"
        );

        AnalysisResult::Report(Box::new(SurveyReport {
            basic_statistics: BasicStatistics {
                total_responses: dataset.len(),
                column_count: dataset.column_count(),
                response_rate: Percent::of(answered, dataset.len()),
                column_analysis,
            },
            response_patterns,
            satisfaction_analysis,
            data_quality,
            correlation_analysis,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Record, Value};

    fn survey() -> Dataset {
        let headers: Vec<String> = ["age", "rating", "department"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        Dataset::from_rows(
            &headers,
            vec![
                vec![Value::from(25), Value::from(9), Value::from("Sales")],
                vec![Value::from(34), Value::from(7), Value::from("IT")],
                vec![Value::from(41), Value::from(5), Value::from("Sales")],
                vec![Value::from(29), Value::from(3), Value::Null],
                vec![Value::from(52), Value::from(10), Value::from("HR")],
            ],
        )
    }

    #[test]
    fn test_surveyor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Surveyor>();
    }

    #[test]
    fn test_empty_dataset_fails() {
        let result = Surveyor::new().analyze(&Dataset::default());
        let failure = result.failure().unwrap();
        assert_eq!(failure.code, FailureCode::EmptyDataset);
        assert_eq!(failure.error, "No data to analyze");
    }

    #[test]
    fn test_report_sections() {
        let result = Surveyor::new().analyze(&survey());
        let report = result.report().unwrap();

        assert_eq!(report.basic_statistics.total_responses, 5);
        assert_eq!(report.basic_statistics.column_count, 3);
        assert_eq!(report.basic_statistics.response_rate.value(), 100.0);
        assert_eq!(
            report.basic_statistics.column_analysis["department"].data_type,
            ColumnType::Categorical
        );
        assert_eq!(report.satisfaction_analysis["rating"].average_score(), Some(6.8));
        assert!(report.correlation_analysis.matrix().is_some());
        assert_eq!(report.data_quality.missing_values, 1);
    }

    #[test]
    fn test_response_rate_counts_blank_records() {
        let mut blank = Record::new();
        blank.insert("q".to_string(), Value::from(""));
        let mut answered = Record::new();
        answered.insert("q".to_string(), Value::from("yes"));
        let dataset = Dataset::new(vec![answered, blank]);

        let result = Surveyor::new().analyze(&dataset);
        assert_eq!(result.report().unwrap().basic_statistics.response_rate.value(), 50.0);
    }

    #[test]
    fn test_response_rate_ignores_late_columns() {
        let mut first = Record::new();
        first.insert("q".to_string(), Value::from("yes"));
        let mut late_only = Record::new();
        late_only.insert("q".to_string(), Value::Null);
        late_only.insert("extra".to_string(), Value::from("answered"));
        let dataset = Dataset::new(vec![first, late_only]);

        let result = Surveyor::new().analyze(&dataset);
        let report = result.report().unwrap();
        assert_eq!(report.basic_statistics.response_rate.value(), 50.0);
        assert_eq!(report.response_patterns.response_consistency.empty_responses, 1);
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let surveyor = Surveyor::new();
        let data = survey();
        assert_eq!(surveyor.analyze(&data), surveyor.analyze(&data));
    }
}
