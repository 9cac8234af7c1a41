//! The assembled analysis report and its sections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::column::ColumnProfile;
use super::types::{CorrelationStrength, Percent, QualityGrade, SatisfactionLevel};

/// Dataset totals plus one profile per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicStatistics {
    /// Number of survey responses (records).
    pub total_responses: usize,
    /// Number of columns, taken from the first record.
    pub column_count: usize,
    /// Share of responses with at least one answered question.
    pub response_rate: Percent,
    /// Profiles keyed by column name, in column order.
    pub column_analysis: IndexMap<String, ColumnProfile>,
}

/// How completely respondents answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseConsistency {
    /// Responses answering every question.
    pub complete_responses: usize,
    /// Responses answering some but not all questions.
    pub partial_responses: usize,
    /// Responses answering nothing.
    pub empty_responses: usize,
    /// Complete responses as a percentage of all responses.
    pub consistency_rate: f64,
}

/// Completion and consistency of answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsePatterns {
    /// Percentage of responses answering each column (one decimal).
    pub completion_rate: IndexMap<String, f64>,
    pub response_consistency: ResponseConsistency,
    /// Numeric columns with answers that failed numeric coercion.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub coercion_mismatches: IndexMap<String, usize>,
}

/// Scoring outcome for one satisfaction-relevant column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SatisfactionSummary {
    /// Every answer was numeric.
    Numeric {
        responses: usize,
        average_score: f64,
        satisfaction_level: SatisfactionLevel,
        /// Count per distinct score, ascending by score.
        score_distribution: IndexMap<String, usize>,
    },
    /// At least one answer was not numeric.
    Categorical {
        responses: usize,
        /// Count per response, descending by count.
        response_distribution: IndexMap<String, usize>,
        most_common: Option<(String, usize)>,
    },
}

/// Satisfaction scoring for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatisfactionProfile {
    pub column: String,
    #[serde(flatten)]
    pub summary: SatisfactionSummary,
}

impl SatisfactionProfile {
    /// Average score, for numeric columns.
    pub fn average_score(&self) -> Option<f64> {
        match &self.summary {
            SatisfactionSummary::Numeric { average_score, .. } => Some(*average_score),
            SatisfactionSummary::Categorical { .. } => None,
        }
    }

    /// Satisfaction bucket, for numeric columns.
    pub fn level(&self) -> Option<SatisfactionLevel> {
        match &self.summary {
            SatisfactionSummary::Numeric {
                satisfaction_level, ..
            } => Some(*satisfaction_level),
            SatisfactionSummary::Categorical { .. } => None,
        }
    }
}

/// Correlation between two numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationEntry {
    pub columns: (String, String),
    pub correlation: f64,
    pub strength: CorrelationStrength,
}

/// Outcome of correlation analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CorrelationAnalysis {
    /// Fewer than two numeric columns; not an error.
    Insufficient {
        numeric_columns: usize,
        message: String,
    },
    Computed {
        /// Symmetric matrix of coefficients with a unit diagonal.
        matrix: IndexMap<String, IndexMap<String, f64>>,
        /// Strongest pairs by absolute coefficient.
        top_pairs: Vec<CorrelationEntry>,
    },
}

impl CorrelationAnalysis {
    pub fn matrix(&self) -> Option<&IndexMap<String, IndexMap<String, f64>>> {
        match self {
            CorrelationAnalysis::Computed { matrix, .. } => Some(matrix),
            CorrelationAnalysis::Insufficient { .. } => None,
        }
    }

    pub fn top_pairs(&self) -> &[CorrelationEntry] {
        match self {
            CorrelationAnalysis::Computed { top_pairs, .. } => top_pairs,
            CorrelationAnalysis::Insufficient { .. } => &[],
        }
    }
}

/// Dataset-wide completeness assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Percentage of answered cells, within [0, 100], one decimal.
    pub completeness_rate: f64,
    pub quality_grade: QualityGrade,
    pub total_records: usize,
    pub total_cells: usize,
    pub missing_values: usize,
    /// Missing cells per column, in column order.
    pub missing_by_column: IndexMap<String, usize>,
    pub recommendations: Vec<String>,
}

/// The full statistical profile of a survey dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub basic_statistics: BasicStatistics,
    pub response_patterns: ResponsePatterns,
    pub satisfaction_analysis: IndexMap<String, SatisfactionProfile>,
    pub data_quality: QualityReport,
    pub correlation_analysis: CorrelationAnalysis,
}

/// Machine-readable reason for a failed analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureCode {
    EmptyDataset,
}

/// Error descriptor returned in place of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFailure {
    pub code: FailureCode,
    pub error: String,
}

/// Outcome of [`crate::Surveyor::analyze`].
///
/// Dataset-wide failures are data, not panics or `Err`s, so callers can
/// render or export them like any other result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Report(Box<SurveyReport>),
    Failed(AnalysisFailure),
}

impl AnalysisResult {
    /// The report, if analysis succeeded.
    pub fn report(&self) -> Option<&SurveyReport> {
        match self {
            AnalysisResult::Report(report) => Some(report),
            AnalysisResult::Failed(_) => None,
        }
    }

    /// Consume into the report, if analysis succeeded.
    pub fn into_report(self) -> Option<SurveyReport> {
        match self {
            AnalysisResult::Report(report) => Some(*report),
            AnalysisResult::Failed(_) => None,
        }
    }

    /// The failure descriptor, if analysis failed.
    pub fn failure(&self) -> Option<&AnalysisFailure> {
        match self {
            AnalysisResult::Report(_) => None,
            AnalysisResult::Failed(failure) => Some(failure),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, AnalysisResult::Failed(_))
    }
}
