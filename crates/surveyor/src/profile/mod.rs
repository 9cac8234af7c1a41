//! Result types produced by the analysis engine.

mod column;
mod report;
mod types;

pub use column::{
    CategoricalStatistics, CategoryCount, ColumnProfile, ColumnStatistics, NumericStatistics,
    TextStatistics,
};
pub use report::{
    AnalysisFailure, AnalysisResult, BasicStatistics, CorrelationAnalysis, CorrelationEntry,
    FailureCode, QualityReport, ResponseConsistency, ResponsePatterns, SatisfactionProfile,
    SatisfactionSummary, SurveyReport,
};
pub use types::{ColumnType, CorrelationStrength, Percent, QualityGrade, SatisfactionLevel};
