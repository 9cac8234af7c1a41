//! Surveyor: statistical profiling of tabular survey exports.
//!
//! Surveyor infers each question's type from its answers, computes
//! type-appropriate statistics, scores satisfaction-style questions,
//! correlates numeric questions and grades overall data quality.
//!
//! # Core Principles
//!
//! - **Inference, not declaration**: column types come from the data
//! - **Read-only**: the input dataset is never modified
//! - **Counted failures**: values that fail numeric coercion are tallied, not hidden
//!
//! # Example
//!
//! ```no_run
//! use surveyor::Surveyor;
//!
//! let surveyor = Surveyor::new();
//! let (result, source) = surveyor.analyze_file("responses.csv").unwrap();
//!
//! println!("Loaded {} responses from {}", source.record_count, source.file);
//! if let Some(report) = result.report() {
//!     println!("Completeness: {}%", report.data_quality.completeness_rate);
//! }
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod inference;
pub mod input;
pub mod profile;

mod surveyor;

pub use crate::surveyor::Surveyor;
pub use config::AnalysisConfig;
pub use error::{Result, SurveyorError};
pub use input::{Dataset, Parser, Record, SourceMetadata, Value};
pub use profile::{
    AnalysisFailure, AnalysisResult, ColumnProfile, ColumnStatistics, ColumnType,
    CorrelationAnalysis, FailureCode, QualityGrade, QualityReport, SatisfactionLevel,
    SatisfactionProfile, SurveyReport,
};
