//! Analysis configuration.
//!
//! Every threshold and bucket boundary the engine uses lives here so it can
//! be overridden per run. Configuration is read-only once a
//! [`crate::Surveyor`] is built; results are never stored back into it.
//!
//! # Example
//!
//! ```
//! use surveyor::AnalysisConfig;
//!
//! let config = AnalysisConfig::default()
//!     .with_numeric_threshold(0.9)
//!     .with_satisfaction_keywords(["nps", "rating"]);
//!
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SurveyorError};
use crate::profile::{CorrelationStrength, QualityGrade, SatisfactionLevel};

/// Thresholds for column type inference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum share of numeric-coercible values for a numeric column.
    pub numeric_threshold: f64,
    /// Average non-numeric length (characters per value) above which a
    /// column is free text rather than categorical.
    pub text_length_threshold: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            numeric_threshold: 0.8,
            text_length_threshold: 50.0,
        }
    }
}

/// Column selection and score buckets for satisfaction scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SatisfactionConfig {
    /// Case-insensitive substrings that mark a column as satisfaction-relevant.
    pub keywords: Vec<String>,
    /// Lowest average for "High Satisfaction".
    pub high: f64,
    /// Lowest average for "Moderate Satisfaction".
    pub moderate: f64,
    /// Lowest average for "Low Satisfaction".
    pub low: f64,
}

impl Default for SatisfactionConfig {
    fn default() -> Self {
        Self {
            keywords: ["satisfaction", "rating", "score", "recommend"]
                .into_iter()
                .map(String::from)
                .collect(),
            high: 8.0,
            moderate: 6.0,
            low: 4.0,
        }
    }
}

impl SatisfactionConfig {
    /// Whether a column name matches any keyword.
    pub fn matches(&self, column: &str) -> bool {
        let lower = column.to_lowercase();
        self.keywords
            .iter()
            .any(|kw| !kw.is_empty() && lower.contains(&kw.to_lowercase()))
    }

    /// Bucket an average score.
    pub fn level(&self, score: f64) -> SatisfactionLevel {
        if score >= self.high {
            SatisfactionLevel::High
        } else if score >= self.moderate {
            SatisfactionLevel::Moderate
        } else if score >= self.low {
            SatisfactionLevel::Low
        } else {
            SatisfactionLevel::Poor
        }
    }
}

/// Ranking and strength buckets for correlation analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Number of column pairs to report.
    pub top_pairs: usize,
    /// Lowest |r| for a strong correlation.
    pub strong: f64,
    /// Lowest |r| for a moderate correlation.
    pub moderate: f64,
    /// Lowest |r| for a weak correlation.
    pub weak: f64,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            top_pairs: 5,
            strong: 0.7,
            moderate: 0.5,
            weak: 0.3,
        }
    }
}

impl CorrelationConfig {
    /// Bucket a coefficient by magnitude.
    pub fn strength(&self, coefficient: f64) -> CorrelationStrength {
        let magnitude = coefficient.abs();
        if magnitude >= self.strong {
            CorrelationStrength::Strong
        } else if magnitude >= self.moderate {
            CorrelationStrength::Moderate
        } else if magnitude >= self.weak {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::VeryWeak
        }
    }
}

/// Grade boundaries for the completeness rate (percent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    pub excellent: f64,
    pub good: f64,
    pub fair: f64,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            excellent: 95.0,
            good: 85.0,
            fair: 70.0,
        }
    }
}

impl QualityConfig {
    /// Grade a completeness rate.
    pub fn grade(&self, completeness: f64) -> QualityGrade {
        if completeness >= self.excellent {
            QualityGrade::Excellent
        } else if completeness >= self.good {
            QualityGrade::Good
        } else if completeness >= self.fair {
            QualityGrade::Fair
        } else {
            QualityGrade::Poor
        }
    }
}

/// Configuration for a [`crate::Surveyor`] run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub classifier: ClassifierConfig,
    pub satisfaction: SatisfactionConfig,
    pub correlation: CorrelationConfig,
    pub quality: QualityConfig,
}

impl AnalysisConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| SurveyorError::io(path, e))?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the numeric classification threshold.
    pub fn with_numeric_threshold(mut self, threshold: f64) -> Self {
        self.classifier.numeric_threshold = threshold;
        self
    }

    /// Set the free-text length threshold.
    pub fn with_text_length_threshold(mut self, threshold: f64) -> Self {
        self.classifier.text_length_threshold = threshold;
        self
    }

    /// Replace the satisfaction keyword set.
    pub fn with_satisfaction_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.satisfaction.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set how many correlated pairs are reported.
    pub fn with_top_pairs(mut self, count: usize) -> Self {
        self.correlation.top_pairs = count;
        self
    }

    /// Check that thresholds are in range and bucket boundaries are ordered.
    pub fn validate(&self) -> Result<()> {
        let c = &self.classifier;
        if !(0.0..=1.0).contains(&c.numeric_threshold) {
            return Err(SurveyorError::Config(format!(
                "numeric_threshold must be within [0, 1], got {}",
                c.numeric_threshold
            )));
        }
        if !c.text_length_threshold.is_finite() || c.text_length_threshold < 0.0 {
            return Err(SurveyorError::Config(format!(
                "text_length_threshold must be a non-negative number, got {}",
                c.text_length_threshold
            )));
        }

        let s = &self.satisfaction;
        if !(s.high >= s.moderate && s.moderate >= s.low) {
            return Err(SurveyorError::Config(format!(
                "satisfaction boundaries must satisfy high >= moderate >= low, got {}/{}/{}",
                s.high, s.moderate, s.low
            )));
        }

        let r = &self.correlation;
        if !(r.strong >= r.moderate && r.moderate >= r.weak && r.weak >= 0.0 && r.strong <= 1.0) {
            return Err(SurveyorError::Config(format!(
                "correlation boundaries must satisfy 1 >= strong >= moderate >= weak >= 0, got {}/{}/{}",
                r.strong, r.moderate, r.weak
            )));
        }

        let q = &self.quality;
        if !(q.excellent >= q.good && q.good >= q.fair && q.fair >= 0.0 && q.excellent <= 100.0) {
            return Err(SurveyorError::Config(format!(
                "quality boundaries must satisfy 100 >= excellent >= good >= fair >= 0, got {}/{}/{}",
                q.excellent, q.good, q.fair
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AnalysisConfig::default().validate().is_ok());
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let config = SatisfactionConfig::default();
        assert!(config.matches("Overall_Satisfaction"));
        assert!(config.matches("product RATING"));
        assert!(config.matches("would_recommend"));
        assert!(!config.matches("department"));
    }

    #[test]
    fn test_custom_keywords_replace_defaults() {
        let config = AnalysisConfig::default().with_satisfaction_keywords(["nps"]);
        assert!(config.satisfaction.matches("NPS_2024"));
        assert!(!config.satisfaction.matches("rating"));
    }

    #[test]
    fn test_satisfaction_buckets() {
        let config = SatisfactionConfig::default();
        assert_eq!(config.level(8.0), SatisfactionLevel::High);
        assert_eq!(config.level(6.8), SatisfactionLevel::Moderate);
        assert_eq!(config.level(4.0), SatisfactionLevel::Low);
        assert_eq!(config.level(3.99), SatisfactionLevel::Poor);
    }

    #[test]
    fn test_strength_uses_magnitude() {
        let config = CorrelationConfig::default();
        assert_eq!(config.strength(-0.85), CorrelationStrength::Strong);
        assert_eq!(config.strength(0.5), CorrelationStrength::Moderate);
        assert_eq!(config.strength(-0.3), CorrelationStrength::Weak);
        assert_eq!(config.strength(0.1), CorrelationStrength::VeryWeak);
    }

    #[test]
    fn test_quality_grades() {
        let config = QualityConfig::default();
        assert_eq!(config.grade(100.0), QualityGrade::Excellent);
        assert_eq!(config.grade(90.0), QualityGrade::Good);
        assert_eq!(config.grade(83.3), QualityGrade::Fair);
        assert_eq!(config.grade(10.0), QualityGrade::Poor);
    }

    #[test]
    fn test_validate_rejects_bad_threshold() {
        let config = AnalysisConfig::default().with_numeric_threshold(1.5);
        assert!(matches!(config.validate(), Err(SurveyorError::Config(_))));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"classifier": {"numeric_threshold": 0.6}}"#).unwrap();
        assert_eq!(config.classifier.numeric_threshold, 0.6);
        assert_eq!(config.classifier.text_length_threshold, 50.0);
        assert_eq!(config.correlation.top_pairs, 5);
    }
}
