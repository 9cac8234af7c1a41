//! Core labels and value types shared by the report sections.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Inferred semantic type of a survey column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Mostly numeric answers (scales, counts, ages).
    Numeric,
    /// Short coded answers drawn from a small vocabulary.
    Categorical,
    /// Long free-form answers.
    Text,
    /// No answered values to infer from.
    #[default]
    Unknown,
}

impl ColumnType {
    /// Lower-case label, as used in serialized output.
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Categorical => "categorical",
            ColumnType::Text => "text",
            ColumnType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative bucket for an average satisfaction score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SatisfactionLevel {
    #[serde(rename = "High Satisfaction")]
    High,
    #[serde(rename = "Moderate Satisfaction")]
    Moderate,
    #[serde(rename = "Low Satisfaction")]
    Low,
    #[serde(rename = "Poor Satisfaction")]
    Poor,
}

impl SatisfactionLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SatisfactionLevel::High => "High Satisfaction",
            SatisfactionLevel::Moderate => "Moderate Satisfaction",
            SatisfactionLevel::Low => "Low Satisfaction",
            SatisfactionLevel::Poor => "Poor Satisfaction",
        }
    }
}

impl fmt::Display for SatisfactionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative bucket for the magnitude of a correlation coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CorrelationStrength {
    Strong,
    Moderate,
    Weak,
    #[serde(rename = "Very Weak")]
    VeryWeak,
}

impl CorrelationStrength {
    pub fn label(&self) -> &'static str {
        match self {
            CorrelationStrength::Strong => "Strong",
            CorrelationStrength::Moderate => "Moderate",
            CorrelationStrength::Weak => "Weak",
            CorrelationStrength::VeryWeak => "Very Weak",
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Overall data quality grade derived from the completeness rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum QualityGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityGrade {
    pub fn label(&self) -> &'static str {
        match self {
            QualityGrade::Excellent => "Excellent",
            QualityGrade::Good => "Good",
            QualityGrade::Fair => "Fair",
            QualityGrade::Poor => "Poor",
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A percentage with one decimal place, rendered as `"50.0%"`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percent(f64);

impl Percent {
    /// Round a raw percentage to one decimal place.
    pub fn new(value: f64) -> Self {
        Percent((value * 10.0).round() / 10.0)
    }

    /// Build from a count of tenths of a percent (`500` is 50.0%).
    pub fn from_tenths(tenths: u64) -> Self {
        Percent(tenths as f64 / 10.0)
    }

    /// `part / whole` as a percentage; zero when `whole` is zero.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            Percent(0.0)
        } else {
            Percent::new(part as f64 / whole as f64 * 100.0)
        }
    }

    /// The numeric value, e.g. `50.0`.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(Percent::new(n)),
            Repr::Text(s) => s
                .trim()
                .trim_end_matches('%')
                .parse::<f64>()
                .map(Percent::new)
                .map_err(serde::de::Error::custom),
        }
    }
}
