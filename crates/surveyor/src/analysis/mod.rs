//! Statistical analyzers for survey columns and whole datasets.
//!
//! Each analyzer is independent and stateless apart from its thresholds;
//! [`crate::Surveyor`] runs them in order and assembles the report.

mod categorical;
mod column;
mod correlation;
mod moments;
mod numeric;
mod patterns;
mod quality;
mod satisfaction;
mod text;

pub use categorical::CategoricalAnalyzer;
pub use column::ColumnAnalyzer;
pub use correlation::CorrelationAnalyzer;
pub use numeric::NumericAnalyzer;
pub use patterns::ResponsePatternAnalyzer;
pub use quality::QualityAssessor;
pub use satisfaction::SatisfactionScorer;
pub use text::TextAnalyzer;

/// Round half away from zero to a fixed number of decimals.
///
/// Values too large to scale are returned unchanged; at that magnitude they
/// carry no fractional digits anyway.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(6.8, 2), 6.8);
        assert_eq!(round_to(2.863_564, 2), 2.86);
        assert_eq!(round_to(83.333_33, 1), 83.3);
        assert_eq!(round_to(-0.456_7, 3), -0.457);
    }

    #[test]
    fn test_round_to_keeps_huge_values() {
        assert_eq!(round_to(1e307, 2), 1e307);
        assert_eq!(round_to(-f64::MAX, 3), -f64::MAX);
    }
}
