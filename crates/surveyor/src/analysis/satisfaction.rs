//! Scoring of satisfaction-style questions selected by column name.

use indexmap::IndexMap;
use tracing::debug;

use super::categorical::frequency_counts;
use super::moments::Moments;
use super::round_to;
use crate::config::SatisfactionConfig;
use crate::input::{Dataset, Value};
use crate::profile::{SatisfactionProfile, SatisfactionSummary};

/// Scores every column whose name matches a satisfaction keyword.
#[derive(Debug, Clone, Default)]
pub struct SatisfactionScorer {
    config: SatisfactionConfig,
}

impl SatisfactionScorer {
    pub fn new(config: SatisfactionConfig) -> Self {
        Self { config }
    }

    /// Whether a column is satisfaction-relevant.
    pub fn is_relevant(&self, column: &str) -> bool {
        self.config.matches(column)
    }

    /// Score all relevant columns, in column order.
    pub fn analyze(&self, dataset: &Dataset) -> IndexMap<String, SatisfactionProfile> {
        dataset
            .column_names()
            .into_iter()
            .filter(|name| self.is_relevant(name))
            .map(|name| {
                let values: Vec<&Value> = dataset.column_values(name).collect();
                (name.to_string(), self.score_column(name, &values))
            })
            .collect()
    }

    /// Score one column from its answered values.
    ///
    /// The numeric branch is taken only when every answer coerces to a
    /// number; otherwise answers are tallied as categorical responses.
    pub fn score_column(&self, name: &str, values: &[&Value]) -> SatisfactionProfile {
        let scores: Option<Vec<f64>> = values.iter().map(|v| v.as_number()).collect();

        let summary = match scores {
            Some(scores) if !scores.is_empty() => self.score_numeric(&scores),
            _ => score_categorical(values),
        };

        debug!(column = name, responses = values.len(), "scored satisfaction column");

        SatisfactionProfile {
            column: name.to_string(),
            summary,
        }
    }

    fn score_numeric(&self, scores: &[f64]) -> SatisfactionSummary {
        let moments: Moments = scores.iter().copied().collect();
        let average_score = round_to(moments.mean(), 2);

        let mut sorted = scores.to_vec();
        sorted.sort_by(f64::total_cmp);
        let score_distribution: IndexMap<String, usize> = sorted
            .chunk_by(|a, b| a == b)
            .map(|run| (Value::Number(run[0]).to_text(), run.len()))
            .collect();

        SatisfactionSummary::Numeric {
            responses: scores.len(),
            average_score,
            satisfaction_level: self.config.level(average_score),
            score_distribution,
        }
    }
}

fn score_categorical(values: &[&Value]) -> SatisfactionSummary {
    let response_distribution = frequency_counts(values.iter().map(|v| v.to_text()));
    let most_common = response_distribution
        .first()
        .map(|(label, &count)| (label.clone(), count));

    SatisfactionSummary::Categorical {
        responses: values.len(),
        response_distribution,
        most_common,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Record;
    use crate::profile::SatisfactionLevel;

    fn score(values: Vec<Value>) -> SatisfactionProfile {
        let refs: Vec<&Value> = values.iter().collect();
        SatisfactionScorer::default().score_column("rating", &refs)
    }

    #[test]
    fn test_numeric_rating_scored() {
        let profile = score(vec![
            Value::from(9),
            Value::from(7),
            Value::from(5),
            Value::from(3),
            Value::from(10),
        ]);

        assert_eq!(profile.average_score(), Some(6.8));
        assert_eq!(profile.level(), Some(SatisfactionLevel::Moderate));
    }

    #[test]
    fn test_score_distribution_ascending() {
        let profile = score(vec![Value::from(5), Value::from("3"), Value::from(5)]);
        let SatisfactionSummary::Numeric {
            score_distribution, ..
        } = profile.summary
        else {
            panic!("expected numeric summary");
        };

        let entries: Vec<(&str, usize)> = score_distribution
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        assert_eq!(entries, vec![("3", 1), ("5", 2)]);
    }

    #[test]
    fn test_text_answers_become_categorical() {
        let profile = score(vec![
            Value::from("Yes"),
            Value::from("No"),
            Value::from("Yes"),
            Value::from(4),
        ]);

        assert_eq!(profile.average_score(), None);
        let SatisfactionSummary::Categorical {
            most_common,
            response_distribution,
            ..
        } = profile.summary
        else {
            panic!("expected categorical summary");
        };
        assert_eq!(most_common, Some(("Yes".to_string(), 2)));
        assert_eq!(response_distribution.len(), 3);
    }

    #[test]
    fn test_selects_columns_by_keyword() {
        let mut record = Record::new();
        record.insert("Overall_Satisfaction".to_string(), Value::from(8));
        record.insert("age".to_string(), Value::from(30));
        record.insert("would_recommend".to_string(), Value::from("Yes"));
        let dataset = Dataset::new(vec![record]);

        let results = SatisfactionScorer::default().analyze(&dataset);
        let keys: Vec<&str> = results.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Overall_Satisfaction", "would_recommend"]);
    }

    #[test]
    fn test_unanswered_column_is_empty_categorical() {
        let profile = score(Vec::new());
        assert!(matches!(
            profile.summary,
            SatisfactionSummary::Categorical { responses: 0, most_common: None, .. }
        ));
    }
}
