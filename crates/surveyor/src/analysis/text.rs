//! Length and word statistics for free-text columns.

use super::round_to;
use crate::input::Value;
use crate::profile::{ColumnStatistics, TextStatistics};

#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalyzer;

impl TextAnalyzer {
    pub fn analyze(values: &[&Value]) -> ColumnStatistics {
        let texts: Vec<String> = values
            .iter()
            .map(|v| v.to_text())
            .filter(|t| !t.trim().is_empty())
            .collect();

        if texts.is_empty() {
            return ColumnStatistics::Unavailable {
                error: "No text responses to analyze".to_string(),
            };
        }

        let lengths: Vec<usize> = texts.iter().map(|t| t.chars().count()).collect();
        let words: Vec<usize> = texts.iter().map(|t| t.split_whitespace().count()).collect();

        let responses = texts.len();
        let total_length: usize = lengths.iter().sum();
        let total_words: usize = words.iter().sum();

        ColumnStatistics::Text(TextStatistics {
            responses,
            avg_length: round_to(total_length as f64 / responses as f64, 2),
            avg_word_count: round_to(total_words as f64 / responses as f64, 2),
            min_length: lengths.iter().copied().min().unwrap_or(0),
            max_length: lengths.iter().copied().max().unwrap_or(0),
            total_words,
        })
    }
}
