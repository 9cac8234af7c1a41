//! CSV/TSV and JSON loaders with delimiter detection.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::dataset::{Dataset, Record, Value};
use super::source::{SourceFormat, SourceMetadata};
use crate::error::{Result, SurveyorError};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Whether delimited files have a header row.
    pub has_header: bool,
    /// Maximum records to read (None = all).
    pub max_rows: Option<usize>,
    /// Quote character.
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
            max_rows: None,
            quote: b'"',
        }
    }
}

/// Loads survey exports into a [`Dataset`].
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Load a file and return the dataset and its metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| SurveyorError::io(path, e))?;
        let size_bytes = contents.len() as u64;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let (dataset, format) = match SourceFormat::from_path(path) {
            Some(SourceFormat::Json) => (self.parse_json(&contents)?, SourceFormat::Json),
            _ => {
                let delimiter = match self.config.delimiter {
                    Some(d) => d,
                    None => detect_delimiter(&contents)?,
                };
                (
                    self.parse_delimited(&contents, delimiter)?,
                    SourceFormat::from_delimiter(delimiter),
                )
            }
        };

        debug!(
            file = %path.display(),
            records = dataset.len(),
            columns = dataset.column_count(),
            "loaded survey export"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            dataset.len(),
            dataset.column_count(),
        );

        Ok((dataset, metadata))
    }

    /// Parse delimited bytes.
    pub fn parse_delimited(&self, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let mut records = reader.records();

        let mut headers: Vec<String> = if self.config.has_header {
            match records.next() {
                Some(record) => record?.iter().map(|s| s.trim().to_string()).collect(),
                None => return Err(SurveyorError::EmptyData("No header row found".to_string())),
            }
        } else {
            Vec::new()
        };

        let mut rows = Vec::new();

        for (row_idx, result) in records.enumerate() {
            if self.config.max_rows.is_some_and(|max| row_idx >= max) {
                break;
            }

            let record = result?;
            if headers.is_empty() {
                // Generate column names from the first row's width
                headers = (0..record.len())
                    .map(|i| format!("column_{}", i + 1))
                    .collect();
            }

            rows.push(record.iter().map(Value::from_cell).collect());
        }

        if headers.is_empty() {
            return Err(SurveyorError::EmptyData("No columns found".to_string()));
        }

        if rows.is_empty() {
            return Err(SurveyorError::EmptyData("No data rows found".to_string()));
        }

        Ok(Dataset::from_rows(&headers, rows))
    }

    /// Parse a JSON array of flat objects.
    ///
    /// Strings stay text, numbers stay numbers, booleans become their text
    /// form. Nested arrays and objects are rejected.
    pub fn parse_json(&self, bytes: &[u8]) -> Result<Dataset> {
        let parsed: serde_json::Value = serde_json::from_slice(bytes)?;

        let serde_json::Value::Array(items) = parsed else {
            return Err(SurveyorError::UnsupportedFormat(
                "JSON input must be an array of objects".to_string(),
            ));
        };

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        let mut records = Vec::with_capacity(items.len().min(limit));

        for (index, item) in items.into_iter().take(limit).enumerate() {
            let serde_json::Value::Object(fields) = item else {
                return Err(SurveyorError::InvalidRecord {
                    index,
                    message: "expected an object".to_string(),
                });
            };

            let mut record = Record::with_capacity(fields.len());
            for (key, value) in fields {
                let cell = match value {
                    serde_json::Value::Null => Value::Null,
                    serde_json::Value::Bool(b) => Value::Text(b.to_string()),
                    serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
                    serde_json::Value::String(s) => Value::Text(s),
                    serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                        return Err(SurveyorError::InvalidRecord {
                            index,
                            message: format!("field '{}' is nested", key),
                        });
                    }
                };
                record.insert(key, cell);
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(SurveyorError::EmptyData("No records found".to_string()));
        }

        Ok(Dataset::new(records))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(SurveyorError::EmptyData("No lines to analyze".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines win; tab gets a small bonus
        let score = if counts.iter().all(|&c| c == first_count) {
            first_count * 1000 + if delim == b'\t' { 100 } else { 0 }
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut in_quotes = false;

    line.chars()
        .filter(|&ch| {
            if ch == '"' {
                in_quotes = !in_quotes;
                false
            } else {
                ch == delim_char && !in_quotes
            }
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_delimiter_csv() {
        let data = b"a,b,c\n1,2,3\n4,5,6";
        assert_eq!(detect_delimiter(data).unwrap(), b',');
    }

    #[test]
    fn test_detect_delimiter_tsv() {
        let data = b"a\tb\tc\n1\t2\t3\n4\t5\t6";
        assert_eq!(detect_delimiter(data).unwrap(), b'\t');
    }

    #[test]
    fn test_quoted_delimiters_ignored() {
        assert_eq!(count_delimiter_in_line("\"a,b\",c", b','), 1);
    }

    #[test]
    fn test_parse_csv_types_cells() {
        let parser = Parser::new();
        let data = b"name,rating,comment\nAlice,9,Great\nBob,,\"Slow, but fine\"";
        let dataset = parser.parse_delimited(data, b',').unwrap();

        assert_eq!(dataset.column_names(), vec!["name", "rating", "comment"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.get(0, "rating"), Some(&Value::Number(9.0)));
        assert_eq!(dataset.get(1, "rating"), Some(&Value::Null));
        assert_eq!(
            dataset.get(1, "comment"),
            Some(&Value::Text("Slow, but fine".to_string()))
        );
    }

    #[test]
    fn test_parse_csv_respects_max_rows() {
        let parser = Parser::with_config(ParserConfig {
            max_rows: Some(1),
            ..ParserConfig::default()
        });
        let dataset = parser.parse_delimited(b"a\n1\n2\n3", b',').unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_parse_csv_header_only_is_empty() {
        let parser = Parser::new();
        let err = parser.parse_delimited(b"a,b\n", b',').unwrap_err();
        assert!(matches!(err, SurveyorError::EmptyData(_)));
    }

    #[test]
    fn test_parse_json_records() {
        let parser = Parser::new();
        let data = br#"[{"age": 31, "recommend": "Yes", "note": null}, {"age": "n/a", "recommend": true}]"#;
        let dataset = parser.parse_json(data).unwrap();

        assert_eq!(dataset.column_names(), vec!["age", "recommend", "note"]);
        assert_eq!(dataset.get(0, "age"), Some(&Value::Number(31.0)));
        assert_eq!(dataset.get(1, "recommend"), Some(&Value::Text("true".to_string())));
        assert_eq!(dataset.get(1, "note"), None);
    }

    #[test]
    fn test_parse_json_rejects_nested() {
        let parser = Parser::new();
        let err = parser.parse_json(br#"[{"tags": ["a", "b"]}]"#).unwrap_err();
        assert!(matches!(err, SurveyorError::InvalidRecord { index: 0, .. }));
    }

    #[test]
    fn test_parse_json_rejects_non_array() {
        let parser = Parser::new();
        let err = parser.parse_json(br#"{"a": 1}"#).unwrap_err();
        assert!(matches!(err, SurveyorError::UnsupportedFormat(_)));
    }
}
