//! In-memory survey dataset: ordered records of typed cells.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single survey cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No answer.
    Null,
    /// A numeric answer.
    Number(f64),
    /// A free-form or coded textual answer.
    Text(String),
}

impl Value {
    /// Build a value from a raw delimited-file cell.
    ///
    /// Empty cells become [`Value::Null`], cells that parse as a finite number
    /// become [`Value::Number`], everything else is kept as text.
    pub fn from_cell(cell: &str) -> Self {
        if cell.trim().is_empty() {
            Value::Null
        } else if let Some(number) = parse_number(cell) {
            Value::Number(number)
        } else {
            Value::Text(cell.to_string())
        }
    }

    /// Numeric coercion of this value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Null => None,
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::Number(_) => None,
            Value::Text(text) => parse_number(text),
        }
    }

    /// Whether this cell counts as unanswered.
    pub fn is_missing(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Number(_) => false,
            Value::Text(text) => text.trim().is_empty(),
        }
    }

    /// The textual form used for frequency keys and length measurements.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(text) => f.write_str(text),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Parse a textual answer as a number.
///
/// Leading and trailing whitespace is ignored. Non-finite results
/// (`"inf"`, `"NaN"`) are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// One survey response: column name to cell.
pub type Record = IndexMap<String, Value>;

/// An ordered collection of survey responses.
///
/// The column set is taken from the keys of the first record. Later records
/// that lack one of those keys are treated as missing that answer; keys that
/// only appear in later records are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Create a dataset from a header row and positional rows.
    ///
    /// Short rows are padded with [`Value::Null`]; extra cells are dropped.
    pub fn from_rows(headers: &[String], rows: Vec<Vec<Value>>) -> Self {
        let records = rows
            .into_iter()
            .map(|row| {
                let mut cells = row.into_iter();
                headers
                    .iter()
                    .map(|h| (h.clone(), cells.next().unwrap_or(Value::Null)))
                    .collect()
            })
            .collect();
        Self { records }
    }

    /// All records in order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names, taken from the first record.
    pub fn column_names(&self) -> Vec<&str> {
        self.records
            .first()
            .map(|r| r.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.records.first().map_or(0, IndexMap::len)
    }

    /// Cells of one column, one entry per record; `None` where the key is absent.
    pub fn column_cells<'a>(&'a self, name: &'a str) -> impl Iterator<Item = Option<&'a Value>> + 'a {
        self.records.iter().map(move |r| r.get(name))
    }

    /// Answered cells of one column, in record order.
    pub fn column_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.column_cells(name)
            .flatten()
            .filter(|v| !v.is_missing())
    }

    /// Get a specific cell.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.records.get(row).and_then(|r| r.get(column))
    }

    /// Whether a cell (possibly absent) counts as unanswered.
    pub fn is_missing_cell(cell: Option<&Value>) -> bool {
        cell.is_none_or(Value::is_missing)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}
