//! Metadata about a loaded survey export.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// On-disk format of a survey export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFormat {
    Csv,
    Tsv,
    CsvSemicolon,
    Psv,
    Delimited,
    Json,
}

impl SourceFormat {
    /// Format implied by a field delimiter.
    pub fn from_delimiter(delimiter: u8) -> Self {
        match delimiter {
            b'\t' => SourceFormat::Tsv,
            b',' => SourceFormat::Csv,
            b';' => SourceFormat::CsvSemicolon,
            b'|' => SourceFormat::Psv,
            _ => SourceFormat::Delimited,
        }
    }

    /// Guess the format from a file extension; `None` means "sniff the delimiter".
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(SourceFormat::Json),
            "tsv" | "tab" => Some(SourceFormat::Tsv),
            _ => None,
        }
    }
}

/// Metadata about the source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Detected format.
    pub format: SourceFormat,
    /// Number of survey responses.
    pub record_count: usize,
    /// Number of columns (keys of the first response).
    pub column_count: usize,
    /// When the file was loaded.
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a file that has just been loaded.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        format: SourceFormat,
        record_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            format,
            record_count,
            column_count,
            loaded_at: Utc::now(),
        }
    }
}
