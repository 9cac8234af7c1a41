//! Survey data model, file loading and sample data.

mod dataset;
mod parser;
pub mod sample;
mod source;

pub use dataset::{parse_number, Dataset, Record, Value};
pub use parser::{Parser, ParserConfig};
pub use source::{SourceFormat, SourceMetadata};
