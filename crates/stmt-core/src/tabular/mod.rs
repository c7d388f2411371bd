//! Tabular source readers.

mod csv_reader;

pub use csv_reader::CsvTableReader;

use crate::error::TableError;

/// Result type for tabular operations.
pub type Result<T> = std::result::Result<T, TableError>;
