//! Statement transaction extraction.

mod extractor;
mod lines;
pub mod rules;
mod table;

pub use extractor::StatementExtractor;
pub use lines::{parse_lines, LineParser};
pub use table::{normalize_rows, RowNormalizer, REQUIRED_COLUMNS};
