//! Core library for bank statement extraction.
//!
//! This crate provides:
//! - A line-oriented parser for text extracted from statement PDFs
//! - A normalizer for loosely-typed CSV/spreadsheet rows
//! - Shared date and currency coercion rules
//! - Thin PDF text and CSV readers plus a per-file dispatcher

pub mod error;
pub mod models;
pub mod pdf;
pub mod statement;
pub mod tabular;

pub use error::{PdfError, Result, StmtError, TableError, ValidationError};
pub use models::{
    CellValue, Row, RowView, SourceType, Statement, StatementExtraction, StmtConfig, Table,
    TransactionRecord,
};
pub use pdf::{PdfExtractor, PdfProcessor};
pub use statement::{normalize_rows, parse_lines, LineParser, RowNormalizer, StatementExtractor};
pub use tabular::CsvTableReader;
