//! Data models for statement extraction.

pub mod cell;
pub mod config;
pub mod transaction;

pub use cell::{normalize_column_name, CellValue, Row, RowView, Table};
pub use config::{LineConfig, PdfConfig, StmtConfig, TableConfig};
pub use transaction::{SourceType, Statement, StatementExtraction, TransactionRecord};
