//! Normalizer for loosely-typed tabular rows (CSV and spreadsheet exports).

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::ValidationError;
use crate::models::config::TableConfig;
use crate::models::{CellValue, RowView, Table, TransactionRecord};

use super::rules::{AmountParser, CellParser, DateParser};

/// Columns every tabular statement must provide.
pub const REQUIRED_COLUMNS: [&str; 5] = ["date", "description", "debit", "credit", "balance"];

/// Converts rows of cells into transactions.
///
/// Column coverage is checked up front and is all-or-nothing. Individual
/// cells that cannot be interpreted become absent fields; rows are never
/// dropped.
#[derive(Debug, Clone, Default)]
pub struct RowNormalizer {
    dates: DateParser,
    amounts: AmountParser,
}

impl RowNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a normalizer from configuration.
    pub fn from_config(config: &TableConfig) -> Self {
        Self {
            dates: DateParser::with_formats(config.date_formats.iter().cloned()),
            amounts: AmountParser::new(),
        }
    }

    /// Check that all required columns are present.
    pub fn validate_columns(&self, columns: &BTreeSet<String>) -> Result<(), ValidationError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !columns.contains(**c as &str))
            .map(|c| c.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingColumns { missing })
        }
    }

    /// Normalize `rows`, one record per row, after checking `columns`.
    pub fn normalize_rows<R: RowView>(
        &self,
        rows: &[R],
        columns: &BTreeSet<String>,
    ) -> Result<Vec<TransactionRecord>, ValidationError> {
        self.validate_columns(columns)?;

        let records: Vec<TransactionRecord> =
            rows.iter().map(|row| self.normalize_row(row)).collect();

        debug!("Normalized {} rows", records.len());
        Ok(records)
    }

    /// Normalize every row of a table.
    pub fn normalize_table(&self, table: &Table) -> Result<Vec<TransactionRecord>, ValidationError> {
        self.normalize_rows(&table.rows, &table.columns)
    }

    /// Normalize a single row without column validation.
    pub fn normalize_row<R: RowView + ?Sized>(&self, row: &R) -> TransactionRecord {
        let cell = |column: &str| row.cell(column).unwrap_or(&CellValue::Empty);

        TransactionRecord {
            date: self.dates.parse_cell(cell("date")),
            description: cell("description")
                .to_text()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            debit: self.amounts.parse_cell(cell("debit")),
            credit: self.amounts.parse_cell(cell("credit")),
            balance: self.amounts.parse_cell(cell("balance")),
        }
    }
}

/// Normalize rows with the default configuration.
pub fn normalize_rows<R: RowView>(
    rows: &[R],
    columns: &BTreeSet<String>,
) -> Result<Vec<TransactionRecord>, ValidationError> {
    RowNormalizer::new().normalize_rows(rows, columns)
}
