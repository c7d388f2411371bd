//! Loosely-typed tabular cells and row access.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single cell as delivered by a tabular reader.
///
/// CSV readers only ever produce `Empty` and `Text`; spreadsheet readers may
/// hand over native dates and numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Date(NaiveDateTime),
    Number(Decimal),
}

impl CellValue {
    /// True for `Empty` and for text that is blank after trimming.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Date(_) | Self::Number(_) => false,
        }
    }

    /// String form of the cell, `None` when empty.
    pub fn to_text(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        match self {
            Self::Empty => None,
            Self::Text(s) => Some(s.clone()),
            Self::Date(dt) => Some(dt.to_string()),
            Self::Number(n) => Some(n.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Date(dt)
    }
}

impl From<Decimal> for CellValue {
    fn from(n: Decimal) -> Self {
        Self::Number(n)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Read access to the cells of one row, by normalized column name.
pub trait RowView {
    /// Cell for `column`, `None` when the row has no such cell.
    fn cell(&self, column: &str) -> Option<&CellValue>;
}

impl RowView for HashMap<String, CellValue> {
    fn cell(&self, column: &str) -> Option<&CellValue> {
        self.get(column)
    }
}

impl RowView for BTreeMap<String, CellValue> {
    fn cell(&self, column: &str) -> Option<&CellValue> {
        self.get(column)
    }
}

/// A row of named cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell. An existing cell under the same name is kept.
    pub fn with_cell(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    /// Insert a cell unless the column is already present.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.entry(column.into()).or_insert_with(|| value.into());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl RowView for Row {
    fn cell(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// A tabular source: its normalized column set and rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub columns: BTreeSet<String>,
    pub rows: Vec<Row>,
}

/// Normalize a raw column header: trim surrounding whitespace and lowercase.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_blank_text_is_empty() {
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::from("   ").is_empty());
        assert!(!CellValue::from("0").is_empty());
        assert!(!CellValue::Number(Decimal::ZERO).is_empty());
    }

    #[test]
    fn test_to_text() {
        assert_eq!(CellValue::from(" ATM ").to_text(), Some(" ATM ".to_string()));
        assert_eq!(
            CellValue::Number(Decimal::from_str("12.50").unwrap()).to_text(),
            Some("12.50".to_string())
        );
        assert_eq!(CellValue::Empty.to_text(), None);
    }

    #[test]
    fn test_from_date_is_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        match CellValue::from(date) {
            CellValue::Date(dt) => assert_eq!(dt.date(), date),
            other => panic!("unexpected cell: {:?}", other),
        }
    }

    #[test]
    fn test_row_keeps_first_duplicate() {
        let row: Row = [("date", "01/01/2024"), ("date", "02/02/2024")]
            .into_iter()
            .collect();

        assert_eq!(row.len(), 1);
        assert_eq!(row.cell("date"), Some(&CellValue::from("01/01/2024")));
        assert_eq!(row.cell("balance"), None);
    }

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(normalize_column_name("  Date "), "date");
        assert_eq!(normalize_column_name("BALANCE"), "balance");
    }
}
