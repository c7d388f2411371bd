//! CSV reader producing normalized tables.

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use super::Result;
use crate::error::TableError;
use crate::models::{normalize_column_name, CellValue, Row, Table};

/// Reads a headed CSV file into a [`Table`].
///
/// Header names are trimmed and lowercased. Every non-blank cell is kept as
/// text; typing is left to the row normalizer.
#[derive(Debug, Clone)]
pub struct CsvTableReader {
    delimiter: u8,
}

impl CsvTableReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Read a table from raw bytes.
    pub fn read(&self, data: &[u8]) -> Result<Table> {
        let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_reader(data);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(normalize_column_name)
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(TableError::MissingHeader);
        }

        let mut table = Table {
            columns: headers.iter().filter(|h| !h.is_empty()).cloned().collect(),
            rows: Vec::new(),
        };

        for record in reader.records() {
            table.rows.push(to_row(&headers, &record?));
        }

        debug!(
            "Read CSV table: {} columns, {} rows",
            table.columns.len(),
            table.rows.len()
        );
        Ok(table)
    }
}

impl Default for CsvTableReader {
    fn default() -> Self {
        Self::new()
    }
}

fn to_row(headers: &[String], record: &StringRecord) -> Row {
    let mut row = Row::new();

    for (i, header) in headers.iter().enumerate() {
        if header.is_empty() {
            continue;
        }

        let cell = match record.get(i) {
            Some(value) if !value.trim().is_empty() => CellValue::Text(value.to_string()),
            _ => CellValue::Empty,
        };
        row.insert(header.clone(), cell);
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RowView;

    #[test]
    fn test_read_normalizes_headers() {
        let data = b"\xEF\xBB\xBF Date ,DESCRIPTION,Debit,Credit,Balance\n15/03/2024,Coffee,4.50,-,95.50\n";
        let table = CsvTableReader::new().read(data).unwrap();

        let columns: Vec<&str> = table.columns.iter().map(String::as_str).collect();
        assert_eq!(columns, ["balance", "credit", "date", "debit", "description"]);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].cell("date"), Some(&CellValue::from("15/03/2024")));
        assert_eq!(table.rows[0].cell("credit"), Some(&CellValue::from("-")));
    }

    #[test]
    fn test_blank_and_short_rows() {
        let data = b"date,description,debit,credit,balance\n,  ,1.00\n";
        let table = CsvTableReader::new().read(data).unwrap();

        let row = &table.rows[0];
        assert_eq!(row.cell("date"), Some(&CellValue::Empty));
        assert_eq!(row.cell("description"), Some(&CellValue::Empty));
        assert_eq!(row.cell("debit"), Some(&CellValue::from("1.00")));
        assert_eq!(row.cell("balance"), Some(&CellValue::Empty));
    }

    #[test]
    fn test_quoted_thousands() {
        let data = b"date,description,debit,credit,balance\n01/02/2024,\"Rent, March\",\"1,200.00\",-,\"3,800.00\"\n";
        let table = CsvTableReader::new().read(data).unwrap();

        assert_eq!(table.rows[0].cell("description"), Some(&CellValue::from("Rent, March")));
        assert_eq!(table.rows[0].cell("debit"), Some(&CellValue::from("1,200.00")));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let data = b"date;description;debit;credit;balance\n01/02/2024;Fee;1.00;-;9.00\n";
        let table = CsvTableReader::new().with_delimiter(b';').read(data).unwrap();

        assert_eq!(table.columns.len(), 5);
        assert_eq!(table.rows[0].cell("description"), Some(&CellValue::from("Fee")));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        assert!(matches!(
            CsvTableReader::new().read(b""),
            Err(TableError::MissingHeader)
        ));
    }
}
