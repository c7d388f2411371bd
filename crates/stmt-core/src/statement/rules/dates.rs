//! Date coercion for statement lines and tabular cells.

use chrono::NaiveDate;

use super::CellParser;
use crate::models::CellValue;

/// Formats tried in order for text date cells.
pub const DEFAULT_DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Multi-format date parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParser {
    formats: Vec<String>,
}

impl DateParser {
    pub fn new() -> Self {
        Self::with_formats(DEFAULT_DATE_FORMATS.iter().copied())
    }

    /// Parser trying `formats` (chrono syntax) in the given order.
    pub fn with_formats<I, S>(formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            formats: formats.into_iter().map(Into::into).collect(),
        }
    }

    pub fn formats(&self) -> &[String] {
        &self.formats
    }
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CellParser for DateParser {
    type Output = NaiveDate;

    fn parse_cell(&self, cell: &CellValue) -> Option<NaiveDate> {
        match cell {
            CellValue::Empty => None,
            CellValue::Date(dt) => Some(dt.date()),
            CellValue::Text(s) => self.parse_str(s),
            CellValue::Number(_) => None,
        }
    }

    fn parse_str(&self, s: &str) -> Option<NaiveDate> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        self.formats
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    }
}

/// Parse a cell with the default format list.
pub fn parse_date(cell: &CellValue) -> Option<NaiveDate> {
    DateParser::new().parse_cell(cell)
}

/// Parse `DD/MM/YYYY` with no fallback formats.
pub fn parse_dmy_strict(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y").ok()
}
