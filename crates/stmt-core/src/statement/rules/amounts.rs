//! Currency-string coercion for statement amounts.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::CellParser;
use crate::models::CellValue;

/// Literal used by statements for "no value".
pub const PLACEHOLDER: &str = "-";

/// Lenient amount parser: blanks, the placeholder, and garbage are all `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AmountParser;

impl AmountParser {
    pub fn new() -> Self {
        Self
    }
}

impl CellParser for AmountParser {
    type Output = Decimal;

    fn parse_cell(&self, cell: &CellValue) -> Option<Decimal> {
        match cell {
            CellValue::Empty => None,
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => self.parse_str(s),
            CellValue::Date(_) => None,
        }
    }

    fn parse_str(&self, s: &str) -> Option<Decimal> {
        let s = s.trim();
        if s.is_empty() || s == PLACEHOLDER {
            return None;
        }

        let s = s.replace(',', "");
        Decimal::from_str(&s)
            .or_else(|_| Decimal::from_scientific(&s))
            .ok()
    }
}

/// Parse a cell as an amount.
pub fn parse_amount(cell: &CellValue) -> Option<Decimal> {
    AmountParser.parse_cell(cell)
}

/// Format an amount as `1,234.56`.
pub fn format_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.abs());
    let (integer_part, decimal_part) = s.split_once('.').unwrap_or((s.as_str(), "00"));

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    if amount.is_sign_negative() && !amount.is_zero() {
        formatted.push('-');
    }

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    format!("{}.{}", formatted, decimal_part)
}
