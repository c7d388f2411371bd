//! Line-oriented parser for text extracted from statement pages.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::models::config::LineConfig;
use crate::models::TransactionRecord;

use super::rules::{parse_dmy_strict, NoiseFilter, PLACEHOLDER, TRANSACTION_LINE};

/// Parses `DATE DESCRIPTION DEBIT CREDIT BALANCE` lines into transactions.
///
/// Lines that are blank, contain a noise token, do not match the column
/// layout, or carry an impossible date are skipped. Skipping is never an
/// error.
#[derive(Debug, Clone, Default)]
pub struct LineParser {
    noise: NoiseFilter,
}

impl LineParser {
    /// Create a parser with the minimal noise token set.
    pub fn new() -> Self {
        Self {
            noise: NoiseFilter::new(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &LineConfig) -> Self {
        let mut noise = NoiseFilter::with_tokens(&config.noise_tokens);
        if config.extended_noise_tokens {
            noise = noise.with_extra_tokens(super::rules::EXTENDED_NOISE_TOKENS.iter().copied());
        }
        Self { noise }
    }

    /// Replace the noise filter.
    pub fn with_noise_filter(mut self, noise: NoiseFilter) -> Self {
        self.noise = noise;
        self
    }

    pub fn noise_filter(&self) -> &NoiseFilter {
        &self.noise
    }

    /// Parse physical lines in order.
    pub fn parse_lines<I, S>(&self, lines: I) -> Vec<TransactionRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, line) in lines.into_iter().enumerate() {
            match self.parse_line(line.as_ref()) {
                Some(record) => records.push(record),
                None => {
                    trace!("Skipped line {}: {:?}", index + 1, line.as_ref());
                    skipped += 1;
                }
            }
        }

        debug!("Parsed {} transactions, skipped {} lines", records.len(), skipped);
        records
    }

    /// Parse page texts in page order, splitting each page into lines.
    pub fn parse_pages<I, S>(&self, pages: I) -> Vec<TransactionRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pages: Vec<S> = pages.into_iter().collect();
        self.parse_lines(pages.iter().flat_map(|page| page.as_ref().lines()))
    }

    /// Parse a block of text, one transaction per line.
    pub fn parse_text(&self, text: &str) -> Vec<TransactionRecord> {
        self.parse_lines(text.lines())
    }

    /// Parse a single line, `None` if it is not a transaction.
    pub fn parse_line(&self, line: &str) -> Option<TransactionRecord> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        if let Some(token) = self.noise.matching_token(line) {
            trace!("Noise token {:?} in line", token);
            return None;
        }

        let caps = TRANSACTION_LINE.captures(line)?;

        let date = parse_dmy_strict(&caps["date"])?;
        let debit = parse_column(&caps["debit"])?;
        let credit = parse_column(&caps["credit"])?;
        let balance = parse_column(&caps["balance"])??;

        Some(TransactionRecord {
            date: Some(date),
            description: Some(caps["description"].trim().to_string()),
            debit,
            credit,
            balance: Some(balance),
        })
    }
}

/// Parse a matched amount column.
///
/// The outer `Option` is `None` when the digits do not form a decimal (the
/// line is dropped); the inner one is `None` for the placeholder.
fn parse_column(s: &str) -> Option<Option<Decimal>> {
    if s == PLACEHOLDER {
        return Some(None);
    }

    Decimal::from_str(&s.replace(',', "")).ok().map(Some)
}

/// Parse lines with the default configuration.
pub fn parse_lines<I, S>(lines: I) -> Vec<TransactionRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    LineParser::new().parse_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_single_transaction() {
        let records = parse_lines(["01/10/2025 POS AMAZON 500.00 - 10,000.00"]);

        assert_eq!(records.len(), 1);
        let txn = &records[0];
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2025, 10, 1));
        assert_eq!(txn.description.as_deref(), Some("POS AMAZON"));
        assert_eq!(txn.debit, Some(dec("500.00")));
        assert_eq!(txn.credit, None);
        assert_eq!(txn.balance, Some(dec("10000.00")));
    }

    #[test]
    fn test_noise_lines_rejected() {
        assert!(parse_lines(["Opening Balance 1000.00"]).is_empty());
        assert!(parse_lines(["Date Description Debit Credit Balance"]).is_empty());
        assert!(parse_lines(["Page 1 of 3"]).is_empty());
        // a transaction-shaped line is still noise when it carries a token
        assert!(parse_lines(["31/10/2025 CLOSING FEE 5.00 - 995.00"]).is_empty());
    }

    #[test]
    fn test_invalid_date_skipped() {
        let records = parse_lines([
            "01/13/2025 BAD MONTH 10.00 - 990.00",
            "32/01/2025 BAD DAY 10.00 - 980.00",
            "02/01/2025 GOOD 10.00 - 970.00",
        ]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description.as_deref(), Some("GOOD"));
    }

    #[test]
    fn test_non_matching_lines_skipped() {
        let records = parse_lines([
            "",
            "    ",
            "Thank you for banking with us",
            "01/10/2025 NO AMOUNTS",
            "01/10/2025 SHORT 5.0 - 100.00",
        ]);

        assert!(records.is_empty());
    }

    #[test]
    fn test_whitespace_and_credit_columns() {
        let records =
            parse_lines(["   05/11/2025   SALARY  ACME LTD   -   45,000.00   55,000.00   "]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description.as_deref(), Some("SALARY  ACME LTD"));
        assert_eq!(records[0].debit, None);
        assert_eq!(records[0].credit, Some(dec("45000.00")));
        assert_eq!(records[0].balance, Some(dec("55000.00")));
    }

    #[test]
    fn test_order_preserved() {
        let records = parse_lines([
            "03/10/2025 THIRD 1.00 - 97.00",
            "Page 1",
            "01/10/2025 FIRST 1.00 - 99.00",
            "02/10/2025 SECOND - 1.00 100.00",
        ]);

        let descriptions: Vec<_> = records
            .iter()
            .map(|r| r.description.as_deref().unwrap())
            .collect();
        assert_eq!(descriptions, ["THIRD", "FIRST", "SECOND"]);
    }

    #[test]
    fn test_parse_pages() {
        let pages = vec![
            "XYZ Bank\n01/10/2025 ATM WITHDRAWAL 2,000.00 - 8,000.00\n".to_string(),
            "Page 2\r\n02/10/2025 REFUND - 150.00 8,150.00".to_string(),
        ];

        let records = LineParser::new().parse_pages(&pages);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].credit, Some(dec("150.00")));
    }

    #[test]
    fn test_config_tokens() {
        let config = LineConfig {
            noise_tokens: vec!["fee".to_string()],
            extended_noise_tokens: false,
        };
        let parser = LineParser::from_config(&config);

        assert!(parser.parse_text("01/10/2025 CARD FEE 5.00 - 95.00").is_empty());
        // "date" is no longer a token with a custom list
        assert_eq!(parser.parse_text("01/10/2025 UPDATE ADDR 0.00 - 95.00").len(), 1);
    }

    #[test]
    fn test_idempotent() {
        let lines = [
            "01/10/2025 POS AMAZON 500.00 - 10,000.00",
            "02/10/2025 NEFT IN - 1,000.00 11,000.00",
        ];
        let parser = LineParser::new();

        assert_eq!(parser.parse_lines(lines), parser.parse_lines(lines));
    }

    #[test]
    fn test_parser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LineParser>();
    }
}
