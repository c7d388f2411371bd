//! Transaction and statement data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single normalized statement transaction.
///
/// Built once per accepted line or row and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Posting date, absent when missing or unparseable.
    pub date: Option<NaiveDate>,

    /// Free-text description, trimmed.
    pub description: Option<String>,

    /// Money leaving the account. Absent (not zero) for the `-` placeholder.
    pub debit: Option<Decimal>,

    /// Money entering the account. Same absence rules as `debit`.
    pub credit: Option<Decimal>,

    /// Running balance after the transaction.
    pub balance: Option<Decimal>,
}

/// Where the transactions of an extraction came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    /// Text extracted from PDF pages.
    Pdf,
    /// Rows read from a CSV file.
    Csv,
}

impl SourceType {
    /// Short lowercase name, as used for file extensions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }
}

/// Result of extracting one statement file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementExtraction {
    /// Name of the source file.
    pub filename: String,

    /// Pipeline that produced the transactions.
    pub source_type: SourceType,

    /// Extracted transactions in source order.
    pub transactions: Vec<TransactionRecord>,

    /// Human-readable outcome.
    pub message: String,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// An ordered list of transactions with statement-level checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub transactions: Vec<TransactionRecord>,
}

impl Statement {
    pub fn new(transactions: Vec<TransactionRecord>) -> Self {
        Self { transactions }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all present debits, `None` if the sum overflows.
    pub fn total_debit(&self) -> Option<Decimal> {
        checked_total(self.transactions.iter().filter_map(|t| t.debit))
    }

    /// Sum of all present credits, `None` if the sum overflows.
    pub fn total_credit(&self) -> Option<Decimal> {
        checked_total(self.transactions.iter().filter_map(|t| t.credit))
    }

    /// Check the statement and return any issues found.
    ///
    /// Issues are advisory. Missing dates are reported per record, and each
    /// pair of consecutive balances must agree with the debit and credit
    /// between them to within one cent.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        let tolerance = Decimal::new(1, 2);

        for (i, txn) in self.transactions.iter().enumerate() {
            if txn.date.is_none() {
                issues.push(format!("Transaction {} has no date", i + 1));
            }
        }

        for (i, pair) in self.transactions.windows(2).enumerate() {
            let (prev, cur) = (&pair[0], &pair[1]);
            let (Some(prev_balance), Some(balance)) = (prev.balance, cur.balance) else {
                continue;
            };

            let difference = prev_balance
                .checked_sub(cur.debit.unwrap_or_default())
                .and_then(|b| b.checked_add(cur.credit.unwrap_or_default()))
                .and_then(|expected| expected.checked_sub(balance).map(|d| (expected, d)));

            let Some((expected, difference)) = difference else {
                issues.push(format!(
                    "Transaction {} running balance cannot be computed (overflow)",
                    i + 2
                ));
                continue;
            };

            if difference.abs() > tolerance {
                issues.push(format!(
                    "Transaction {} balance ({}) differs from running balance ({})",
                    i + 2,
                    balance,
                    expected
                ));
            }
        }

        issues
    }
}

fn checked_total(mut amounts: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    amounts.try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
}

impl From<Vec<TransactionRecord>> for Statement {
    fn from(transactions: Vec<TransactionRecord>) -> Self {
        Self::new(transactions)
    }
}
