//! Common regex patterns for statement line extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // DATE DESCRIPTION DEBIT CREDIT BALANCE, whole line
    pub static ref TRANSACTION_LINE: Regex = Regex::new(concat!(
        r"^(?P<date>\d{2}/\d{2}/\d{4})\s+",
        r"(?P<description>.+?)\s+",
        r"(?P<debit>[\d,]+\.\d{2}|-)\s+",
        r"(?P<credit>[\d,]+\.\d{2}|-)\s+",
        r"(?P<balance>[\d,]+\.\d{2})$"
    )).unwrap();
}
