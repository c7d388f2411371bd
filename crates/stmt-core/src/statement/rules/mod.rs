//! Rule-based coercion helpers shared by the statement parsers.

pub mod amounts;
pub mod dates;
pub mod noise;
pub mod patterns;

pub use amounts::{format_amount, parse_amount, AmountParser, PLACEHOLDER};
pub use dates::{parse_date, parse_dmy_strict, DateParser, DEFAULT_DATE_FORMATS};
pub use noise::{NoiseFilter, DEFAULT_NOISE_TOKENS, EXTENDED_NOISE_TOKENS};
pub use patterns::*;

use crate::models::CellValue;

/// Trait for lenient cell coercions.
///
/// Implementations never fail: anything they cannot interpret is `None`.
pub trait CellParser {
    /// The type of value this parser produces.
    type Output;

    /// Coerce a tabular cell.
    fn parse_cell(&self, cell: &CellValue) -> Option<Self::Output>;

    /// Coerce a raw string.
    fn parse_str(&self, s: &str) -> Option<Self::Output>;
}
