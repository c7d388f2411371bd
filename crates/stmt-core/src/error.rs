//! Error types for the stmt-core library.

use thiserror::Error;

/// Main error type for the stmt library.
#[derive(Error, Debug)]
pub enum StmtError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Tabular (CSV) reading error.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Structural precondition violated by the input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// File type has no extraction pipeline.
    #[error("unsupported file type: {0}")]
    UnsupportedFormat(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to reading tabular sources.
#[derive(Error, Debug)]
pub enum TableError {
    /// The CSV reader rejected the input.
    #[error("failed to read CSV: {0}")]
    Csv(String),

    /// The source has no header row.
    #[error("missing header row")]
    MissingHeader,
}

impl From<csv::Error> for TableError {
    fn from(e: csv::Error) -> Self {
        TableError::Csv(e.to_string())
    }
}

/// Structural validation failures. Processing stops for the whole input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required columns are absent from a tabular source.
    #[error("missing required columns: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// No filename was supplied, so the file type cannot be determined.
    #[error("no filename provided")]
    MissingFilename,
}

/// Result type for the stmt library.
pub type Result<T> = std::result::Result<T, StmtError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_message() {
        let err = ValidationError::MissingColumns {
            missing: vec!["credit".to_string(), "balance".to_string()],
        };
        assert_eq!(err.to_string(), "missing required columns: credit, balance");
    }

    #[test]
    fn test_validation_converts_into_stmt_error() {
        let err: StmtError = ValidationError::MissingFilename.into();
        assert!(matches!(err, StmtError::Validation(ValidationError::MissingFilename)));
    }
}
