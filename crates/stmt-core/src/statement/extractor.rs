//! File-level dispatcher selecting the extraction pipeline per file type.

use std::time::Instant;

use tracing::{debug, info};

use crate::error::{Result, StmtError, ValidationError};
use crate::models::config::StmtConfig;
use crate::models::{SourceType, StatementExtraction, TransactionRecord};
use crate::pdf::{is_pdf_magic, PdfExtractor, PdfProcessor};
use crate::tabular::CsvTableReader;

use super::{LineParser, RowNormalizer};

/// Extracts transactions from statement files.
#[derive(Debug, Clone, Default)]
pub struct StatementExtractor {
    lines: LineParser,
    rows: RowNormalizer,
    max_pages: usize,
}

impl StatementExtractor {
    /// Create an extractor with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &StmtConfig) -> Self {
        Self {
            lines: LineParser::from_config(&config.lines),
            rows: RowNormalizer::from_config(&config.table),
            max_pages: config.pdf.max_pages,
        }
    }

    /// Determine the source type from the filename extension, falling back
    /// to content sniffing for PDFs.
    pub fn detect(data: &[u8], filename: &str) -> Result<SourceType> {
        if filename.trim().is_empty() {
            return Err(ValidationError::MissingFilename.into());
        }

        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "pdf" => Ok(SourceType::Pdf),
            "csv" => Ok(SourceType::Csv),
            _ if is_pdf_magic(data) => Ok(SourceType::Pdf),
            _ => Err(StmtError::UnsupportedFormat(extension)),
        }
    }

    /// Extract transactions from file contents.
    pub fn extract(&self, data: &[u8], filename: &str) -> Result<StatementExtraction> {
        let start = Instant::now();
        let source_type = Self::detect(data, filename)?;

        info!("Extracting {} as {}", filename, source_type.as_str());

        let transactions = match source_type {
            SourceType::Pdf => self.extract_pdf(data)?,
            SourceType::Csv => self.extract_csv(data)?,
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            "Extracted {} transactions from {} in {}ms",
            transactions.len(),
            filename,
            processing_time_ms
        );

        Ok(StatementExtraction {
            filename: filename.to_string(),
            source_type,
            message: format!("Parsed {} transactions", transactions.len()),
            transactions,
            processing_time_ms,
        })
    }

    /// Run the PDF pipeline: page text, then line parsing.
    pub fn extract_pdf(&self, data: &[u8]) -> Result<Vec<TransactionRecord>> {
        let mut pdf = PdfExtractor::new().with_max_pages(self.max_pages);
        pdf.load(data)?;

        let content = pdf.extract_all()?;
        Ok(self.lines.parse_pages(content.page_texts()))
    }

    /// Run the CSV pipeline: table reading, then row normalization.
    pub fn extract_csv(&self, data: &[u8]) -> Result<Vec<TransactionRecord>> {
        let table = CsvTableReader::new().read(data)?;
        Ok(self.rows.normalize_table(&table)?)
    }
}
