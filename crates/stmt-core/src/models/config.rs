//! Configuration structures for the extraction pipelines.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StmtError};
use crate::statement::rules::dates::DEFAULT_DATE_FORMATS;
use crate::statement::rules::noise::DEFAULT_NOISE_TOKENS;

/// Main configuration for the stmt pipelines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StmtConfig {
    /// Line-oriented text parser configuration.
    pub lines: LineConfig,

    /// Tabular row normalizer configuration.
    pub table: TableConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// Text line parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineConfig {
    /// Lines containing any of these tokens (case-insensitive) are skipped.
    pub noise_tokens: Vec<String>,

    /// Also skip the longer header phrases ("bank statement", ...).
    pub extended_noise_tokens: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            noise_tokens: DEFAULT_NOISE_TOKENS.iter().map(|t| t.to_string()).collect(),
            extended_noise_tokens: false,
        }
    }
}

/// Tabular normalizer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// chrono format strings tried in order for text date cells.
    pub date_formats: Vec<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            date_formats: DEFAULT_DATE_FORMATS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to read (0 = unlimited).
    pub max_pages: usize,
}

impl StmtConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| StmtError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| StmtError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
