//! Process command - extract transactions from a single statement file.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use stmt_core::models::{Statement, StatementExtraction, TransactionRecord};
use stmt_core::statement::rules::format_amount;
use stmt_core::StatementExtractor;

use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input statement file (PDF or CSV)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Check running balances and report gaps
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text table
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Reading file...");

    let data = fs::read(&args.input)?;
    let filename = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    pb.set_message("Extracting transactions...");
    let extractor = StatementExtractor::from_config(&config);
    let extraction = extractor.extract(&data, &filename)?;

    pb.finish_and_clear();

    if args.validate {
        let issues = Statement::new(extraction.transactions.clone()).validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_extraction(&extraction, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} {} - output written to {}",
            style("✓").green(),
            extraction.message,
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_extraction(
    extraction: &StatementExtraction,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(extraction)?),
        OutputFormat::Csv => format_csv(&extraction.transactions),
        OutputFormat::Text => Ok(format_text(extraction)),
    }
}

fn format_csv(transactions: &[TransactionRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["date", "description", "debit", "credit", "balance"])?;

    for txn in transactions {
        wtr.write_record([
            txn.date.map(|d| d.to_string()).unwrap_or_default(),
            txn.description.clone().unwrap_or_default(),
            txn.debit.map(|d| d.to_string()).unwrap_or_default(),
            txn.credit.map(|c| c.to_string()).unwrap_or_default(),
            txn.balance.map(|b| b.to_string()).unwrap_or_default(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(extraction: &StatementExtraction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Statement: {}\n", extraction.filename));
    output.push_str(&format!("{}\n\n", extraction.message));

    output.push_str(&format!(
        "{:<10}  {:<32}  {:>14}  {:>14}  {:>14}\n",
        "Date", "Description", "Debit", "Credit", "Balance"
    ));

    let amount = |value: Option<rust_decimal::Decimal>| {
        value.map(format_amount).unwrap_or_else(|| "-".to_string())
    };

    for txn in &extraction.transactions {
        output.push_str(&format!(
            "{:<10}  {:<32}  {:>14}  {:>14}  {:>14}\n",
            txn.date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()),
            txn.description.as_deref().unwrap_or(""),
            amount(txn.debit),
            amount(txn.credit),
            amount(txn.balance),
        ));
    }

    let statement = Statement::new(extraction.transactions.clone());
    output.push('\n');
    let total = |value: Option<rust_decimal::Decimal>| {
        value.map(format_amount).unwrap_or_else(|| "overflow".to_string())
    };
    output.push_str(&format!("Total debit:  {}\n", total(statement.total_debit())));
    output.push_str(&format!("Total credit: {}\n", total(statement.total_credit())));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use stmt_core::SourceType;

    fn extraction() -> StatementExtraction {
        StatementExtraction {
            filename: "oct.pdf".to_string(),
            source_type: SourceType::Pdf,
            transactions: vec![TransactionRecord {
                date: NaiveDate::from_ymd_opt(2025, 10, 1),
                description: Some("POS AMAZON".to_string()),
                debit: Some(Decimal::new(50000, 2)),
                credit: None,
                balance: Some(Decimal::new(1000000, 2)),
            }],
            message: "Parsed 1 transactions".to_string(),
            processing_time_ms: 3,
        }
    }

    #[test]
    fn test_format_csv() {
        let output = format_extraction(&extraction(), OutputFormat::Csv).unwrap();
        assert_eq!(
            output,
            "date,description,debit,credit,balance\n2025-10-01,POS AMAZON,500.00,,10000.00\n"
        );
    }

    #[test]
    fn test_format_text() {
        let output = format_extraction(&extraction(), OutputFormat::Text).unwrap();
        assert!(output.contains("POS AMAZON"));
        assert!(output.contains("10,000.00"));
        assert!(output.contains("Total debit:  500.00"));
    }

    #[test]
    fn test_format_text_total_overflow() {
        let mut extraction = extraction();
        let mut huge = extraction.transactions[0].clone();
        huge.debit = Decimal::from_str("50000000000000000000000000000").ok();
        extraction.transactions = vec![huge.clone(), huge];

        let output = format_extraction(&extraction, OutputFormat::Text).unwrap();
        assert!(output.contains("Total debit:  overflow"));
        assert!(output.contains("Total credit: 0.00"));
    }

    #[test]
    fn test_format_json() {
        let output = format_extraction(&extraction(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["source_type"], "pdf");
        assert_eq!(value["transactions"][0]["balance"], "10000.00");
    }
}
