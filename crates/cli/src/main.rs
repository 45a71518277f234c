//! Command-line front end for the boleto extraction pipeline.
//!
//! A thin shim over `boleto-core` and `boleto-extract`: flags map to the
//! extraction sources, results print as a plain listing or a JSON report.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use boleto_core::{bank_name, format_number, is_valid_barcode, Barcode, LinhaDigitavel};
use boleto_extract::{
    extract, CandidateSource, Channel, DecodedBarcodes, Extraction, RawDump, TextBlocks,
};

const AFTER_HELP: &str = r#"EXAMPLES:
  # Extract from a document (embedded text first, raw bytes as fallback)
  boleto extract fatura.pdf

  # Payloads from an external barcode reader take priority
  boleto extract fatura.pdf --barcode 19797116900000386000000004572849356277103564

  # Punctuated listing, or a JSON report
  boleto extract fatura.pdf --format
  boleto extract fatura.pdf --json

  # One-off checks
  boleto validate 19797116900000386000000004572849356277103564
  boleto convert 19797116900000386000000004572849356277103564
  boleto format 19790000050457284935662771035649711690000038600
"#;

/// Find and normalize Brazilian boleto numbers.
#[derive(Parser, Debug)]
#[command(
    name = "boleto",
    version,
    about = "Extract boleto numbers from Brazilian payment slips",
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Enable debug-level logs (stderr).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract boleto numbers from a document.
    Extract(ExtractArgs),
    /// Check whether a number is a valid 44-digit barcode payload.
    Validate { number: String },
    /// Convert a 44-digit barcode payload to its 47-digit typeable line.
    Convert { barcode: String },
    /// Punctuate a 47-digit typeable line for display.
    Format { number: String },
}

#[derive(clap::Args, Debug)]
struct ExtractArgs {
    /// Document to scan. Any file works: embedded text and the raw bytes
    /// are both tried.
    file: PathBuf,

    /// Barcode payload decoded by an external reader; repeatable. These
    /// form the highest-priority channel.
    #[arg(long = "barcode", value_name = "PAYLOAD")]
    barcodes: Vec<String>,

    /// Print the punctuated form instead of the plain 47-digit lines.
    #[arg(short, long)]
    format: bool,

    /// Emit a JSON report instead of the human-readable listing.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Extract(args) => run_extract(args),
        Command::Validate { number } => Ok(run_validate(&number)),
        Command::Convert { barcode } => run_convert(&barcode),
        Command::Format { number } => {
            println!("{}", format_number(&number));
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ── extract ──────────────────────────────────────────────────────────────────

fn run_extract(args: ExtractArgs) -> Result<ExitCode> {
    let ExtractArgs {
        file,
        barcodes,
        format,
        json,
    } = args;

    if !file.exists() {
        bail!("File not found: {}", file.display());
    }
    let bytes = fs::read(&file).with_context(|| format!("Failed to read {}", file.display()))?;
    tracing::info!("Scanning {} ({} bytes)", file.display(), bytes.len());

    // Channel order: reader payloads, then embedded text (when the file is
    // valid UTF-8), then the raw byte dump.
    let decoded = DecodedBarcodes::new(barcodes);
    let text = std::str::from_utf8(&bytes)
        .ok()
        .map(|t| TextBlocks::new(vec![t.to_string()]));
    let raw = RawDump::new(bytes);

    let mut sources: Vec<&dyn CandidateSource> = vec![&decoded];
    if let Some(ref text) = text {
        sources.push(text);
    }
    sources.push(&raw);

    let extraction = extract(&sources);

    if extraction.is_empty() {
        tracing::warn!("No boleto numbers found");
    } else if let Some(channel) = extraction.channel {
        tracing::info!(
            "Found {} boleto number(s) via the {channel} channel",
            extraction.numbers.len()
        );
    }

    if json {
        print_json_report(&extraction)?;
    } else {
        print_report(&extraction, format);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_report(extraction: &Extraction, formatted: bool) {
    if extraction.is_empty() {
        println!("No boleto numbers found.");
        println!();
        println!("Possible reasons:");
        println!("- the document is encrypted or password protected");
        println!("- the document contains only images (no embedded text)");
        println!("- the boleto number is not in a recognized format");
        return;
    }

    println!();
    println!("Found {} boleto number(s):", extraction.numbers.len());
    println!("{}", "-".repeat(50));
    for (i, number) in extraction.numbers.iter().enumerate() {
        if formatted {
            println!("{}. {}", i + 1, number.formatted());
        } else {
            println!("{}. {number}", i + 1);
        }
    }
    println!("{}", "-".repeat(50));
}

#[derive(Serialize)]
struct Report<'a> {
    count: usize,
    channel: Option<Channel>,
    numbers: &'a [LinhaDigitavel],
    formatted: Vec<String>,
}

fn print_json_report(extraction: &Extraction) -> Result<()> {
    let report = Report {
        count: extraction.numbers.len(),
        channel: extraction.channel,
        numbers: &extraction.numbers,
        formatted: extraction.numbers.iter().map(|n| n.formatted()).collect(),
    };
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}

// ── validate / convert ───────────────────────────────────────────────────────

fn run_validate(number: &str) -> ExitCode {
    if is_valid_barcode(number) {
        match bank_name(&number[..3]) {
            Some(name) => println!("Valid boleto barcode ({name})"),
            None => println!("Valid boleto barcode"),
        }
        ExitCode::SUCCESS
    } else {
        println!("Not a valid boleto barcode: expected exactly 44 digits");
        ExitCode::FAILURE
    }
}

fn run_convert(barcode: &str) -> Result<ExitCode> {
    let parsed = Barcode::parse(barcode)
        .with_context(|| format!("Not a 44-digit barcode payload: '{barcode}'"))?;
    match parsed.to_linha_digitavel() {
        Some(linha) => {
            println!("{linha}");
            Ok(ExitCode::SUCCESS)
        }
        None => bail!("Convênio/arrecadação barcodes have no linha digitável"),
    }
}
