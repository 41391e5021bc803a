//! CLI entry point for the data profiling engine.

use anyhow::{Result, anyhow};
use clap::Parser;
use eda_core::{ProfileReport, ProfilingConfig, flatten_summary_for_print};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Exploratory profiling for tabular data",
    long_about = "Profile a CSV file: column summaries, missing values, correlations,\n\
                  top categories and data quality flags.\n\n\
                  EXAMPLES:\n  \
                  # Human-readable overview\n  \
                  eda-cli -i data.csv\n\n  \
                  # Full JSON report\n  \
                  eda-cli -i data.csv --json\n\n  \
                  # Semicolon-separated file with custom thresholds\n  \
                  eda-cli -i data.csv --separator ';' --config thresholds.json"
)]
struct Args {
    /// Path to the CSV file to profile
    #[arg(short, long)]
    input: PathBuf,

    /// Field separator (single ASCII character)
    #[arg(short, long, default_value = ",")]
    separator: char,

    /// Number of values shown per categorical column
    ///
    /// Overrides `top_k` from the config file
    #[arg(long)]
    top_k: Option<usize>,

    /// Skip categorical columns with more distinct values than this
    ///
    /// Overrides `max_categories` from the config file
    #[arg(long)]
    max_categories: Option<usize>,

    /// JSON file with profiling thresholds
    ///
    /// Missing keys fall back to their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,

    /// Output JSON to stdout instead of human-readable summary
    ///
    /// Disables all logging; only outputs the report.
    /// Useful for piping to other tools: `... --json | jq .quality_flags`
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !args.input.exists() {
        return Err(anyhow!("Input file not found: {}", args.input.display()));
    }

    let config = load_config(&args)?;
    debug!("Using config: {:?}", config);

    info!("Loading dataset from: {}", args.input.display());
    let data = load_csv(&args.input, args.separator)?;
    info!("Dataset loaded successfully: {:?}", data.shape());

    let report = ProfileReport::build(&data, &config)?;

    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    print_overview(&args, &report)
}

/// Read the optional config file, then apply command-line overrides.
fn load_config(args: &Args) -> Result<ProfilingConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| anyhow!("Failed to read config {}: {}", path.display(), e))?;
            ProfilingConfig::from_json(&content)?
        }
        None => ProfilingConfig::default(),
    };

    if let Some(k) = args.top_k {
        config.top_k = k;
    }
    if let Some(max) = args.max_categories {
        config.max_categories = max;
    }

    config.validate()?;
    Ok(config)
}

fn load_csv(path: &PathBuf, separator: char) -> Result<DataFrame> {
    if !separator.is_ascii() {
        return Err(anyhow!("Separator must be a single ASCII character, got '{}'", separator));
    }

    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(separator as u8)
                .with_quote_char(Some(b'"')),
        )
        .try_into_reader_with_file_path(Some(path.clone()))?
        .finish()?;

    Ok(df)
}

/// Print the human-readable overview.
///
/// Note: This function uses `println!` intentionally for user-facing CLI output.
/// Unlike logging (`info!`, `debug!`), this output should always be visible
/// regardless of log level settings.
fn print_overview(args: &Args, report: &ProfileReport) -> Result<()> {
    println!("\n{}", "=".repeat(80));
    println!("DATA PROFILE");
    println!("{}\n", "=".repeat(80));

    println!("DATASET OVERVIEW");
    println!("{}", "-".repeat(40));
    println!("  File: {}", args.input.display());
    println!("  Rows: {}", report.summary.n_rows);
    println!("  Columns: {}", report.summary.n_cols);
    println!("  Generated: {}", report.generated_at);
    println!();

    println!("COLUMN SUMMARY");
    println!("{}", "-".repeat(40));
    println!("{}", flatten_summary_for_print(&report.summary)?);
    println!();

    println!("MISSING VALUES");
    println!("{}", "-".repeat(40));
    println!("{:<24} {:>10} {:>10}", "Column", "Missing", "Share %");
    for entry in &report.missing.entries {
        println!(
            "{:<24} {:>10} {:>10.1}",
            truncate_str(&entry.name, 23),
            entry.missing_count,
            entry.missing_share * 100.0
        );
    }
    println!();

    println!("CORRELATIONS");
    println!("{}", "-".repeat(40));
    if report.correlation.is_empty() {
        println!("  Fewer than two numeric columns");
    } else {
        println!("{}", report.correlation.to_dataframe()?);
    }
    println!();

    println!("TOP CATEGORIES");
    println!("{}", "-".repeat(40));
    if report.top_categories.is_empty() {
        println!("  No categorical columns within the distinct-value limit");
    } else {
        for ranking in &report.top_categories.rankings {
            println!("  {}:", ranking.column);
            for entry in &ranking.entries {
                println!(
                    "    {:<30} {:>8} ({:.1}%)",
                    truncate_str(&entry.value, 29),
                    entry.count,
                    entry.share * 100.0
                );
            }
        }
    }
    println!();

    let flags = &report.quality_flags;
    println!("DATA QUALITY");
    println!("{}", "-".repeat(40));
    println!("  Quality score: {:.2}", flags.quality_score);
    println!("  Too few rows: {}", flags.too_few_rows);
    println!("  Too many columns: {}", flags.too_many_columns);
    println!(
        "  Too many missing: {} (max share {:.1}%)",
        flags.too_many_missing,
        flags.max_missing_share * 100.0
    );
    print_flag("Constant columns", &flags.constant_columns);
    print_flag(
        "High-cardinality categoricals",
        &flags.high_cardinality_categoricals,
    );
    print_flag("Zero-heavy columns", &flags.zero_heavy_columns);
    print_flag("Suspicious ID duplicates", &flags.suspicious_id_duplicates);
    println!();

    Ok(())
}

fn print_flag(label: &str, columns: &[String]) {
    if columns.is_empty() {
        println!("  {}: none", label);
    } else {
        println!("  {}: {}", label, columns.join(", "));
    }
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
