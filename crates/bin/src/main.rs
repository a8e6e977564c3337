//! AURA CLI binary.
//!
//! Loads statement payloads from JSON files, runs the trend engine and prints
//! or exports the result.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use aura::data::catalog::{ItemCategory, items_by_category};
use aura::data::{DataError, Periods, Statement, StatementKind, periods};
use aura::output::{
    EngineConfig, ExportFormat, Exporter, TrendReport, TrendRequest, Unit, build_report,
};
use aura::ratios::{PrecomputedRatios, RatioCategory, RatioKind, ratios_by_category};
use aura::trend::TrendMode;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aura")]
#[command(about = "AURA: financial ratio and trend engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plot raw items and ratios over periods in a display mode
    Trend {
        #[command(flatten)]
        input: InputArgs,

        /// Display mode: value, yoy, qoq or abnormal
        #[arg(long, default_value = "value")]
        mode: TrendMode,

        /// Comma-separated metric keys (item keys or ratio keys)
        #[arg(long, value_delimiter = ',')]
        metrics: Vec<String>,

        /// Anomaly threshold in percent (overrides the config file)
        #[arg(long)]
        threshold: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Compute all ten ratios
    Ratios {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show one statement's values for a single period
    Snapshot {
        /// Statement JSON file
        statement: PathBuf,

        /// Which statement the file holds
        #[arg(long, value_enum, default_value = "balance-sheet")]
        kind: SheetArg,

        /// Period to show, e.g. 2024 or 2025_Q1
        #[arg(long)]
        period: String,
    },

    /// List selectable line items and ratios
    List,
}

#[derive(Args)]
struct InputArgs {
    /// Balance-sheet JSON file
    #[arg(long)]
    balance_sheet: PathBuf,

    /// Income-statement JSON file
    #[arg(long)]
    income_statement: Option<PathBuf>,

    /// Precomputed ratio JSON file; used instead of computing when non-empty
    #[arg(long)]
    ratios: Option<PathBuf>,

    /// Comma-separated periods in display order
    #[arg(long)]
    periods: Option<Periods>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Decimal places, 0 to 15 (overrides the config file)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=15))]
    precision: Option<u32>,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Markdown,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
enum SheetArg {
    BalanceSheet,
    IncomeStatement,
    CashFlow,
}

impl From<SheetArg> for StatementKind {
    fn from(arg: SheetArg) -> Self {
        match arg {
            SheetArg::BalanceSheet => Self::BalanceSheet,
            SheetArg::IncomeStatement => Self::IncomeStatement,
            SheetArg::CashFlow => Self::CashFlow,
        }
    }
}

/// Statements, ratios and settings loaded from the command line.
struct Loaded {
    balance_sheet: Statement,
    income_statement: Statement,
    precomputed: Option<PrecomputedRatios>,
    periods: Periods,
    config: EngineConfig,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Trend {
            input,
            mode,
            metrics,
            threshold,
            output,
        } => {
            let mut loaded = load(&input)?;
            if let Some(threshold) = threshold {
                loaded.config.trend.anomaly_threshold = threshold;
            }
            let request = if metrics.is_empty() {
                TrendRequest {
                    periods: loaded.periods.clone(),
                    mode,
                    ..TrendRequest::default()
                }
            } else {
                TrendRequest::new(loaded.periods.clone(), mode, metrics)
            };
            let report = report(&loaded, &request)?;
            emit(&report, &output)?;
        }
        Commands::Ratios { input, output } => {
            let loaded = load(&input)?;
            let request = TrendRequest::new(
                loaded.periods.clone(),
                TrendMode::Value,
                RatioKind::ALL.map(|kind| kind.key()),
            );
            let report = report(&loaded, &request)?;
            emit(&report, &output)?;
        }
        Commands::Snapshot {
            statement,
            kind,
            period,
        } => {
            let statement = Statement::from_path(kind.into(), &statement)?;
            print_snapshot(&statement, &period);
        }
        Commands::List => list_metrics(),
    }

    Ok(())
}

fn load(input: &InputArgs) -> Result<Loaded, Box<dyn std::error::Error>> {
    let mut config = match &input.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if let Some(precision) = input.precision {
        config.ratios.precision = precision;
        config.trend.precision = precision;
    }

    let balance_sheet = Statement::from_path(StatementKind::BalanceSheet, &input.balance_sheet)?;
    let income_statement = match &input.income_statement {
        Some(path) => Statement::from_path(StatementKind::IncomeStatement, path)?,
        None => Statement::empty(StatementKind::IncomeStatement),
    };
    let precomputed = input
        .ratios
        .as_deref()
        .map(PrecomputedRatios::from_path)
        .transpose()?;

    tracing::info!(
        balance_sheet_rows = balance_sheet.len(),
        income_statement_rows = income_statement.len(),
        precomputed = precomputed.is_some(),
        "loaded statements"
    );

    Ok(Loaded {
        balance_sheet,
        income_statement,
        precomputed,
        periods: input.periods.clone().unwrap_or_else(Periods::default_trend),
        config,
    })
}

fn report(loaded: &Loaded, request: &TrendRequest) -> Result<TrendReport, DataError> {
    build_report(
        request,
        &loaded.balance_sheet,
        &loaded.income_statement,
        loaded.precomputed.as_ref(),
        &loaded.config,
    )
}

fn emit(report: &TrendReport, output: &OutputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let export_format = match output.format {
        OutputFormat::Text | OutputFormat::Markdown => None,
        OutputFormat::Json => Some(ExportFormat::PrettyJson),
        OutputFormat::Csv => Some(ExportFormat::Csv),
    };

    if let (Some(path), Some(format)) = (&output.output, export_format) {
        report.export_to_file(path, format)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let content = match (output.format, export_format) {
        (_, Some(format)) => report.export_to_string(format)?,
        (OutputFormat::Markdown, None) => report.to_markdown(),
        _ => report.to_ascii_table(),
    };

    match &output.output {
        Some(path) => write_text(path, &content)?,
        None => print!("{}", content),
    }
    Ok(())
}

fn write_text(path: &Path, content: &str) -> Result<(), DataError> {
    fs::write(path, content)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn print_snapshot(statement: &Statement, period: &str) {
    println!("\n{} ({}) @ {}", statement.kind, statement.kind.sheet(), periods::label(period));
    println!("{}", "─".repeat(50));
    for (item, value) in statement.snapshot(period) {
        let cell = value.map_or_else(|| "-".to_string(), |v| Unit::Amount.format(v));
        println!("  {:<30} {:>16}", item, cell);
    }
    println!();
}

fn list_metrics() {
    println!("\nLine items (--metrics <key>):");
    println!("─────────────────────────────────────────────────────────────");
    for category in [
        ItemCategory::Asset,
        ItemCategory::Liability,
        ItemCategory::Equity,
        ItemCategory::Income,
    ] {
        println!("  {:?}", category);
        for item in items_by_category(category) {
            println!("    {:<26} {}", item.key, item.label);
        }
    }

    println!("\nRatios (--metrics <key>):");
    println!("─────────────────────────────────────────────────────────────");
    for category in [
        RatioCategory::Solvency,
        RatioCategory::Profitability,
        RatioCategory::Growth,
        RatioCategory::Efficiency,
    ] {
        println!("  {:?}", category);
        for info in ratios_by_category(category) {
            println!(
                "    {:<26} {:<10} {}",
                info.kind.key(),
                info.kind.label(),
                info.description
            );
        }
    }

    println!("\nModes (--mode <mode>):");
    println!("─────────────────────────────────────────────────────────────");
    for mode in TrendMode::ALL {
        println!("    {:<26} {}", mode.as_str(), mode.subtitle());
    }
    println!();
}
