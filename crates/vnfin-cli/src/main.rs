//! vnfin CLI binary.
//!
//! Fetches a financial statement for a Vietnamese listed company and prints it
//! as a table, CSV or JSON.

mod export;

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use export::OutputFormat;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use vnfin::{
    PeriodKind, ReportingPolicy, StatementError, StatementRequest, StatementService,
    VNDIRECT_BASE_URL, VndirectProvider, expand,
};

#[derive(Parser)]
#[command(name = "vnfin")]
#[command(about = "Normalized financial statements for Vietnamese listed companies", long_about = None)]
#[command(version)]
struct Cli {
    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and normalize one financial statement
    Statement {
        /// Ticker symbol (e.g. VCB, FPT)
        symbol: String,

        /// Statement type: BS, P&L (KQKD, IC) or CF (LCTT)
        #[arg(short = 't', long = "type", default_value = "BS")]
        statement_type: String,

        /// Period kind: YEAR or QUARTER
        #[arg(short, long, default_value = "YEAR")]
        period: String,

        /// Number of trailing years
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        years: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Prefix CSV output with a UTF-8 byte order mark
        #[arg(long)]
        bom: bool,

        /// VNDirect API root
        #[arg(long, env = "VNFIN_BASE_URL", default_value = VNDIRECT_BASE_URL)]
        base_url: String,

        /// HTTP timeout in seconds
        #[arg(
            long,
            env = "VNFIN_TIMEOUT",
            default_value_t = 30,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        timeout: u64,

        /// Comma-separated tickers to treat as banks, replacing the built-in list
        #[arg(long, value_delimiter = ',')]
        bank_symbols: Vec<String>,
    },

    /// List the fiscal periods a lookback expands to
    Periods {
        /// Period kind: YEAR or QUARTER
        #[arg(short, long, default_value = "YEAR")]
        period: String,

        /// Number of trailing years
        #[arg(short, long, default_value_t = 2, allow_negative_numbers = true)]
        years: i64,
    },
}

/// Options for the `statement` subcommand.
struct StatementArgs {
    request: StatementRequest,
    format: OutputFormat,
    output: Option<PathBuf>,
    bom: bool,
    base_url: String,
    timeout: u64,
    bank_symbols: Vec<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to initialize logging: {e}");
    }
}

async fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Statement {
            symbol,
            statement_type,
            period,
            years,
            format,
            output,
            bom,
            base_url,
            timeout,
            bank_symbols,
        } => {
            let request = StatementRequest::from_tokens(&symbol, &statement_type, &period, years)?;
            fetch_statement(StatementArgs {
                request,
                format,
                output,
                bom,
                base_url,
                timeout,
                bank_symbols,
            })
            .await?;
        }
        Commands::Periods { period, years } => list_periods(&period, years)?,
    }
    Ok(())
}

async fn fetch_statement(args: StatementArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(args.timeout))
        .build()?;
    let provider = VndirectProvider::with_client(client).with_base_url(args.base_url);

    let mut policy = ReportingPolicy::default();
    if !args.bank_symbols.is_empty() {
        policy = policy.with_bank_symbols(args.bank_symbols);
    }

    let service = StatementService::new(Arc::new(provider)).with_policy(policy);
    let table = service.fetch_statement(&args.request).await?;

    if table.is_empty() {
        println!(
            "No data found for {} in the given date range!",
            args.request.symbol
        );
        return Ok(());
    }

    let bytes = export::render(&table, args.format, args.bom)?;
    match args.output {
        Some(mut path) => {
            if path.extension().is_none() {
                path.set_extension(args.format.extension());
            }
            std::fs::write(&path, bytes)?;
            info!(path = %path.display(), rows = table.len(), "Wrote statement");
        }
        None => std::io::stdout().write_all(&bytes)?,
    }
    Ok(())
}

fn list_periods(period: &str, years: i64) -> Result<(), Box<dyn std::error::Error>> {
    let kind: PeriodKind = period.parse()?;
    let years = u32::try_from(years).map_err(|_| {
        StatementError::InvalidParameter(format!("lookback years must be positive, got {years}"))
    })?;

    for fiscal_period in expand(kind, years)? {
        println!("{fiscal_period}\t{}", fiscal_period.label(kind));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeout_of(args: &[&str]) -> Result<u64, clap::Error> {
        let cli = Cli::try_parse_from(args)?;
        match cli.command {
            Commands::Statement { timeout, .. } => Ok(timeout),
            Commands::Periods { .. } => panic!("expected the statement subcommand"),
        }
    }

    #[test]
    fn test_timeout_must_be_positive() {
        assert!(timeout_of(&["vnfin", "statement", "VCB", "--timeout", "0"]).is_err());
        assert_eq!(
            timeout_of(&["vnfin", "statement", "VCB", "--timeout", "5"]).unwrap(),
            5
        );
    }

    #[test]
    fn test_statement_defaults() {
        let cli = Cli::try_parse_from(["vnfin", "statement", "FPT"]).unwrap();
        let Commands::Statement {
            statement_type,
            period,
            years,
            format,
            ..
        } = cli.command
        else {
            panic!("expected the statement subcommand");
        };
        assert_eq!((statement_type.as_str(), period.as_str(), years), ("BS", "YEAR", 2));
        assert_eq!(format, OutputFormat::Table);
    }
}
