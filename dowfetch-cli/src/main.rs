//! dowfetch CLI: download the Dow Jones basket from Stooq.
//!
//! Commands:
//! - `download`: fetch daily CSV history for every basket symbol into a directory
//! - `symbols`: list the basket with the ticker token sent to Stooq

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use dowfetch_core::data::{download_basket, ticker_token, Basket, LogProgress, StooqProvider};
use dowfetch_core::FetchConfig;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "dowfetch",
    version,
    about = "Download daily Dow Jones constituent history from Stooq"
)]
struct Cli {
    /// Log level when RUST_LOG is not set (trace, debug, info, warn, error).
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download every basket symbol and write `<SYMBOL>.csv` files.
    Download {
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: String,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Destination directory. Defaults to the configured output_dir.
        #[arg(long)]
        out: Option<PathBuf>,

        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List basket symbols and their Stooq ticker tokens.
    Symbols,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("dowfetch={0},dowfetch_core={0}", cli.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Download {
            start,
            end,
            out,
            config,
        } => run_download(&start, end.as_deref(), out, config),
        Commands::Symbols => {
            run_symbols();
            Ok(())
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date '{s}'"))
}

fn run_download(
    start: &str,
    end: Option<&str>,
    out: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let start_date = parse_date(start)?;
    let end_date = end
        .map(parse_date)
        .transpose()?
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let config = match config_path {
        Some(path) => FetchConfig::from_file(&path)?,
        None => FetchConfig::default(),
    };
    let dest = out.unwrap_or_else(|| config.output_dir.clone());

    let provider = StooqProvider::new(&config)?;
    tracing::info!(
        start = %start_date,
        end = %end_date,
        dest = %dest.display(),
        "downloading Dow Jones basket"
    );

    // Per-symbol failures are reported in the log; only setup errors reach here.
    download_basket(
        &provider,
        &Basket::dow_jones(),
        start_date,
        end_date,
        &dest,
        &LogProgress,
    )?;

    Ok(())
}

fn run_symbols() {
    println!("{:<8} {}", "Symbol", "Token");
    println!("{}", "-".repeat(20));
    for symbol in Basket::dow_jones().iter() {
        println!("{:<8} {}", symbol, ticker_token(symbol));
    }
}
