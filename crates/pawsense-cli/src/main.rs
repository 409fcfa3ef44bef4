//! PawSense - forecast what a pet will do next from its activity log.
//!
//! Every command prints JSON on stdout. Logs go to stderr.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use pawsense_core::errors::{PawsenseError, PawsenseErrorCode};
use pawsense_core::PawsenseConfig;
use pawsense_observability::{fields, init_tracing_with, init_tracing_with_filter};
use tracing::field::Empty;

#[derive(Parser)]
#[command(name = "pawsense")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalOpts,
}

#[derive(Args, Debug)]
struct GlobalOpts {
    /// TOML config file
    #[arg(long, global = true, env = "PAWSENSE_CONFIG")]
    config: Option<PathBuf>,

    /// Increase verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the transition table and print it
    Table(LogArgs),

    /// Most likely next activity
    Next(NextArgs),

    /// Depth-bounded forecast of future activities
    Chain(ChainArgs),

    /// Write a simulated activity log
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
pub(crate) struct LogArgs {
    /// Activity log (.csv or .json)
    #[arg(long)]
    pub log: PathBuf,

    /// Only use this subject's records
    #[arg(long)]
    pub subject: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct NextArgs {
    #[command(flatten)]
    pub log: LogArgs,

    /// Current activity
    #[arg(long)]
    pub activity: String,

    /// Start of the current activity (ISO-8601)
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ChainArgs {
    #[command(flatten)]
    pub log: LogArgs,

    /// Current activity
    #[arg(long)]
    pub activity: String,

    /// Start of the current activity (ISO-8601)
    #[arg(long)]
    pub at: String,

    /// Depth bound (defaults to the configured depth)
    #[arg(long, allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Keep the N most probable predictions (defaults to the configured top-N)
    #[arg(long, allow_negative_numbers = true, conflicts_with = "all")]
    pub top: Option<i64>,

    /// Print the whole prediction tree in depth-first order
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug)]
pub(crate) struct SimulateArgs {
    /// Output file (.csv or .json)
    #[arg(long)]
    pub out: PathBuf,

    /// Number of days
    #[arg(long)]
    pub days: Option<u32>,

    /// RNG seed for a reproducible log
    #[arg(long)]
    pub seed: Option<u64>,

    /// Subject name
    #[arg(long)]
    pub subject: Option<String>,

    /// First day, YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PawsenseError>() {
                Some(e) => eprintln!("error: {}", e.boundary_string()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.global.config {
        Some(path) => PawsenseConfig::load(path)
            .map_err(PawsenseError::from)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PawsenseConfig::default(),
    };

    match cli.global.verbose {
        0 => init_tracing_with(&config.observability),
        1 => init_tracing_with_filter("pawsense=debug", config.observability.json_output),
        _ => init_tracing_with_filter("pawsense=trace", config.observability.json_output),
    }

    let span = tracing::info_span!(
        "pawsense",
        command = Empty,
        log_path = Empty,
        subject = Empty,
        activity = Empty,
        depth = Empty,
        records = Empty,
        edges = Empty,
        nodes = Empty,
    );
    let _guard = span.enter();

    let output = match &cli.command {
        Commands::Table(args) => {
            span.record(fields::COMMAND, "table");
            commands::table(&config, args, &span)?
        }
        Commands::Next(args) => {
            span.record(fields::COMMAND, "next");
            commands::next(&config, args, &span)?
        }
        Commands::Chain(args) => {
            span.record(fields::COMMAND, "chain");
            commands::chain(&config, args, &span)?
        }
        Commands::Simulate(args) => {
            span.record(fields::COMMAND, "simulate");
            commands::simulate(&config, args, &span)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
