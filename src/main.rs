// src/main.rs

//! leadsnap CLI
//!
//! Runs the lead extraction pipeline over a captured page snapshot and
//! writes the CSV artifact.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use leadsnap::{
    error::{AppError, Result},
    models::Config,
    pipeline::run_extraction,
    surface::{Capture, SnapshotSurface},
};

#[derive(Parser, Debug)]
#[command(
    name = "leadsnap",
    version,
    about = "Lead extraction and enrichment from page snapshots"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract leads from a capture directory
    Run {
        /// Directory containing manifest.json and captured HTML
        capture: PathBuf,

        /// Output CSV path (default: export.filename from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate configuration and locator selectors
    Validate,
}

/// Initialize logging from the configured level and verbosity flag.
fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        &config.logging.level
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let (config, config_error) = Config::load_or_default(&cli.config);
    init_logging(&config, cli.verbose);
    if let Some(error) = config_error {
        log::warn!("Config load failed from {}, using defaults: {error}", cli.config);
    }

    match dispatch(&cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        // The two terminal-fatal outcomes surface as user-facing alerts.
        Err(AppError::NoLeads) => {
            eprintln!("❌ No leads detected.");
            ExitCode::FAILURE
        }
        Err(AppError::NoData) => {
            eprintln!("❌ No data captured.");
            ExitCode::FAILURE
        }
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(cli: &Cli, config: &Config) -> Result<()> {
    match &cli.command {
        Command::Run { capture, output } => {
            config.validate()?;
            let capture = Capture::load(capture)?;
            let mut surface = SnapshotSurface::new(&capture, &config.locators)?;

            let output = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&config.export.filename));
            let summary = run_extraction(config, &mut surface, &output).await?;
            println!("✅ Exported {} profiles.", summary.rows);
            Ok(())
        }
        Command::Validate => {
            config.validate()?;
            println!("Configuration OK");
            Ok(())
        }
    }
}
