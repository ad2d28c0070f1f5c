mod cli_messages;
mod config;
mod consts;
mod events;
mod logging;
mod metrics;
mod quote;
mod quote_source;
mod scheduler;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::metrics::DerivedMetrics;
use crate::session::setup::SessionOverrides;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{ArgAction, Parser, Subcommand};
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Path to the config file [default: ~/.stock-dashboard/config.json]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Print refresh activity to the console instead of drawing the dashboard
        #[arg(long, action = ArgAction::SetTrue)]
        headless: bool,

        /// Disable background colors in the dashboard
        #[arg(long = "no-background", action = ArgAction::SetTrue)]
        no_background: bool,

        /// Seconds between refreshes
        #[arg(long, value_name = "SECS")]
        refresh_secs: Option<u64>,

        /// Simulated acquisition latency in milliseconds
        #[arg(long, value_name = "MILLIS")]
        latency_ms: Option<u64>,
    },
    /// Acquire one quote and print it
    Snapshot {
        /// Print the snapshot as JSON
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,

        /// Simulated acquisition latency in milliseconds
        #[arg(long, value_name = "MILLIS")]
        latency_ms: Option<u64>,
    },
    /// Write a config file with the default settings
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
    /// Remove the config file
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config_path = match args.config {
        Some(path) => path,
        None => get_config_path()?,
    };

    match args.command {
        Command::Start {
            headless,
            no_background,
            refresh_secs,
            latency_ms,
        } => {
            let config = Config::load_or_default(&config_path)?;
            let session = setup_session(
                config,
                SessionOverrides {
                    refresh_secs,
                    latency_ms,
                },
            )
            .inspect_err(|e| {
                crate::print_cmd_error!("Invalid configuration", e.to_string().as_str())
            })?;
            if headless {
                logging::init_headless_logger();
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background).await
            }
        }
        Command::Snapshot { json, latency_ms } => {
            let config = Config::load_or_default(&config_path)?;
            let session = setup_session(
                config,
                SessionOverrides {
                    refresh_secs: None,
                    latency_ms,
                },
            )?;
            print_snapshot(&session, json).await
        }
        Command::InitConfig { force } => {
            if config_path.exists() && !force {
                let details = format!("{} (use --force to overwrite)", config_path.display());
                crate::print_cmd_error!("Config file already exists", details.as_str());
                return Err(Box::from("config file already exists"));
            }
            Config::default().save(&config_path)?;
            crate::print_cmd_success!("Config written", "{}", config_path.display());
            Ok(())
        }
        Command::ClearConfig => {
            crate::print_cmd_info!("Clearing config", "{}", config_path.display());
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Acquire a single snapshot and print it as text or JSON.
async fn print_snapshot(session: &session::SessionData, json: bool) -> Result<(), Box<dyn Error>> {
    let snapshot = session.source.acquire().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let metrics = DerivedMetrics::from_snapshot(&snapshot);
    println!(
        "{} {} {} ({})",
        snapshot.symbol, metrics.price_text, metrics.change_text, metrics.change_percent_text
    );
    println!(
        "High ${:.2} | Low ${:.2} | Volume {} | Market Cap ${}",
        snapshot.high, snapshot.low, metrics.volume_text, snapshot.market_cap
    );
    if let Some(insight) = metrics.volume_insight() {
        println!("{}", insight);
    }
    Ok(())
}
