//! Fleet Mock CLI
//!
//! Command-line interface for the fleet dashboard mock backend.
//! Prints the JSON the dashboard would receive for a resource or API path.

use clap::{Parser, Subcommand};
use fleet_mock_core::{AppConfig, FetchParams};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;

/// fleet-mock - fixture-backed fleet API for dashboard development
#[derive(Parser, Debug)]
#[command(name = "fleet-mock")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to the per-user config if present)
    #[arg(short, long, env = "FLEET_MOCK_CONFIG")]
    config: Option<PathBuf>,

    /// Seed telemetry simulation for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a resource by type tag
    Fetch {
        /// dashboard, vehicles, telemetry, reports, contracts, approvals or notifications
        resource: String,

        /// Vehicle to select (vehicles)
        #[arg(long)]
        id: Option<String>,

        /// Vehicle the telemetry frame reports for (telemetry)
        #[arg(long)]
        vehicle_id: Option<String>,

        /// Only list vehicles in this status (vehicles)
        #[arg(long)]
        status: Option<String>,
    },
    /// Fetch a resource by dashboard API path, e.g. /vehicles/VH001/telemetry
    Get {
        path: String,
    },
    /// Print the effective configuration
    Config,
    /// List module endpoints and the resource each resolves to
    Modules,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match AppConfig::load_or_default(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if args.seed.is_some() {
        config.mock.seed = args.seed;
    }

    tracing::debug!(
        "Serving {} against {}",
        match &config.mock.fixtures_path {
            Some(path) => path.display().to_string(),
            None => "seed fixtures".to_string(),
        },
        config.aws.api_base_url
    );

    let result = match args.command {
        Command::Fetch {
            resource,
            id,
            vehicle_id,
            status,
        } => {
            let params = FetchParams {
                id,
                vehicle_id,
                status,
            };
            commands::fetch(&config, &resource, &params, args.pretty)
        }
        Command::Get { path } => commands::get(&config, &path, args.pretty),
        Command::Config => commands::show_config(&config, args.pretty),
        Command::Modules => Ok(commands::modules(&config)),
    };

    match result {
        Ok(output) => {
            println!("{}", output.body);
            if output.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
