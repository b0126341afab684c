//! telelink CLI - Command-line tool for remote vehicle operations
//!
//! Talks to a telelink daemon; every command runs exactly one operation.

mod commands;
mod config;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use telelink_client::TelelinkClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::commands::{StartArgs, Target};
use crate::config::Config;
use crate::output::{OutputContext, OutputFormat};

#[derive(Parser)]
#[command(name = "telelink-cli")]
#[command(author, version, about = "Remote vehicle operations CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Server URL
    #[arg(short, long, env = "TELELINK_SERVER", global = true)]
    server: Option<String>,

    /// Configuration file path
    #[arg(short, long, env = "TELELINK_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, env = "TELELINK_OUTPUT", global = true)]
    output: Option<OutputFormat>,

    /// Credential record on the server
    #[arg(long, env = "TELELINK_CREDENTIALS", global = true)]
    credentials: Option<String>,

    /// Select the vehicle by VIN
    #[arg(long, global = true)]
    vin: Option<String>,

    /// Select the vehicle by position in the account's list
    #[arg(long, global = true, allow_negative_numbers = true)]
    index: Option<i64>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Minimal output (for scripting)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the account's vehicles
    List,

    /// Show vehicle status
    Status,

    /// Show vehicle location
    Location,

    /// Show odometer reading
    Odometer,

    /// Lock the vehicle
    Lock,

    /// Unlock the vehicle
    Unlock,

    /// Start engine/climate
    Start(StartArgs),

    /// Stop engine/climate
    Stop,

    /// List the operations the server supports
    Operations,

    /// Describe the credential record fields
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Load config file
    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load().unwrap_or_default()
    };

    // Merge CLI args with config
    let merged = config.merge_with_args(
        cli.server.as_deref(),
        cli.output,
        cli.credentials.as_deref(),
        cli.no_color,
    );
    tracing::debug!(?merged, "Resolved configuration");

    let ctx = OutputContext::new(merged.output, merged.no_color, cli.quiet);
    let client = create_client(&merged.server)?;
    let target = Target {
        vin: cli.vin.clone(),
        index: cli.index,
        credentials: merged.credentials.clone(),
    };

    let result = match &cli.command {
        Commands::List => commands::list(&client, &target, &ctx).await,
        Commands::Status => commands::read(&client, "getStatus", &target, &ctx).await,
        Commands::Location => commands::read(&client, "getLocation", &target, &ctx).await,
        Commands::Odometer => commands::read(&client, "getOdometer", &target, &ctx).await,
        Commands::Lock => commands::command(&client, "lock", "Vehicle locked", &target, &ctx).await,
        Commands::Unlock => {
            commands::command(&client, "unlock", "Vehicle unlocked", &target, &ctx).await
        }
        Commands::Start(args) => commands::start(&client, args, &target, &ctx).await,
        Commands::Stop => {
            commands::command(&client, "stopEngine", "Engine/climate stopped", &target, &ctx).await
        }
        Commands::Operations => commands::operations(&client, &ctx).await,
        Commands::Schema => commands::schema(&client, &ctx).await,
    };

    if let Err(e) = result {
        ctx.error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Create a telelink client for the given server URL
fn create_client(server: &str) -> Result<TelelinkClient> {
    TelelinkClient::new(server).context("Failed to create telelink client")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_flags() {
        let cli = Cli::try_parse_from([
            "telelink-cli",
            "--vin",
            "KMH1",
            "start",
            "--air-ctrl",
            "--defrost",
            "false",
            "--temp",
            "21.5",
        ])
        .unwrap();

        assert_eq!(cli.vin.as_deref(), Some("KMH1"));
        let Commands::Start(args) = cli.command else {
            panic!("expected start command");
        };
        assert_eq!(args.air_ctrl, Some(true));
        assert_eq!(args.defrost, Some(false));
        assert_eq!(args.temp, Some(21.5));
        assert_eq!(args.duration, None);
        assert!(!args.defaults);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "telelink-cli",
            "status",
            "--index",
            "2",
            "--output",
            "json",
            "--credentials",
            "work",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::Status));
        assert_eq!(cli.index, Some(2));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.credentials.as_deref(), Some("work"));
    }

    #[test]
    fn rejects_unknown_output() {
        assert!(Cli::try_parse_from(["telelink-cli", "--output", "csv", "list"]).is_err());
    }
}
