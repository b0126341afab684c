//! telelinkd - telelink Server Daemon
//!
//! REST API for remote vehicle operations.
//!
//! Usage:
//!   telelinkd [OPTIONS] [config.toml]
//!
//! Options:
//!   -p, --port <port>  Override the listen port
//!
//! If no config file is provided, serves the built-in demo fleet on the
//! default port with no credential records.

mod config;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use telelink_api::{create_router, AppState};
use telelink_core::ClientFactory;
use telelink_mock::MockClientFactory;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::DaemonConfig;

/// Parsed command-line arguments
struct Args {
    /// Server config file (TOML)
    config_path: Option<PathBuf>,
    /// Port override
    port: Option<u16>,
}

fn parse_args() -> anyhow::Result<Args> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut result = Args {
        config_path: None,
        port: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| anyhow::anyhow!("Missing argument for --port"))?;
                result.port = Some(value.parse()?);
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg if !arg.starts_with('-') => {
                // Positional argument = config file
                result.config_path = Some(PathBuf::from(arg));
                i += 1;
            }
            _ => {
                tracing::warn!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    Ok(result)
}

fn print_help() {
    eprintln!(
        r#"telelinkd - telelink Server Daemon

Usage: telelinkd [OPTIONS] [config.toml]

Options:
  -p, --port <port>  Override the listen port
  -h, --help         Print this help message

Examples:
  # Serve the demo fleet
  telelinkd

  # Run with config file
  telelinkd telelinkd.toml
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "telelinkd=info,telelink_api=info,telelink_ops=debug,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting telelinkd (telelink Server Daemon)");

    let args = parse_args()?;

    let config = if let Some(ref path) = args.config_path {
        tracing::info!("Loading config from: {}", path.display());
        DaemonConfig::load(path)?
    } else {
        tracing::info!("No config file provided, serving demo fleet");
        DaemonConfig::default()
    };

    let fleet = config.load_fleet()?;
    tracing::info!(vehicles = fleet.vehicles.len(), "Fleet loaded");
    if config.credentials.is_empty() {
        tracing::warn!("No credential records configured; every execute request will fail");
    }

    let factory: Arc<dyn ClientFactory> = Arc::new(MockClientFactory::new(fleet.into_vehicles()));
    let port = args.port.unwrap_or(config.port);
    let state = AppState::with_credentials(factory, config.credentials);
    tracing::info!(credentials = ?state.credential_names(), "Credential records loaded");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
