//! Side-by-side deployment demo API entry point.

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use branch_api::api::{create_router, AppState};
use branch_api::config::Config;
use branch_api::metrics;
use branch_api::utils::shutdown_signal;

/// Side-by-side deployment demo API.
#[derive(Parser, Debug)]
#[command(name = "branch-api")]
#[command(about = "Reports the branch and version a deployed instance was built from")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the HTTP API (default).
    Serve,

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(),
        Some(Command::Serve) | None => cmd_serve(args.port, args.verbose).await,
    }
}

/// Initialize logging according to CLI flags and configuration.
fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("branch_api=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<()> {
    println!("======================================================================");
    println!("BRANCH API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Branch: {}", config.branch_name);
    println!("  Version: {}", config.version);
    println!("  Environment: {}", config.app_environment);
    println!("  Port: {}", config.port);
    println!("  Log Format: {}", config.log_format);
    println!("  Swagger UI: {}", if config.swagger_enabled { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Serve the HTTP API until a shutdown signal arrives.
async fn cmd_serve(port_override: Option<u16>, verbose: bool) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    if let Some(port) = port_override {
        config.port = port;
    }

    init_logging(verbose, config.json_logs());

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    let metrics_handle = metrics::install_recorder()?;
    metrics::init_metrics();

    info!(
        branch = %config.branch_name,
        version = %config.version,
        environment = %config.app_environment,
        "Configuration loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    let router = create_router(AppState::new(config, metrics_handle));

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
