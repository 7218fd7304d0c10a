//! Texnouz Parking: CLI Server
//!
//! Headless parking facility service suitable for deployment as a systemd
//! service, Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/texnouz-parking/config.toml)
//! parking-service
//!
//! # Custom config path
//! parking-service --config /etc/texnouz-parking/config.toml
//!
//! # Override port and facility size
//! parking-service --api-port 8080 --slots 40
//!
//! # Validate config without starting
//! parking-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use texnouz_parking::config::AppConfig;
use texnouz_parking::server::{init_tracing, ServerHandle, ServerOptions};

/// Texnouz Parking: slot allocation and billing for a parking facility.
#[derive(Parser, Debug)]
#[command(
    name = "parking-service",
    version,
    about = "Parking facility slot allocation and tariff service",
    long_about = "Texnouz Parking: REST API server for parking slot allocation, \
                  reservations and hourly billing with rush, night and holiday tariffs.\n\n\
                  Default config: ~/.config/texnouz-parking/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "PARKING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(long)]
    api_port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Override the number of slots in the facility.
    #[arg(long)]
    slots: Option<usize>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(texnouz_parking::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.api_port {
        config.server.api_port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(slots) = cli.slots {
        config.facility.slot_count = slots;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Some(e) = load_error {
            eprintln!("❌ Invalid configuration in {}: {}", config_path.display(), e);
            std::process::exit(1);
        }
        if let Err(e) = config.validate() {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}:{}", config.server.api_host, config.server.api_port);
        println!("   Facility    : {}", config.facility.name);
        println!("   Slots       : {}", config.facility.slot_count);
        println!("   Currency    : {}", config.facility.currency);
        println!("   Holidays    : {}", config.holidays.len());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // Overrides are applied first so --log-level reaches the subscriber
    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Start server ───────────────────────────────────────────
    let handle = match ServerHandle::start(ServerOptions {
        config,
        ..ServerOptions::default()
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start: {}", e);
            return Err(e);
        }
    };

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
