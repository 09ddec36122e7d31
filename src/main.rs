//! Bag tagging service
//!
//! REST backend that binds RFID/NFC tags to luxury bags and stores their
//! Entrupy authentication results.
//!
//! ```sh
//! # Run with default config (~/.config/bag-tagging/config.toml)
//! bag-tagging-service
//!
//! # Custom config path
//! bag-tagging-service --config /etc/bag-tagging/config.toml
//!
//! # Demo mode without a database
//! bag-tagging-service --in-memory
//!
//! # Print the effective configuration without starting
//! bag-tagging-service --check
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::{error, info};

use bag_tagging::config::{default_config_path, AppConfig};
use bag_tagging::server::{init_tracing, ServerHandle, ServerOptions};

#[derive(Parser, Debug)]
#[command(
    name = "bag-tagging-service",
    version,
    about = "Bag tagging and authentication backend",
    long_about = "REST API for binding RFID/NFC tags to bags and recording \
                  Entrupy authentication results.\n\n\
                  Default config: ~/.config/bag-tagging/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BAGTAG_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen host.
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port.
    #[arg(long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Use the bounded in-memory store instead of a database.
    #[arg(long)]
    in_memory: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,
}

/// Load `.env` (or `env_file`), then parse `args`. Env-backed flags such as
/// `--config` / `BAGTAG_CONFIG` see values that only live in `.env`.
fn parse_cli<I, T>(env_file: Option<&Path>, args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    if let Some(path) = env_file {
        dotenvy::from_path(path).ok();
    } else {
        dotenvy::dotenv().ok();
    }
    Cli::try_parse_from(args)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_cli(None, std::env::args_os()).unwrap_or_else(|e| e.exit());

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    // A broken file is fatal; a missing one yields the defaults.
    let mut config = AppConfig::load(&config_path)?;
    config.apply_env()?;

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.in_memory {
        config.storage.in_memory = true;
    }

    if cli.check {
        config.validate()?;
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!();
        print!("{}", toml::to_string_pretty(&config.redacted())?);
        return Ok(());
    }

    init_tracing(&config);
    info!("Configuration loaded from {}", config_path.display());

    if let Err(e) = config.validate() {
        error!("{}", e);
        return Err(e.into());
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
