//! System Facade CLI - inspect each platform facade from the command line

mod commands;
mod config;
mod telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};

use system_facade_infra_system::{
    ComponentName, ComponentNameExt, FileSystemDirectory, SystemEnvironment,
    X509CertificateFactory,
};

use crate::config::CliConfig;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "sysfacade")]
#[command(about = "System Facade CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: ./sysfacade.toml, optional)
    #[arg(long, env = "SYSFACADE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show process and machine facts
    Env {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Load a certificate (DER, PEM or PKCS#12) and show its fields
    Cert {
        /// Certificate file
        file: PathBuf,

        /// Password for PKCS#12 containers
        #[arg(short, long, env = "SYSFACADE_CERT_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Parse a component display name and show its fields
    Identity {
        /// e.g. "Core, Version=1.2.0.0, Culture=neutral, PublicKeyToken=null"
        display_name: String,
    },

    /// List files in a directory
    Ls {
        /// Directory to enumerate
        dir: PathBuf,

        /// Search pattern (`*` and `?` wildcards)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load configuration
    let config = CliConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // 2. Initialize logging
    telemetry::init_logging(config.log_format, &config.log_filter)?;
    info!("System Facade CLI v{} starting", VERSION);
    debug!(config = ?config, "Configuration loaded");

    // 3. Dispatch to the facade behind each command
    let output = match cli.command {
        Commands::Env { json } => commands::render_env(&SystemEnvironment::new(), json)?,

        Commands::Cert { file, password } => {
            let raw_data = std::fs::read(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            commands::render_certificate(&X509CertificateFactory::new(), &raw_data, password.as_deref())?
        }

        Commands::Identity { display_name } => {
            let record: ComponentName = display_name
                .parse()
                .context("Invalid component display name")?;
            commands::render_identity(&record.to_interface())
        }

        Commands::Ls {
            dir,
            pattern,
            recursive,
        } => {
            let pattern = pattern.unwrap_or(config.default_pattern);
            commands::render_listing(&FileSystemDirectory::new(), &dir, &pattern, recursive)?
        }
    };

    println!("{}", output);
    Ok(())
}
