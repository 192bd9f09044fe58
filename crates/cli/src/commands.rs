//! Subcommand handlers
//!
//! Each handler takes its facade as a trait object and returns the text to
//! print, so tests can drive it with fakes.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use tabled::{Table, Tabled};

use system_facade_core::application::EnvironmentSnapshot;
use system_facade_core::domain::SearchOption;
use system_facade_core::port::{CertificateFactory, ComponentIdentity, Directory, Environment};

#[derive(Tabled)]
struct FactRow {
    fact: &'static str,
    value: String,
}

fn row(fact: &'static str, value: impl ToString) -> FactRow {
    FactRow {
        fact,
        value: value.to_string(),
    }
}

/// `sysfacade env`
pub fn render_env(env: &dyn Environment, json: bool) -> Result<String> {
    let snapshot =
        EnvironmentSnapshot::capture(env).context("Failed to read environment facts")?;

    if json {
        return serde_json::to_string_pretty(&snapshot).context("Failed to encode snapshot");
    }

    let rows = vec![
        row("machine_name", &snapshot.machine_name),
        row("processor_count", snapshot.processor_count),
        row("new_line", format!("{:?}", snapshot.new_line)),
        row("tick_count", snapshot.tick_count),
        row("tick_count_64", snapshot.tick_count_64),
        row("current_thread_id", snapshot.current_thread_id),
        row("has_shutdown_started", snapshot.has_shutdown_started),
    ];
    Ok(format!(
        "{}\n\n{}",
        "Environment".cyan().bold(),
        Table::new(rows)
    ))
}

/// `sysfacade cert`
pub fn render_certificate(
    factory: &dyn CertificateFactory,
    raw_data: &[u8],
    password: Option<&str>,
) -> Result<String> {
    let cert = factory
        .create(raw_data, password)
        .context("Failed to create certificate")?;

    let rows = vec![
        row("subject", cert.subject()),
        row("issuer", cert.issuer()),
        row("version", cert.version()),
        row("serial_number", cert.serial_number()),
        row("not_before", cert.not_before()),
        row("not_after", cert.not_after()),
        row("thumbprint", cert.thumbprint()),
        row("has_private_key", cert.has_private_key()),
    ];
    Ok(format!(
        "{}\n\n{}",
        "✓ Certificate loaded".green().bold(),
        Table::new(rows)
    ))
}

/// `sysfacade identity`
pub fn render_identity(identity: &dyn ComponentIdentity) -> String {
    let version = identity
        .version()
        .map(|v| v.to_string())
        .unwrap_or_else(|| "-".to_string());
    let token = identity
        .public_key_token()
        .map(|t| t.iter().map(|b| format!("{:02x}", b)).collect::<String>())
        .unwrap_or_else(|| "null".to_string());

    let rows = vec![
        row("name", identity.name()),
        row("version", version),
        row("culture", identity.culture().unwrap_or("neutral")),
        row("public_key_token", token),
        row("full_name", identity.full_name()),
    ];
    Table::new(rows).to_string()
}

/// `sysfacade ls`
pub fn render_listing(
    directory: &dyn Directory,
    path: &Path,
    pattern: &str,
    recursive: bool,
) -> Result<String> {
    let option = if recursive {
        SearchOption::AllDirectories
    } else {
        SearchOption::TopDirectoryOnly
    };
    let files = directory
        .enumerate_files_with(path, pattern, option)
        .with_context(|| format!("Failed to enumerate {}", path.display()))?;

    if files.is_empty() {
        return Ok(format!("{}", "No matching files".yellow()));
    }
    Ok(files
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}
