//! CLI configuration
//!
//! Layered with the `config` crate: an optional TOML file first, then
//! `SYSFACADE_*` environment variables on top.
//!
//! ```text
//! # sysfacade.toml
//! log_format = "json"
//! log_filter = "system_facade=debug"
//! default_pattern = "*.pem"
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use system_facade_core::domain::MATCH_ALL;

pub const DEFAULT_CONFIG_FILE: &str = "sysfacade.toml";
pub const ENV_PREFIX: &str = "SYSFACADE";
const DEFAULT_LOG_FILTER: &str = "system_facade=info,sysfacade=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Development: human-readable, colored
    #[default]
    Pretty,
    /// Production: one JSON object per line
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub log_format: LogFormat,
    pub log_filter: String,
    /// Search pattern used by `ls` when none is given
    pub default_pattern: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            default_pattern: MATCH_ALL.to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration
    ///
    /// An explicit `path` must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        config::Config::builder()
            .add_source(config::File::from(file).required(path.is_some()))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.log_filter, "system_facade=info,sysfacade=info");
        assert_eq!(config.default_pattern, "*");
    }

    #[test]
    fn test_default_filter_covers_binary_target() {
        let binary = module_path!().split("::").next().unwrap();
        let directives: Vec<&str> = DEFAULT_LOG_FILTER.split(',').collect();

        assert!(directives.contains(&format!("{}=info", binary).as_str()));
        assert!(directives.contains(&"system_facade=info"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("facade.toml");
        fs::write(&path, "log_format = \"json\"\ndefault_pattern = \"*.pem\"\n").unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();

        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.default_pattern, "*.pem");
        assert_eq!(config.log_filter, "system_facade=info,sysfacade=info");
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CliConfig::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
