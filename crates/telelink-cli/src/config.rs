//! Configuration file handling for telelink-cli

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Server used when neither flags nor the config file name one
pub const DEFAULT_SERVER: &str = "http://localhost:18090";

/// Configuration for the CLI tool
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Default server URL
    pub server: Option<String>,
    /// Default output format
    pub output: Option<OutputFormat>,
    /// Default credential record name
    pub credentials: Option<String>,
    /// Disable colored output
    pub no_color: Option<bool>,
}

impl Config {
    /// Load configuration from the default config file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("telelink-cli");

        Ok(config_dir.join("config.toml"))
    }

    /// Merge CLI arguments over config file values
    pub fn merge_with_args(
        &self,
        server: Option<&str>,
        output: Option<OutputFormat>,
        credentials: Option<&str>,
        no_color: bool,
    ) -> MergedConfig {
        MergedConfig {
            server: server
                .map(String::from)
                .or_else(|| self.server.clone())
                .unwrap_or_else(|| DEFAULT_SERVER.to_string()),
            output: output.or(self.output).unwrap_or_default(),
            credentials: credentials
                .map(String::from)
                .or_else(|| self.credentials.clone()),
            no_color: no_color || self.no_color.unwrap_or(false),
        }
    }
}

/// Fully resolved configuration after merging CLI args
#[derive(Debug, Clone, PartialEq)]
pub struct MergedConfig {
    pub server: String,
    pub output: OutputFormat,
    /// `None` lets the server pick its default record
    pub credentials: Option<String>,
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"server = \"http://car-gw:18090\"\noutput = \"json\"\ncredentials = \"work\"\n",
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.server.as_deref(), Some("http://car-gw:18090"));
        assert_eq!(config.output, Some(OutputFormat::Json));
        assert_eq!(config.credentials.as_deref(), Some("work"));
        assert_eq!(config.no_color, None);
    }

    #[test]
    fn bad_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"output = \"xml\"\n").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn defaults_without_file_or_args() {
        let merged = Config::default().merge_with_args(None, None, None, false);
        assert_eq!(
            merged,
            MergedConfig {
                server: DEFAULT_SERVER.to_string(),
                output: OutputFormat::Table,
                credentials: None,
                no_color: false,
            }
        );
    }

    #[test]
    fn args_override_file() {
        let config = Config {
            server: Some("http://file:1".to_string()),
            output: Some(OutputFormat::Json),
            credentials: Some("file".to_string()),
            no_color: Some(true),
        };

        let merged = config.merge_with_args(None, None, None, false);
        assert_eq!(merged.server, "http://file:1");
        assert_eq!(merged.output, OutputFormat::Json);
        assert_eq!(merged.credentials.as_deref(), Some("file"));
        assert!(merged.no_color);

        let merged = config.merge_with_args(
            Some("http://flag:2"),
            Some(OutputFormat::Table),
            Some("flag"),
            false,
        );
        assert_eq!(merged.server, "http://flag:2");
        assert_eq!(merged.output, OutputFormat::Table);
        assert_eq!(merged.credentials.as_deref(), Some("flag"));
    }
}
