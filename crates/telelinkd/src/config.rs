//! Daemon configuration file
//!
//! ```toml
//! port = 18090
//! fleet = "fleet.toml"
//!
//! [credentials.default]
//! username = "driver@example.com"
//! password = "secret"
//! region = "EU"
//! brand = "kia"
//! pin = "1234"
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use telelink_mock::FleetConfig;
use telelink_ops::Credentials;

/// Port used when the config file does not set one
pub const DEFAULT_PORT: u16 = 18090;

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaemonConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Fleet fixture, relative to the config file
    #[serde(default)]
    pub fleet: Option<PathBuf>,
    /// Named credential records
    #[serde(default)]
    pub credentials: HashMap<String, Credentials>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            fleet: None,
            credentials: HashMap::new(),
        }
    }
}

impl DaemonConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        if let (Some(fleet), Some(dir)) = (&config.fleet, path.parent()) {
            if fleet.is_relative() {
                config.fleet = Some(dir.join(fleet));
            }
        }
        Ok(config)
    }

    /// The configured fleet, or the demo fleet when none is set
    pub fn load_fleet(&self) -> anyhow::Result<FleetConfig> {
        match &self.fleet {
            Some(path) => Ok(FleetConfig::load(path)?),
            None => Ok(FleetConfig::demo()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use telelink_core::{Brand, Region};

    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "fleet.toml",
            "[[vehicles]]\nvin = \"KMH1\"\n\n[[vehicles]]\nvin = \"KMH2\"\n",
        );
        let path = write(
            dir.path(),
            "telelinkd.toml",
            r#"
port = 9000
fleet = "fleet.toml"

[credentials.default]
username = "driver@example.com"
password = "secret"
region = "EU"
brand = "kia"

[credentials.us]
username = "other@example.com"
password = "secret"
region = "US"
pin = "1234"
"#,
        );

        let config = DaemonConfig::load(&path).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.fleet, Some(dir.path().join("fleet.toml")));

        let default = &config.credentials["default"];
        assert_eq!(default.region, Region::Eu);
        assert_eq!(default.brand, Brand::Kia);
        assert_eq!(default.language, "en");
        assert_eq!(config.credentials["us"].pin.as_deref(), Some("1234"));

        assert_eq!(config.load_fleet().unwrap().vehicles.len(), 2);
    }

    #[test]
    fn defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "empty.toml", "");

        let config = DaemonConfig::load(&path).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.credentials.is_empty());
        assert_eq!(config.load_fleet().unwrap(), FleetConfig::demo());
    }

    #[test]
    fn rejects_unknown_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "bad.toml", "prot = 9000\n");
        assert!(DaemonConfig::load(&path).is_err());
    }

    #[test]
    fn missing_file() {
        let err = DaemonConfig::load(Path::new("/nonexistent/telelinkd.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
