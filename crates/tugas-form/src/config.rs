/*
[INPUT]:  Optional YAML configuration file and TUGAS_* environment variables
[OUTPUT]: Parsed application configuration
[POS]:    Configuration layer - API endpoint and logging setup
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tugas_adapter::ClientConfig;
use tugas_adapter::http::client::DEFAULT_BASE_URL;

const APP_DIR: &str = "tugas";
const ENV_PREFIX: &str = "TUGAS";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Task API connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the web app serving `/api/tasks`
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Overall request timeout; unset means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LogConfig {
    /// Directory for the terminal UI log file
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from an optional YAML file layered with
    /// `TUGAS_*` environment variables (`TUGAS_API__BASE_URL`, ...).
    ///
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) {
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Yaml)
                    .required(false),
            );
        }
        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("read configuration sources")?;
        settings
            .try_deserialize()
            .context("parse configuration")
    }

    /// Parse configuration from YAML text only
    pub fn from_yaml_str(content: &str) -> anyhow::Result<Self> {
        Config::builder()
            .add_source(File::from_str(content, FileFormat::Yaml))
            .build()
            .context("read configuration")?
            .try_deserialize()
            .context("parse configuration")
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("serialize configuration to YAML")
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            timeout: self.api.timeout_secs.map(Duration::from_secs),
            connect_timeout: Duration::from_secs(self.api.connect_timeout_secs),
        }
    }

    /// Directory for the terminal UI log file
    pub fn log_directory(&self) -> PathBuf {
        self.log.directory.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("logs")
        })
    }
}

/// `<config_dir>/tugas/config.yaml`, when the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_yaml() {
        let config = AppConfig::from_yaml_str("{}").expect("parse");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, None);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let yaml = r#"
api:
  base_url: "https://tugas.example.com"
  timeout_secs: 15
"#;
        let config = AppConfig::from_yaml_str(yaml).expect("parse");
        assert_eq!(config.api.base_url, "https://tugas.example.com");
        assert_eq!(config.api.connect_timeout_secs, 10);

        let client = config.client_config();
        assert_eq!(client.timeout, Some(Duration::from_secs(15)));
        assert_eq!(client.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_yaml_output_parses_back() {
        let mut config = AppConfig::default();
        config.log.directory = Some(PathBuf::from("/var/log/tugas"));

        let yaml = config.to_yaml().expect("serialize");
        let parsed = AppConfig::from_yaml_str(&yaml).expect("parse");
        assert_eq!(parsed, config);
        assert_eq!(parsed.log_directory(), PathBuf::from("/var/log/tugas"));
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("tugas-form-missing-config.yaml");
        let config = AppConfig::load(Some(&path)).expect("load");
        assert!(config.api.base_url.starts_with("http"));
    }
}
