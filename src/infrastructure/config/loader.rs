use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::domain::models::{SyncConfig, ValueEncoding};
use crate::infrastructure::logging::{LogFormat, RotationPolicy};

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".tfc-sync.yaml";

/// GitHub Actions input name and the config field it feeds.
///
/// The runner exposes input `foo` as `INPUT_FOO`.
const ACTION_INPUTS: &[(&str, &str)] = &[
    ("TFC_HOST", "host"),
    ("TFC_TOKEN", "token"),
    ("ORGANIZATION", "organization"),
    ("WORKSPACE", "workspace"),
    ("AWS_ACCESS_KEY_ID", "aws_access_key_id"),
    ("AWS_SECRET_ACCESS_KEY", "aws_secret_access_key"),
    ("AWS_SESSION_TOKEN", "aws_session_token"),
    ("GOOGLE_CREDENTIALS", "google_credentials"),
    ("TFE_TOKEN", "tfe_token"),
    ("VARIABLE_KEY", "variable_key"),
    ("VARIABLE_VALUE", "variable_value"),
    ("VARIABLE_VALUE_ENCODING", "variable_value_encoding"),
];

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    MissingConfigFile(PathBuf),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty, compact")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Default, Serialize)]
pub struct ConfigOverrides {
    /// Explicit config file; it must exist
    #[serde(skip)]
    pub config_file: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable_value_encoding: Option<ValueEncoding>,

    #[serde(skip_serializing_if = "HttpOverrides::is_empty")]
    pub http: HttpOverrides,
    #[serde(skip_serializing_if = "LoggingOverrides::is_empty")]
    pub logging: LoggingOverrides,
}

#[derive(Debug, Default, Serialize)]
pub struct HttpOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl HttpOverrides {
    const fn is_empty(&self) -> bool {
        self.timeout_secs.is_none()
    }
}

#[derive(Debug, Default, Serialize)]
pub struct LoggingOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,
}

impl LoggingOverrides {
    const fn is_empty(&self) -> bool {
        self.level.is_none() && self.format.is_none() && self.log_dir.is_none()
    }
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. YAML config file (`--config`, else `.tfc-sync.yaml` if present)
    /// 3. GitHub Actions inputs (`INPUT_*`, empty inputs ignored)
    /// 4. Environment variables (`TFC_SYNC_*` prefix, `__` for nesting)
    /// 5. Command-line overrides
    pub fn load(overrides: &ConfigOverrides) -> Result<SyncConfig> {
        let config: SyncConfig = Self::figment(overrides)?
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, without environment layers
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<SyncConfig> {
        let config: SyncConfig = Figment::new()
            .merge(Serialized::defaults(SyncConfig::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.as_ref().display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(overrides: &ConfigOverrides) -> Result<Figment, ConfigError> {
        let config_file = match &overrides.config_file {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::MissingConfigFile(path.clone()));
            }
            Some(path) => path.clone(),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::new()
            .merge(Serialized::defaults(SyncConfig::default()))
            .merge(Yaml::file(config_file))
            .merge(Serialized::defaults(action_inputs()))
            .merge(Env::prefixed("TFC_SYNC_").split("__"))
            .merge(Serialized::defaults(overrides)))
    }

    /// Validate the structural settings after loading.
    ///
    /// Required inputs and credential formats are checked later by the
    /// sync pipeline, so a config without credentials is still valid here.
    pub fn validate(config: &SyncConfig) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config.logging.format.parse::<LogFormat>().is_err() {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        if config.logging.rotation.parse::<RotationPolicy>().is_err() {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        if config.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.http.timeout_secs));
        }

        Ok(())
    }
}

/// Non-empty `INPUT_*` variables as a config dictionary. Values stay
/// strings; nothing is parsed as numbers or arrays.
fn action_inputs() -> Map<String, Value> {
    ACTION_INPUTS
        .iter()
        .filter_map(|(input, field)| {
            let value = std::env::var(format!("INPUT_{input}")).ok()?;
            (!value.trim().is_empty()).then(|| ((*field).to_string(), Value::String(value)))
        })
        .collect()
}
