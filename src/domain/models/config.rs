use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Inputs for one sync run.
///
/// Built once at entry by the config loader and passed by reference into
/// every step. Field names double as the GitHub Actions input names
/// (`INPUT_<NAME>`), except `host` and `token` which the action exposes as
/// `tfc_host` and `tfc_token`.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SyncConfig {
    /// Hostname of the Terraform Cloud / Enterprise instance
    #[serde(default = "default_host", deserialize_with = "string_or_number")]
    pub host: String,

    /// API token sent as a bearer credential
    #[serde(default, deserialize_with = "string_or_number")]
    pub token: String,

    /// Organization owning the workspace
    #[serde(default, deserialize_with = "string_or_number")]
    pub organization: String,

    /// Workspace name to resolve
    #[serde(default, deserialize_with = "string_or_number")]
    pub workspace: String,

    /// Written to `AWS_ACCESS_KEY_ID`
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub aws_access_key_id: Option<String>,

    /// Written to `AWS_SECRET_ACCESS_KEY`
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub aws_secret_access_key: Option<String>,

    /// Written to `AWS_SESSION_TOKEN`
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub aws_session_token: Option<String>,

    /// Base64-encoded service account key, decoded into `GOOGLE_CREDENTIALS`
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub google_credentials: Option<String>,

    /// Team or user token written to `TFE_TOKEN`
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub tfe_token: Option<String>,

    /// Name of an extra variable to write
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub variable_key: Option<String>,

    /// Value of the extra variable
    #[serde(
        default,
        deserialize_with = "optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub variable_value: Option<String>,

    /// How `variable_value` is encoded
    #[serde(default)]
    pub variable_value_encoding: ValueEncoding,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Reads a scalar as text.
///
/// YAML and figment's env provider type bare values on their own, so a
/// workspace named `2024` arrives as an integer.
struct ScalarText;

impl de::Visitor<'_> for ScalarText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}

struct Scalar(String);

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ScalarText).map(Self)
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    deserializer.deserialize_any(ScalarText)
}

fn optional_string_or_number<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| scalar.0))
}

fn default_host() -> String {
    "app.terraform.io".to_string()
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            token: String::new(),
            organization: String::new(),
            workspace: String::new(),
            aws_access_key_id: None,
            aws_secret_access_key: None,
            aws_session_token: None,
            google_credentials: None,
            tfe_token: None,
            variable_key: None,
            variable_value: None,
            variable_value_encoding: ValueEncoding::default(),
            http: HttpConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl SyncConfig {
    /// A config with the four required inputs set and no credentials.
    pub fn new(
        organization: impl Into<String>,
        workspace: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            organization: organization.into(),
            workspace: workspace.into(),
            ..Self::default()
        }
    }

    /// Every secret-bearing value that was supplied, for log redaction.
    pub fn secret_values(&self) -> Vec<&str> {
        [
            Some(self.token.as_str()),
            self.aws_access_key_id.as_deref(),
            self.aws_secret_access_key.as_deref(),
            self.aws_session_token.as_deref(),
            self.google_credentials.as_deref(),
            self.tfe_token.as_deref(),
            self.variable_value.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect()
    }
}

fn redact(value: Option<&str>) -> Option<&'static str> {
    value.map(|_| "[REDACTED]")
}

impl fmt::Debug for SyncConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncConfig")
            .field("host", &self.host)
            .field("token", &redact((!self.token.is_empty()).then_some(self.token.as_str())))
            .field("organization", &self.organization)
            .field("workspace", &self.workspace)
            .field("aws_access_key_id", &redact(self.aws_access_key_id.as_deref()))
            .field("aws_secret_access_key", &redact(self.aws_secret_access_key.as_deref()))
            .field("aws_session_token", &redact(self.aws_session_token.as_deref()))
            .field("google_credentials", &redact(self.google_credentials.as_deref()))
            .field("tfe_token", &redact(self.tfe_token.as_deref()))
            .field("variable_key", &self.variable_key)
            .field("variable_value", &redact(self.variable_value.as_deref()))
            .field("variable_value_encoding", &self.variable_value_encoding)
            .field("http", &self.http)
            .field("logging", &self.logging)
            .finish()
    }
}

/// Encoding of the extra variable's value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueEncoding {
    /// Written verbatim
    #[default]
    Plain,
    /// Base64-decoded once, line endings stripped
    Base64,
}

// Case-insensitive; an empty string (an unset action input) means plain.
impl FromStr for ValueEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "plain" => Ok(Self::Plain),
            "base64" => Ok(Self::Base64),
            other => Err(format!("unknown encoding {other:?}, expected plain or base64")),
        }
    }
}

impl<'de> Deserialize<'de> for ValueEncoding {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json, pretty or compact
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for an additional JSON log file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
