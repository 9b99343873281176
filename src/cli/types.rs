//! CLI type definitions
//!
//! Every flag is optional: values may instead come from the config file,
//! GitHub Actions inputs or `TFC_SYNC_*` environment variables. Secret
//! credentials are deliberately not accepted as flags.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::models::ValueEncoding;
use crate::infrastructure::config::{ConfigOverrides, HttpOverrides, LoggingOverrides};

#[derive(Parser, Debug)]
#[command(name = "tfc-credential-sync")]
#[command(
    about = "Create or update cloud credentials as sensitive Terraform Cloud workspace variables",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// YAML config file (defaults to .tfc-sync.yaml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Terraform Cloud / Enterprise hostname
    #[arg(long)]
    pub host: Option<String>,

    /// API token for the remote service
    #[arg(long)]
    pub token: Option<String>,

    /// Organization owning the workspace
    #[arg(short, long)]
    pub organization: Option<String>,

    /// Workspace whose variables are written
    #[arg(short, long)]
    pub workspace: Option<String>,

    /// Name of an extra variable; its value comes from the `variable_value` input
    #[arg(long)]
    pub variable_key: Option<String>,

    /// Encoding of the extra variable's value (plain or base64)
    #[arg(long)]
    pub variable_value_encoding: Option<ValueEncoding>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, pretty, compact)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Also write JSON logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Output the run summary in JSON format
    #[arg(short, long)]
    pub json: bool,
}

impl Cli {
    /// The flags that were given, as the top configuration layer.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            host: self.host.clone(),
            token: self.token.clone(),
            organization: self.organization.clone(),
            workspace: self.workspace.clone(),
            variable_key: self.variable_key.clone(),
            variable_value_encoding: self.variable_value_encoding,
            http: HttpOverrides {
                timeout_secs: self.timeout_secs,
            },
            logging: LoggingOverrides {
                level: self.log_level.clone(),
                format: self.log_format.clone(),
                log_dir: self.log_dir.clone(),
            },
        }
    }
}
