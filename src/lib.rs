//! tfc-credential-sync - credential sync step for Terraform Cloud workspaces
//!
//! Reads cloud credentials (AWS keys, a GCP service account, a Terraform
//! Cloud token, or an arbitrary variable) and writes each one to a workspace
//! as a sensitive environment variable, updating the variable if it already
//! exists and creating it otherwise.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): configuration, credential and variable types, errors, ports
//! - **Application Layer** (`application`): validation, reconciliation, the sync pipeline
//! - **Infrastructure Layer** (`infrastructure`): Terraform Cloud client, config loading, logging
//! - **CLI Layer** (`cli`): command-line parsing, output, failure reporting
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//!
//! use secrecy::{ExposeSecret, SecretString};
//! use tfc_credential_sync::{validate, CredentialSync, SyncConfig, TfcClient};
//!
//! let config = SyncConfig {
//!     tfe_token: Some(std::env::var("TFE_TOKEN")?),
//!     ..SyncConfig::new("acme", "prod", std::env::var("TFC_TOKEN")?)
//! };
//! let inputs = validate(&config)?;
//! let token = SecretString::from(inputs.token.expose_secret().to_owned());
//! let client = TfcClient::new(inputs.host.as_str(), token, Duration::from_secs(30))?;
//! let report = CredentialSync::new(client).sync(&inputs).await?;
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use application::{validate, CredentialSync, SyncInputs};
pub use domain::errors::{ApiStep, SyncError, SyncResult, ValidationError};
pub use domain::models::{
    CredentialAssignment, CredentialKind, SyncConfig, SyncReport, VariableAction, VariableOutcome,
    VariableRecord, WorkspaceRef,
};
pub use domain::ports::VariableStore;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::tfc::TfcClient;
