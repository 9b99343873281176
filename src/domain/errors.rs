//! Domain errors for the credential sync pipeline.

use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::models::PayloadError;

/// The remote call a network failure belongs to.
///
/// Carried by every transport and protocol error so the reported message
/// names the failing step without echoing request payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiStep {
    /// `GET /organizations/{org}/workspaces/{name}`
    WorkspaceLookup,
    /// `GET /workspaces/{id}/vars`
    ListVariables,
    /// `PATCH /workspaces/{id}/vars/{var_id}`
    UpdateVariable(String),
    /// `POST /workspaces/{id}/vars`
    CreateVariable(String),
}

impl fmt::Display for ApiStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkspaceLookup => write!(f, "workspace id lookup"),
            Self::ListVariables => write!(f, "variable listing"),
            Self::UpdateVariable(key) => write!(f, "update of variable {key}"),
            Self::CreateVariable(key) => write!(f, "creation of variable {key}"),
        }
    }
}

/// A required input is missing or malformed.
///
/// Always raised before any network call is attempted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required input: {0}")]
    MissingInput(&'static str),

    #[error("{present} was provided without {missing}")]
    UnpairedInput {
        present: &'static str,
        missing: &'static str,
    },

    #[error("invalid credential format: access key")]
    InvalidAccessKey,

    #[error("invalid credential format: secret key")]
    InvalidSecretKey,

    #[error("invalid credential format: service account {0}")]
    InvalidServiceAccount(PayloadError),

    #[error("invalid credential format: tfe token")]
    InvalidTfeToken,

    #[error("invalid variable value: {0}")]
    InvalidVariableValue(PayloadError),

    #[error("variable {0} is configured more than once")]
    DuplicateVariable(String),

    #[error("no credential provided")]
    NoCredentialProvided,
}

/// Errors that stop a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("remote {step} failed: {source}")]
    Transport {
        step: ApiStep,
        #[source]
        source: reqwest::Error,
    },

    #[error("remote {step} failed: unexpected status {status}{}", format_detail(.detail.as_deref()))]
    UnexpectedStatus {
        step: ApiStep,
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("remote {step} failed: malformed response ({reason})")]
    Decode { step: ApiStep, reason: String },

    #[error("invalid host {0:?}")]
    InvalidHost(String),
}

fn format_detail(detail: Option<&str>) -> String {
    detail.map(|d| format!(" ({d})")).unwrap_or_default()
}

impl SyncError {
    /// The remote step that failed, if the error came from a network call.
    pub const fn step(&self) -> Option<&ApiStep> {
        match self {
            Self::Transport { step, .. }
            | Self::UnexpectedStatus { step, .. }
            | Self::Decode { step, .. } => Some(step),
            Self::Validation(_) | Self::InvalidHost(_) => None,
        }
    }

    /// Returns true if the run stopped before contacting the remote service.
    pub const fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidHost(_))
    }
}

pub type SyncResult<T> = Result<T, SyncError>;
