//! Input validation
//!
//! Turns a loaded [`SyncConfig`] into [`SyncInputs`]: required inputs are
//! present, credential pairs are complete, every credential has the shape
//! its issuer uses, and encoded payloads are decoded exactly once. The first
//! violation is returned and no network call is made.

use std::sync::LazyLock;

use regex::Regex;
use secrecy::SecretString;

use crate::domain::errors::ValidationError;
use crate::domain::models::{
    decode_payload, CredentialAssignment, CredentialKind, SyncConfig, ValueEncoding,
};

/// AWS access key id: 20 uppercase alphanumerics.
static ACCESS_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{20}$").expect("valid access key pattern"));

/// AWS secret access key: 40 characters of the base64 alphabet.
static SECRET_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9/+=]{40}$").expect("valid secret key pattern"));

/// Terraform Cloud user/team token: `<id>.atlasv1.<secret>`.
static TFE_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]+\.atlasv1\.[A-Za-z0-9_-]+$").expect("valid tfe token pattern")
});

/// Validated inputs for one run.
#[derive(Debug)]
pub struct SyncInputs {
    pub host: String,
    pub token: SecretString,
    pub organization: String,
    pub workspace: String,
    /// Credentials to write, in processing order. Never empty.
    pub assignments: Vec<CredentialAssignment>,
}

fn required(name: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::MissingInput(name));
    }
    Ok(value.to_string())
}

/// Blank inputs count as absent.
fn optional(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn paired<'a>(
    first: (&'static str, Option<&'a str>),
    second: (&'static str, Option<&'a str>),
) -> Result<Option<(&'a str, &'a str)>, ValidationError> {
    match (first.1, second.1) {
        (Some(a), Some(b)) => Ok(Some((a, b))),
        (Some(_), None) => Err(ValidationError::UnpairedInput {
            present: first.0,
            missing: second.0,
        }),
        (None, Some(_)) => Err(ValidationError::UnpairedInput {
            present: second.0,
            missing: first.0,
        }),
        (None, None) => Ok(None),
    }
}

/// Validate `config` and derive the credential assignments to write.
pub fn validate(config: &SyncConfig) -> Result<SyncInputs, ValidationError> {
    let host = required("host", &config.host)?;
    let token = required("token", &config.token)?;
    let organization = required("organization", &config.organization)?;
    let workspace = required("workspace", &config.workspace)?;

    let mut assignments = Vec::new();
    let mut push_fixed = |kind: CredentialKind, value: String| {
        if let Some(assignment) = CredentialAssignment::fixed(kind, value) {
            assignments.push(assignment);
        }
    };

    let aws_keys = paired(
        (
            CredentialKind::AwsAccessKeyId.input_name(),
            optional(config.aws_access_key_id.as_deref()),
        ),
        (
            CredentialKind::AwsSecretAccessKey.input_name(),
            optional(config.aws_secret_access_key.as_deref()),
        ),
    )?;
    if let Some((access_key, secret_key)) = aws_keys {
        let access_key = access_key.trim();
        if !ACCESS_KEY_PATTERN.is_match(access_key) {
            return Err(ValidationError::InvalidAccessKey);
        }
        let secret_key = secret_key.trim();
        if !SECRET_KEY_PATTERN.is_match(secret_key) {
            return Err(ValidationError::InvalidSecretKey);
        }
        push_fixed(CredentialKind::AwsAccessKeyId, access_key.to_string());
        push_fixed(CredentialKind::AwsSecretAccessKey, secret_key.to_string());
    }

    if let Some(encoded) = optional(config.google_credentials.as_deref()) {
        let decoded = decode_payload(encoded).map_err(ValidationError::InvalidServiceAccount)?;
        push_fixed(CredentialKind::GoogleCredentials, decoded);
    }

    if let Some(tfe_token) = optional(config.tfe_token.as_deref()) {
        let tfe_token = tfe_token.trim();
        if !TFE_TOKEN_PATTERN.is_match(tfe_token) {
            return Err(ValidationError::InvalidTfeToken);
        }
        push_fixed(CredentialKind::TfeToken, tfe_token.to_string());
    }

    if let Some(session_token) = optional(config.aws_session_token.as_deref()) {
        push_fixed(CredentialKind::AwsSessionToken, session_token.to_string());
    }

    let custom = paired(
        ("variable_key", optional(config.variable_key.as_deref())),
        (
            CredentialKind::Custom.input_name(),
            optional(config.variable_value.as_deref()),
        ),
    )?;
    if let Some((key, value)) = custom {
        let key = key.trim();
        if assignments.iter().any(|a| a.key == key) {
            return Err(ValidationError::DuplicateVariable(key.to_string()));
        }
        let value = match config.variable_value_encoding {
            ValueEncoding::Plain => value.to_string(),
            ValueEncoding::Base64 => {
                decode_payload(value).map_err(ValidationError::InvalidVariableValue)?
            }
        };
        assignments.push(CredentialAssignment::new(CredentialKind::Custom, key, value));
    }

    if assignments.is_empty() {
        return Err(ValidationError::NoCredentialProvided);
    }

    Ok(SyncInputs {
        host,
        token: SecretString::from(token),
        organization,
        workspace,
        assignments,
    })
}
