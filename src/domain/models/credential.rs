//! Credential kinds and the values written for them.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use secrecy::SecretString;
use thiserror::Error;

/// A credential the step knows how to write.
///
/// Declaration order is the order the reconciler processes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CredentialKind {
    AwsAccessKeyId,
    AwsSecretAccessKey,
    GoogleCredentials,
    TfeToken,
    AwsSessionToken,
    /// The free-form `variable_key` / `variable_value` pair
    Custom,
}

impl CredentialKind {
    /// Kinds with a fixed destination variable, in processing order.
    pub const FIXED: [Self; 5] = [
        Self::AwsAccessKeyId,
        Self::AwsSecretAccessKey,
        Self::GoogleCredentials,
        Self::TfeToken,
        Self::AwsSessionToken,
    ];

    /// Destination variable name, `None` for [`CredentialKind::Custom`].
    pub const fn variable_name(self) -> Option<&'static str> {
        match self {
            Self::AwsAccessKeyId => Some("AWS_ACCESS_KEY_ID"),
            Self::AwsSecretAccessKey => Some("AWS_SECRET_ACCESS_KEY"),
            Self::GoogleCredentials => Some("GOOGLE_CREDENTIALS"),
            Self::TfeToken => Some("TFE_TOKEN"),
            Self::AwsSessionToken => Some("AWS_SESSION_TOKEN"),
            Self::Custom => None,
        }
    }

    /// The input this credential is read from.
    pub const fn input_name(self) -> &'static str {
        match self {
            Self::AwsAccessKeyId => "aws_access_key_id",
            Self::AwsSecretAccessKey => "aws_secret_access_key",
            Self::GoogleCredentials => "google_credentials",
            Self::TfeToken => "tfe_token",
            Self::AwsSessionToken => "aws_session_token",
            Self::Custom => "variable_value",
        }
    }
}

/// A (variable name, value) pair to reconcile against the workspace.
#[derive(Debug)]
pub struct CredentialAssignment {
    pub kind: CredentialKind,
    pub key: String,
    pub value: SecretString,
}

impl CredentialAssignment {
    pub fn new(kind: CredentialKind, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            key: key.into(),
            value: SecretString::from(value.into()),
        }
    }

    /// Assignment for a kind with a fixed destination variable.
    ///
    /// Returns `None` for [`CredentialKind::Custom`].
    pub fn fixed(kind: CredentialKind, value: impl Into<String>) -> Option<Self> {
        kind.variable_name().map(|key| Self::new(kind, key, value))
    }
}

/// Remove every `\r` and `\n` from `value`.
pub fn strip_line_endings(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Why a base64 payload was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadError {
    #[error("payload is empty")]
    Empty,

    #[error("payload is not valid base64 ({0})")]
    NotBase64(String),

    #[error("payload decodes to bytes that are not UTF-8 text")]
    NotUtf8,
}

/// Decode a base64 payload once and strip line endings from the result.
///
/// ASCII whitespace in the encoded form (wrapped `base64` output) is
/// ignored. The decoded bytes must be UTF-8.
pub fn decode_payload(encoded: &str) -> Result<String, PayloadError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    if compact.is_empty() {
        return Err(PayloadError::Empty);
    }
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| PayloadError::NotBase64(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|_| PayloadError::NotUtf8)?;
    Ok(strip_line_endings(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_fixed_kinds_have_variable_names() {
        for kind in CredentialKind::FIXED {
            assert!(kind.variable_name().is_some(), "{kind:?}");
        }
        assert!(CredentialKind::Custom.variable_name().is_none());
        assert!(CredentialAssignment::fixed(CredentialKind::Custom, "x").is_none());
    }

    #[test]
    fn test_fixed_assignment_uses_destination_name() {
        let assignment =
            CredentialAssignment::fixed(CredentialKind::AwsAccessKeyId, "AKIAABCDEFGHIJKLMNO1")
                .unwrap();
        assert_eq!(assignment.key, "AWS_ACCESS_KEY_ID");
        assert_eq!(assignment.value.expose_secret(), "AKIAABCDEFGHIJKLMNO1");
    }

    #[test]
    fn test_decode_strips_embedded_line_endings() {
        let encoded = STANDARD.encode("{\n  \"type\": \"service_account\"\r\n}\n");
        assert_eq!(
            decode_payload(&encoded).unwrap(),
            "{  \"type\": \"service_account\"}"
        );
    }

    #[test]
    fn test_decode_happens_once() {
        // "e30=" is the encoding of "{}"; decoding twice would fail.
        let twice_encoded = STANDARD.encode("e30=");
        assert_eq!(decode_payload(&twice_encoded).unwrap(), "e30=");
    }

    #[test]
    fn test_decode_ignores_wrapped_encoding() {
        let encoded = STANDARD.encode("x".repeat(100));
        let wrapped = format!("{}\n{}\n", &encoded[..76], &encoded[76..]);
        assert_eq!(decode_payload(&wrapped).unwrap(), "x".repeat(100));
    }

    #[test]
    fn test_decode_rejects_invalid_alphabet() {
        assert!(matches!(
            decode_payload("not!base64"),
            Err(PayloadError::NotBase64(_))
        ));
        assert_eq!(decode_payload("   "), Err(PayloadError::Empty));
    }

    #[test]
    fn test_decode_rejects_non_utf8() {
        let encoded = STANDARD.encode([0xff, 0xfe, 0xfd]);
        let err = decode_payload(&encoded).unwrap_err();
        assert_eq!(err, PayloadError::NotUtf8);
        assert!(!err.to_string().contains("not valid base64"));
    }

    proptest! {
        #[test]
        fn decoding_an_encoded_payload_only_drops_line_endings(payload in "\\PC*(\r?\n\\PC*){0,4}") {
            let encoded = STANDARD.encode(&payload);
            prop_assume!(!encoded.is_empty());
            let decoded = decode_payload(&encoded).unwrap();
            prop_assert_eq!(decoded, strip_line_endings(&payload));
        }
    }
}
