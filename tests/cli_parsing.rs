use std::path::PathBuf;

use clap::Parser;
use tfc_credential_sync::cli::Cli;
use tfc_credential_sync::domain::models::ValueEncoding;

#[test]
fn test_parse_no_flags() {
    let cli = Cli::try_parse_from(["tfc-credential-sync"]).unwrap();
    let overrides = cli.overrides();

    assert!(!cli.json);
    assert!(overrides.config_file.is_none());
    assert!(overrides.organization.is_none());
    assert!(overrides.http.timeout_secs.is_none());
}

#[test]
fn test_parse_workspace_flags() {
    let cli = Cli::try_parse_from([
        "tfc-credential-sync",
        "-o",
        "acme",
        "-w",
        "prod",
        "--host",
        "tfe.example.com",
        "--timeout-secs",
        "10",
        "--json",
    ])
    .unwrap();

    assert_eq!(cli.organization.as_deref(), Some("acme"));
    assert_eq!(cli.workspace.as_deref(), Some("prod"));
    assert!(cli.json);

    let overrides = cli.overrides();
    assert_eq!(overrides.host.as_deref(), Some("tfe.example.com"));
    assert_eq!(overrides.http.timeout_secs, Some(10));
}

#[test]
fn test_parse_custom_variable_flags() {
    let cli = Cli::try_parse_from([
        "tfc-credential-sync",
        "--variable-key",
        "KUBECONFIG_DATA",
        "--variable-value-encoding",
        "base64",
        "--config",
        "ci/tfc-sync.yaml",
    ])
    .unwrap();

    let overrides = cli.overrides();
    assert_eq!(overrides.variable_key.as_deref(), Some("KUBECONFIG_DATA"));
    assert_eq!(overrides.variable_value_encoding, Some(ValueEncoding::Base64));
    assert_eq!(overrides.config_file, Some(PathBuf::from("ci/tfc-sync.yaml")));
}

#[test]
fn test_parse_logging_flags() {
    let cli = Cli::try_parse_from([
        "tfc-credential-sync",
        "--log-level",
        "debug",
        "--log-format",
        "json",
        "--log-dir",
        "/tmp/logs",
    ])
    .unwrap();

    let logging = cli.overrides().logging;
    assert_eq!(logging.level.as_deref(), Some("debug"));
    assert_eq!(logging.format.as_deref(), Some("json"));
    assert_eq!(logging.log_dir, Some(PathBuf::from("/tmp/logs")));
}

#[test]
fn test_reject_unknown_encoding() {
    let result = Cli::try_parse_from([
        "tfc-credential-sync",
        "--variable-value-encoding",
        "hex",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_secrets_are_not_flags() {
    let result = Cli::try_parse_from([
        "tfc-credential-sync",
        "--aws-secret-access-key",
        "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_ambient_token_is_not_a_flag() {
    let cli = temp_env::with_var("TFC_TOKEN", Some("from-ambient-env"), || {
        Cli::try_parse_from(["tfc-credential-sync", "-o", "acme"]).unwrap()
    });

    assert!(cli.token.is_none());
    assert!(cli.overrides().token.is_none());
}
