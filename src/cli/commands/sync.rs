//! Implementation of the sync run: load config, write credentials, report.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::application::{validate, CredentialSync};
use crate::cli::output::output;
use crate::cli::report::fail;
use crate::cli::types::Cli;
use crate::domain::models::{LoggingConfig, SyncConfig};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LoggerImpl, SecretScrubber};
use crate::infrastructure::tfc::TfcClient;

pub async fn execute(cli: Cli) -> ExitCode {
    let loaded = ConfigLoader::load(&cli.overrides());

    // Fall back to default logging so a config error is still reported.
    let logging = loaded
        .as_ref()
        .map(|config| config.logging.clone())
        .unwrap_or_else(|_| LoggingConfig::default());
    let _logger = match LoggerImpl::init(&logging) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = io::stdout();
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            return fail(
                &mut stdout,
                &format!("configuration error: {err:#}"),
                &SecretScrubber::new(),
            );
        }
    };
    debug!(?config, "loaded configuration");

    run(&config, cli.json, &mut stdout).await
}

/// Validate `config`, write its credentials and report the outcome to `out`.
///
/// The client is built from the validated inputs, so nothing is sent when
/// validation fails.
pub async fn run<W: Write>(config: &SyncConfig, json: bool, out: &mut W) -> ExitCode {
    let scrubber = SecretScrubber::new().with_known_secrets(config.secret_values());

    let inputs = match validate(config) {
        Ok(inputs) => inputs,
        Err(err) => return fail(out, &err.to_string(), &scrubber),
    };

    let token = SecretString::from(inputs.token.expose_secret().to_owned());
    let timeout = Duration::from_secs(config.http.timeout_secs);
    let client = match TfcClient::new(inputs.host.as_str(), token, timeout) {
        Ok(client) => client,
        Err(err) => return fail(out, &format!("{err:#}"), &scrubber),
    };

    match CredentialSync::new(client).sync(&inputs).await {
        Ok(report) => {
            if let Err(err) = output(out, &report, json) {
                warn!(%err, "failed to write run summary");
            }
            ExitCode::SUCCESS
        }
        Err(err) => fail(out, &err.to_string(), &scrubber),
    }
}
