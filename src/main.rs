//! tfc-credential-sync entry point.

use std::process::ExitCode;

use clap::Parser;

use tfc_credential_sync::cli::{commands, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    commands::sync::execute(Cli::parse()).await
}
