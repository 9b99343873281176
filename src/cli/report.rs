//! Failure reporting.
//!
//! A failed run logs the reason, annotates the workflow when running under
//! GitHub Actions, and exits non-zero.

use std::io::Write;
use std::process::ExitCode;

use tracing::error;

use crate::infrastructure::logging::SecretScrubber;

/// Returns true when running as a GitHub Actions step.
pub fn running_in_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true")
}

/// Escape `message` for use as workflow command data.
pub fn escape_workflow_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// The `::error::` workflow command that marks the step as failed.
pub fn error_annotation(message: &str) -> String {
    format!("::error::{}", escape_workflow_data(message))
}

/// Report a fatal error and return the failing exit status.
///
/// The annotation goes to `out`, which is stdout outside of tests.
pub fn fail<W: Write>(out: &mut W, message: &str, scrubber: &SecretScrubber) -> ExitCode {
    let message = scrubber.scrub(message);
    error!("{message}");
    if running_in_github_actions() {
        if let Err(err) = writeln!(out, "{}", error_annotation(&message)) {
            error!(%err, "failed to write workflow annotation");
        }
    }
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_workflow_data() {
        assert_eq!(
            escape_workflow_data("100% failed\r\nnext line"),
            "100%25 failed%0D%0Anext line"
        );
    }

    #[test]
    fn test_error_annotation() {
        assert_eq!(
            error_annotation("no credential provided"),
            "::error::no credential provided"
        );
    }

    #[test]
    fn test_fail_annotates_scrubbed_message() {
        let scrubber = SecretScrubber::new().with_known_secrets(["hunter2-token"]);
        let mut out = Vec::new();
        let code = temp_env::with_var("GITHUB_ACTIONS", Some("true"), || {
            fail(&mut out, "token hunter2-token\nwas rejected", &scrubber)
        });

        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
        let written = String::from_utf8(out).unwrap();
        assert!(written.starts_with("::error::token "));
        assert!(written.ends_with("%0Awas rejected\n"));
        assert!(!written.contains("hunter2-token"));
    }

    #[test]
    fn test_fail_outside_actions_writes_nothing() {
        let mut out = Vec::new();
        let code = temp_env::with_var("GITHUB_ACTIONS", None::<&str>, || {
            fail(&mut out, "no credential provided", &SecretScrubber::new())
        });

        assert_eq!(format!("{code:?}"), format!("{:?}", ExitCode::FAILURE));
        assert!(out.is_empty());
    }

    #[test]
    fn test_github_actions_detection() {
        temp_env::with_var("GITHUB_ACTIONS", Some("true"), || {
            assert!(running_in_github_actions());
        });
        temp_env::with_var("GITHUB_ACTIONS", None::<&str>, || {
            assert!(!running_in_github_actions());
        });
    }
}
