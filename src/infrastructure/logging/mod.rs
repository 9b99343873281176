//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON, pretty or compact console output on stderr
//! - Optional rotated JSON log file
//! - Secret scrubbing for reported errors

pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::{LogFormat, RotationPolicy};
pub use logger::LoggerImpl;
pub use secret_scrubbing::SecretScrubber;
