//! Domain layer for the credential sync step
//!
//! Core types (configuration, credential assignments, variable records),
//! the error taxonomy, and the port the remote variable store implements.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{ApiStep, SyncError, SyncResult, ValidationError};
