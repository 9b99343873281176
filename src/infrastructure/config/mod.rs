//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - GitHub Actions `INPUT_*` inputs
//! - Environment variable and command-line overrides
//! - Structural validation

pub mod loader;

pub use loader::{
    ConfigError, ConfigLoader, ConfigOverrides, HttpOverrides, LoggingOverrides,
    DEFAULT_CONFIG_FILE,
};
