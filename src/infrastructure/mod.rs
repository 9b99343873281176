//! Infrastructure layer module
//!
//! Adapters and external integrations:
//! - Terraform Cloud API client
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod tfc;
