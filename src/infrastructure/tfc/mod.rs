//! Terraform Cloud API adapter
//!
//! - `client`: [`TfcClient`], the [`VariableStore`](crate::domain::ports::VariableStore) implementation
//! - `models`: JSON:API request and response payloads

pub mod client;
pub mod models;

pub use client::TfcClient;
