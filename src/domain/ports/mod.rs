//! Port trait definitions (Hexagonal Architecture)
//!
//! - VariableStore: workspace lookup and variable reads/writes on the remote service

pub mod variable_store;

pub use variable_store::VariableStore;
