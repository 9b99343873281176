//! Application layer: the credential sync use case.

pub mod credential_sync;
pub mod reconciler;
pub mod validation;

pub use credential_sync::CredentialSync;
pub use reconciler::{reconcile, reconcile_all};
pub use validation::{validate, SyncInputs};
