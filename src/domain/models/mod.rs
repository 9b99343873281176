pub mod config;
pub mod credential;
pub mod report;
pub mod variable;

pub use config::{HttpConfig, LoggingConfig, SyncConfig, ValueEncoding};
pub use credential::{
    decode_payload, strip_line_endings, CredentialAssignment, CredentialKind, PayloadError,
};
pub use report::{SyncReport, VariableAction, VariableOutcome};
pub use variable::{find_variable_id, VariableRecord, WorkspaceRef};
