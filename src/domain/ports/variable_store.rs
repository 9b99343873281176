use async_trait::async_trait;
use secrecy::SecretString;

use crate::domain::errors::SyncResult;
use crate::domain::models::VariableRecord;

/// Remote workspace variable store.
///
/// Every method is a single request/response exchange. Implementations
/// must not retry: any transport failure or unexpected status is returned
/// as an error and ends the run.
#[async_trait]
pub trait VariableStore: Send + Sync {
    /// Resolve a workspace name within an organization to its identifier.
    async fn resolve_workspace(&self, organization: &str, workspace: &str) -> SyncResult<String>;

    /// Full variable catalog of a workspace, in the order the service returns it.
    async fn list_variables(&self, workspace_id: &str) -> SyncResult<Vec<VariableRecord>>;

    /// Overwrite the value of an existing variable.
    async fn update_variable(
        &self,
        workspace_id: &str,
        variable: &VariableRecord,
        value: &SecretString,
    ) -> SyncResult<VariableRecord>;

    /// Create a sensitive environment variable in the workspace.
    async fn create_variable(
        &self,
        workspace_id: &str,
        key: &str,
        value: &SecretString,
    ) -> SyncResult<VariableRecord>;
}
