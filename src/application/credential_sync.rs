//! The sync pipeline: validate, resolve, list, reconcile.

use tracing::{debug, info, instrument};

use crate::application::reconciler::reconcile_all;
use crate::application::validation::{validate, SyncInputs};
use crate::domain::errors::SyncResult;
use crate::domain::models::{SyncConfig, SyncReport, WorkspaceRef};
use crate::domain::ports::VariableStore;

/// Runs one credential sync against a [`VariableStore`].
pub struct CredentialSync<S> {
    store: S,
}

impl<S: VariableStore> CredentialSync<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Validate `config`, then sync. Nothing is sent if validation fails.
    pub async fn run(&self, config: &SyncConfig) -> SyncResult<SyncReport> {
        let inputs = validate(config)?;
        self.sync(&inputs).await
    }

    /// Resolve the workspace, fetch its catalog once, and write each credential in order.
    #[instrument(skip_all, fields(organization = %inputs.organization, workspace = %inputs.workspace))]
    pub async fn sync(&self, inputs: &SyncInputs) -> SyncResult<SyncReport> {
        let workspace_id = self
            .store
            .resolve_workspace(&inputs.organization, &inputs.workspace)
            .await?;
        debug!(workspace_id = %workspace_id, "resolved workspace");
        let workspace = WorkspaceRef {
            name: inputs.workspace.clone(),
            id: workspace_id,
        };

        let catalog = self.store.list_variables(&workspace.id).await?;
        debug!(count = catalog.len(), "fetched variable catalog");

        let variables = reconcile_all(&self.store, &workspace, &catalog, &inputs.assignments).await?;
        info!(written = variables.len(), "credential sync complete");

        Ok(SyncReport {
            workspace,
            variables,
        })
    }
}
