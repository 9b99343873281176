//! Create-or-update reconciliation of credentials against a variable catalog.

use tracing::{debug, info};

use crate::domain::errors::SyncResult;
use crate::domain::models::{
    find_variable_id, CredentialAssignment, VariableAction, VariableOutcome, VariableRecord,
    WorkspaceRef,
};
use crate::domain::ports::VariableStore;

/// Write one credential: update the variable if the catalog has it,
/// otherwise create it.
pub async fn reconcile<S: VariableStore + ?Sized>(
    store: &S,
    workspace: &WorkspaceRef,
    catalog: &[VariableRecord],
    assignment: &CredentialAssignment,
) -> SyncResult<VariableOutcome> {
    let key = assignment.key.as_str();
    let outcome = if let Some(variable_id) = find_variable_id(catalog, key) {
        debug!(key, variable_id, "variable exists, updating");
        let existing = VariableRecord::new(key, variable_id);
        let written = store
            .update_variable(&workspace.id, &existing, &assignment.value)
            .await?;
        VariableOutcome {
            key: key.to_string(),
            variable_id: written.id,
            action: VariableAction::Updated,
        }
    } else {
        debug!(key, "variable not found in workspace, creating");
        let written = store
            .create_variable(&workspace.id, key, &assignment.value)
            .await?;
        VariableOutcome {
            key: key.to_string(),
            variable_id: written.id,
            action: VariableAction::Created,
        }
    };

    info!(
        key,
        variable_id = %outcome.variable_id,
        workspace = %workspace.name,
        "{} variable",
        outcome.action.as_str()
    );
    Ok(outcome)
}

/// Reconcile every assignment in order, stopping at the first failure.
///
/// Writes that already succeeded are not rolled back.
pub async fn reconcile_all<S: VariableStore + ?Sized>(
    store: &S,
    workspace: &WorkspaceRef,
    catalog: &[VariableRecord],
    assignments: &[CredentialAssignment],
) -> SyncResult<Vec<VariableOutcome>> {
    let mut outcomes = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        outcomes.push(reconcile(store, workspace, catalog, assignment).await?);
    }
    Ok(outcomes)
}
