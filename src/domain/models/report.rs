use serde::Serialize;

use super::variable::WorkspaceRef;

/// Whether a variable was created or overwritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableAction {
    Created,
    Updated,
}

impl VariableAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// Result of reconciling one credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableOutcome {
    pub key: String,
    pub variable_id: String,
    pub action: VariableAction,
}

/// Everything a successful run wrote, in processing order.
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub workspace: WorkspaceRef,
    pub variables: Vec<VariableOutcome>,
}

impl SyncReport {
    pub fn count(&self, action: VariableAction) -> usize {
        self.variables.iter().filter(|v| v.action == action).count()
    }
}
