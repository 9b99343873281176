//! Common test utilities for integration tests
//!
//! Provides an in-memory [`VariableStore`] that records every call, plus
//! config fixtures shared across test files.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use tfc_credential_sync::{ApiStep, SyncConfig, SyncError, SyncResult, VariableRecord, VariableStore};

pub const ACCESS_KEY: &str = "AKIAABCDEFGHIJKLMNO1";
pub const SECRET_KEY: &str = "wJalrXUtnFEMI/K7MDENG/bPxRfiCYEXAMPLEKEY";
pub const TFE_TOKEN: &str = "Xb8tZjKqR2pLmw.atlasv1.aBcD3fGh_iJkLmN-oPqRsT";

/// A remote call as seen by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Resolve {
        organization: String,
        workspace: String,
    },
    List {
        workspace_id: String,
    },
    Update {
        workspace_id: String,
        variable_id: String,
        key: String,
        value: String,
    },
    Create {
        workspace_id: String,
        key: String,
        value: String,
    },
}

/// Call-recording stub of the remote variable store.
pub struct RecordingStore {
    pub workspace_id: String,
    pub catalog: Vec<VariableRecord>,
    /// Writes to this variable fail with a 500
    pub failing_key: Option<String>,
    calls: Mutex<Vec<Call>>,
}

impl RecordingStore {
    pub fn new(workspace_id: &str, catalog: Vec<VariableRecord>) -> Self {
        Self {
            workspace_id: workspace_id.to_string(),
            catalog,
            failing_key: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, key: &str) -> Self {
        self.failing_key = Some(key.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self, key: &str, step: ApiStep) -> SyncResult<()> {
        if self.failing_key.as_deref() == Some(key) {
            return Err(SyncError::UnexpectedStatus {
                step,
                status: StatusCode::INTERNAL_SERVER_ERROR,
                detail: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl VariableStore for RecordingStore {
    async fn resolve_workspace(&self, organization: &str, workspace: &str) -> SyncResult<String> {
        self.record(Call::Resolve {
            organization: organization.to_string(),
            workspace: workspace.to_string(),
        });
        Ok(self.workspace_id.clone())
    }

    async fn list_variables(&self, workspace_id: &str) -> SyncResult<Vec<VariableRecord>> {
        self.record(Call::List {
            workspace_id: workspace_id.to_string(),
        });
        Ok(self.catalog.clone())
    }

    async fn update_variable(
        &self,
        workspace_id: &str,
        variable: &VariableRecord,
        value: &SecretString,
    ) -> SyncResult<VariableRecord> {
        self.record(Call::Update {
            workspace_id: workspace_id.to_string(),
            variable_id: variable.id.clone(),
            key: variable.name.clone(),
            value: value.expose_secret().to_string(),
        });
        self.check_failure(&variable.name, ApiStep::UpdateVariable(variable.name.clone()))?;
        Ok(variable.clone())
    }

    async fn create_variable(
        &self,
        workspace_id: &str,
        key: &str,
        value: &SecretString,
    ) -> SyncResult<VariableRecord> {
        self.record(Call::Create {
            workspace_id: workspace_id.to_string(),
            key: key.to_string(),
            value: value.expose_secret().to_string(),
        });
        self.check_failure(key, ApiStep::CreateVariable(key.to_string()))?;
        Ok(VariableRecord::new(key, format!("var-new-{}", key.to_lowercase())))
    }
}

/// Config with the required inputs set and no credentials.
pub fn base_config() -> SyncConfig {
    SyncConfig::new("acme", "prod", "api-token")
}

/// Config carrying a well-formed AWS key pair.
pub fn aws_config() -> SyncConfig {
    SyncConfig {
        aws_access_key_id: Some(ACCESS_KEY.to_string()),
        aws_secret_access_key: Some(SECRET_KEY.to_string()),
        ..base_config()
    }
}
