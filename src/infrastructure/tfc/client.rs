//! Terraform Cloud / Enterprise HTTP client.
//!
//! Implements [`VariableStore`] over the v2 JSON:API. Every call is a single
//! exchange with an exact expected status; there is no retry.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use super::models::{Document, ErrorDocument, VarResource, VarWriteDocument, WorkspaceResource, JSON_API};
use crate::domain::errors::{ApiStep, SyncError, SyncResult};
use crate::domain::models::VariableRecord;
use crate::domain::ports::VariableStore;

/// HTTP client for the Terraform Cloud variable API.
pub struct TfcClient {
    http: Client,
    host: String,
    token: SecretString,
}

impl TfcClient {
    /// Build a client for `host` with a per-request timeout.
    ///
    /// `host` is a bare hostname (`app.terraform.io`, reached over https)
    /// or a base URL with an explicit scheme. It is not checked here; an
    /// unusable host surfaces as [`SyncError::InvalidHost`] on first use.
    pub fn new(host: impl Into<String>, token: SecretString, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("tfc-credential-sync/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            host: host.into(),
            token,
        })
    }

    fn base_url(&self) -> String {
        let host = self.host.trim().trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }

    /// `<base>/api/v2/<segments...>`, each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> SyncResult<Url> {
        let invalid = || SyncError::InvalidHost(self.host.clone());
        let mut url = Url::parse(&self.base_url()).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(["api", "v2"])
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .request(method, url)
            .header(CONTENT_TYPE, JSON_API)
            .header(ACCEPT, JSON_API)
            .bearer_auth(self.token.expose_secret())
    }

    /// Send `request` and require exactly `expected` back.
    async fn send(
        &self,
        step: &ApiStep,
        request: RequestBuilder,
        expected: StatusCode,
    ) -> SyncResult<Response> {
        let response = request.send().await.map_err(|source| SyncError::Transport {
            step: step.clone(),
            source,
        })?;

        let status = response.status();
        if status != expected {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorDocument>(&body)
                .ok()
                .and_then(|doc| doc.summary());
            warn!(%step, %status, "unexpected response status");
            return Err(SyncError::UnexpectedStatus {
                step: step.clone(),
                status,
                detail,
            });
        }

        Ok(response)
    }

    async fn parse<T: DeserializeOwned>(step: &ApiStep, response: Response) -> SyncResult<T> {
        let bytes = response.bytes().await.map_err(|source| SyncError::Transport {
            step: step.clone(),
            source,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| SyncError::Decode {
            step: step.clone(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl VariableStore for TfcClient {
    #[instrument(skip(self))]
    async fn resolve_workspace(&self, organization: &str, workspace: &str) -> SyncResult<String> {
        let step = ApiStep::WorkspaceLookup;
        let url = self.endpoint(&["organizations", organization, "workspaces", workspace])?;
        debug!(%url, "looking up workspace");

        let response = self
            .send(&step, self.request(Method::GET, url), StatusCode::OK)
            .await?;
        let doc: Document<WorkspaceResource> = Self::parse(&step, response).await?;
        if doc.data.id.is_empty() {
            return Err(SyncError::Decode {
                step,
                reason: "workspace id is empty".to_string(),
            });
        }
        Ok(doc.data.id)
    }

    #[instrument(skip(self))]
    async fn list_variables(&self, workspace_id: &str) -> SyncResult<Vec<VariableRecord>> {
        let step = ApiStep::ListVariables;
        let url = self.endpoint(&["workspaces", workspace_id, "vars"])?;
        debug!(%url, "listing workspace variables");

        let response = self
            .send(&step, self.request(Method::GET, url), StatusCode::OK)
            .await?;
        let doc: Document<Vec<VarResource>> = Self::parse(&step, response).await?;
        Ok(doc.data.into_iter().map(VariableRecord::from).collect())
    }

    #[instrument(skip(self, value), fields(key = %variable.name, variable_id = %variable.id))]
    async fn update_variable(
        &self,
        workspace_id: &str,
        variable: &VariableRecord,
        value: &SecretString,
    ) -> SyncResult<VariableRecord> {
        let step = ApiStep::UpdateVariable(variable.name.clone());
        let url = self.endpoint(&["workspaces", workspace_id, "vars", &variable.id])?;
        debug!(%url, "updating variable");

        let body = VarWriteDocument::update(&variable.id, value.expose_secret());
        let request = self.request(Method::PATCH, url).json(&body);
        let response = self.send(&step, request, StatusCode::OK).await?;
        let doc: Document<VarResource> = Self::parse(&step, response).await?;
        Ok(doc.data.into())
    }

    #[instrument(skip(self, value))]
    async fn create_variable(
        &self,
        workspace_id: &str,
        key: &str,
        value: &SecretString,
    ) -> SyncResult<VariableRecord> {
        let step = ApiStep::CreateVariable(key.to_string());
        let url = self.endpoint(&["workspaces", workspace_id, "vars"])?;
        debug!(%url, "creating variable");

        let body = VarWriteDocument::create(workspace_id, key, value.expose_secret());
        let request = self.request(Method::POST, url).json(&body);
        let response = self.send(&step, request, StatusCode::CREATED).await?;
        let doc: Document<VarResource> = Self::parse(&step, response).await?;
        Ok(doc.data.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(host: &str) -> TfcClient {
        TfcClient::new(host, SecretString::from("token".to_string()), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_bare_host_uses_https() {
        let url = client("app.terraform.io")
            .endpoint(&["organizations", "acme", "workspaces", "prod"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://app.terraform.io/api/v2/organizations/acme/workspaces/prod"
        );
    }

    #[test]
    fn test_explicit_scheme_and_trailing_slash() {
        let url = client("http://127.0.0.1:8080/")
            .endpoint(&["workspaces", "ws-123", "vars"])
            .unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v2/workspaces/ws-123/vars");
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        let url = client("tfe.example.com")
            .endpoint(&["organizations", "acme corp", "workspaces", "a/b"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://tfe.example.com/api/v2/organizations/acme%20corp/workspaces/a%2Fb"
        );
    }

    #[test]
    fn test_empty_host_is_invalid() {
        let err = client("").endpoint(&["workspaces"]).unwrap_err();
        assert!(matches!(err, SyncError::InvalidHost(_)));
    }
}
