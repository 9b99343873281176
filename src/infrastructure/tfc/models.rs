//! JSON:API payloads for the workspace and variable endpoints.
//!
//! Only the fields the sync reads or writes are modelled. Write payloads
//! borrow the secret value for the lifetime of the request and deliberately
//! do not implement `Debug`.

use serde::{Deserialize, Serialize};

use crate::domain::models::VariableRecord;

/// Media type for every request and response.
pub const JSON_API: &str = "application/vnd.api+json";

/// Top-level `{ "data": ... }` document.
#[derive(Debug, Clone, Deserialize)]
pub struct Document<T> {
    pub data: T,
}

/// `data` of `GET /organizations/{org}/workspaces/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceResource {
    pub id: String,
}

/// One element of a variable collection, or the result of a write.
#[derive(Debug, Clone, Deserialize)]
pub struct VarResource {
    pub id: String,
    pub attributes: VarAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VarAttributes {
    pub key: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sensitive: bool,
}

impl From<VarResource> for VariableRecord {
    fn from(resource: VarResource) -> Self {
        Self {
            name: resource.attributes.key,
            id: resource.id,
        }
    }
}

/// Body of a variable create (`POST`) or update (`PATCH`).
#[derive(Serialize)]
pub struct VarWriteDocument<'a> {
    pub data: VarWriteData<'a>,
}

#[derive(Serialize)]
pub struct VarWriteData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub attributes: VarWriteAttributes<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<VarRelationships<'a>>,
}

/// Variables are always written as sensitive, non-HCL environment variables.
#[derive(Serialize)]
pub struct VarWriteAttributes<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<&'a str>,
    pub value: &'a str,
    pub category: &'static str,
    pub hcl: bool,
    pub sensitive: bool,
}

#[derive(Serialize)]
pub struct VarRelationships<'a> {
    pub workspace: Relationship<'a>,
}

#[derive(Serialize)]
pub struct Relationship<'a> {
    pub data: ResourceIdentifier<'a>,
}

#[derive(Serialize)]
pub struct ResourceIdentifier<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: &'a str,
}

impl<'a> VarWriteAttributes<'a> {
    const fn env(key: Option<&'a str>, value: &'a str) -> Self {
        Self {
            key,
            value,
            category: "env",
            hcl: false,
            sensitive: true,
        }
    }
}

impl<'a> VarWriteDocument<'a> {
    /// `PATCH /workspaces/{workspace_id}/vars/{variable_id}` body.
    pub const fn update(variable_id: &'a str, value: &'a str) -> Self {
        Self {
            data: VarWriteData {
                id: Some(variable_id),
                kind: "vars",
                attributes: VarWriteAttributes::env(None, value),
                relationships: None,
            },
        }
    }

    /// `POST /workspaces/{workspace_id}/vars` body.
    pub const fn create(workspace_id: &'a str, key: &'a str, value: &'a str) -> Self {
        Self {
            data: VarWriteData {
                id: None,
                kind: "vars",
                attributes: VarWriteAttributes::env(Some(key), value),
                relationships: Some(VarRelationships {
                    workspace: Relationship {
                        data: ResourceIdentifier {
                            kind: "workspaces",
                            id: workspace_id,
                        },
                    },
                }),
            },
        }
    }
}

/// JSON:API error document returned with non-success statuses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDocument {
    #[serde(default)]
    pub errors: Vec<ApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorDocument {
    /// `title: detail` of each error joined with `"; "`, `None` if there are none.
    pub fn summary(&self) -> Option<String> {
        let parts: Vec<String> = self
            .errors
            .iter()
            .filter_map(|e| match (e.title.as_deref(), e.detail.as_deref()) {
                (Some(title), Some(detail)) if title != detail => Some(format!("{title}: {detail}")),
                (Some(text), _) | (None, Some(text)) => Some(text.to_string()),
                (None, None) => None,
            })
            .collect();
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}
