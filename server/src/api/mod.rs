//! Client for the remote oracle API that scans chains and stores matched logs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{Credential, EventKind, Filter, Notification};

mod http;

pub use http::HttpOracleApi;

/// Action tag the API uses to route matches back to this plugin
pub const ORACLE_ACTION: &str = "metamask";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to oracle API failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("oracle API responded with {0}")]
    Status(reqwest::StatusCode),
    /// Business error reported in the `serverError` field of a response body
    #[error("{0}")]
    Server(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOracleRequest {
    pub name: String,
    pub event: EventKind,
    pub filters: Vec<Filter>,
    pub action: &'static str,
}

impl CreateOracleRequest {
    pub fn new(name: impl Into<String>, event: EventKind, filters: Vec<Filter>) -> Self {
        Self {
            name: name.into(),
            event,
            filters,
            action: ORACLE_ACTION,
        }
    }
}

/// Server-assigned identity of a freshly created oracle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedOracle {
    pub id: String,
    pub emoji: String,
}

/// Either shape the create endpoint answers with
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CreateOracleResponse {
    Rejected {
        #[serde(rename = "serverError")]
        server_error: String,
    },
    Created(CreatedOracle),
}

impl CreateOracleResponse {
    pub(crate) fn into_result(self) -> Result<CreatedOracle, ApiError> {
        match self {
            CreateOracleResponse::Rejected { server_error } => Err(ApiError::Server(server_error)),
            CreateOracleResponse::Created(created) => Ok(created),
        }
    }
}

/// A matched log as returned by `GET /api/oracles/{id}/logs`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub created_at: String,
    #[serde(default)]
    pub payload: Option<Value>,
}

impl LogEntry {
    /// Labels the log with the oracle's event name.
    pub fn into_notification(self, event: EventKind) -> Notification {
        let payload = match self.payload {
            Some(Value::Object(fields)) => Some(
                fields
                    .into_iter()
                    .map(|(key, value)| {
                        let value = match value {
                            Value::String(text) => text,
                            other => other.to_string(),
                        };
                        (key, value)
                    })
                    .collect(),
            ),
            _ => None,
        };

        Notification {
            event: event.label().to_string(),
            payload,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LogsResponse {
    pub logs: Vec<LogEntry>,
}

/// Authenticated operations against the oracle API
#[async_trait]
pub trait OracleApi: Send + Sync {
    async fn create_oracle(
        &self,
        token: &Credential,
        request: &CreateOracleRequest,
    ) -> Result<CreatedOracle, ApiError>;

    async fn delete_oracle(&self, token: &Credential, id: &str) -> Result<(), ApiError>;

    async fn fetch_logs(&self, token: &Credential, id: &str) -> Result<Vec<LogEntry>, ApiError>;
}
