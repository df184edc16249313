use async_trait::async_trait;
use reqwest::{header, Client, RequestBuilder};
use tracing::debug;

use super::{
    ApiError, CreateOracleRequest, CreateOracleResponse, CreatedOracle, LogEntry, LogsResponse,
    OracleApi,
};
use crate::models::Credential;

/// [`OracleApi`] over HTTP with bearer-token authentication
#[derive(Clone)]
pub struct HttpOracleApi {
    base_url: String,
    http: Client,
}

impl HttpOracleApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    fn oracles_url(&self) -> String {
        format!("{}/api/oracles", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder, token: &Credential) -> RequestBuilder {
        request
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(token.expose())
    }
}

#[async_trait]
impl OracleApi for HttpOracleApi {
    async fn create_oracle(
        &self,
        token: &Credential,
        request: &CreateOracleRequest,
    ) -> Result<CreatedOracle, ApiError> {
        // Rejections come back as a `serverError` body, so the status is not checked here.
        let response = self
            .authorized(self.http.post(self.oracles_url()), token)
            .json(request)
            .send()
            .await?
            .json::<CreateOracleResponse>()
            .await?;

        response.into_result()
    }

    async fn delete_oracle(&self, token: &Credential, id: &str) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.oracles_url(), id);
        let response = self.authorized(self.http.delete(url), token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        Ok(())
    }

    async fn fetch_logs(&self, token: &Credential, id: &str) -> Result<Vec<LogEntry>, ApiError> {
        let url = format!("{}/{}/logs", self.oracles_url(), id);
        let response = self.authorized(self.http.get(url), token).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.json::<LogsResponse>().await?;
        debug!(oracle_id = id, logs = body.logs.len(), "fetched oracle logs");
        Ok(body.logs)
    }
}
