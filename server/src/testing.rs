//! In-crate fakes for the API and notification sinks

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::{ApiError, CreateOracleRequest, CreatedOracle, LogEntry, OracleApi};
use crate::models::Credential;
use crate::notifier::{NotificationChannel, Notifier};
use crate::ui::Component;

#[derive(Debug, Clone)]
pub enum CreateOutcome {
    Created(CreatedOracle),
    Rejected(String),
    Unreachable,
}

impl Default for CreateOutcome {
    fn default() -> Self {
        CreateOutcome::Created(CreatedOracle {
            id: "1".into(),
            emoji: "🔮".into(),
        })
    }
}

/// Records every call; answers come from the configured outcomes.
#[derive(Default)]
pub struct FakeApi {
    calls: Mutex<Vec<String>>,
    created: Mutex<Vec<CreateOracleRequest>>,
    create_outcome: Mutex<CreateOutcome>,
    delete_fails: Mutex<bool>,
    // `None` makes the fetch fail.
    logs: Mutex<HashMap<String, Option<Vec<LogEntry>>>>,
}

impl FakeApi {
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn created_requests(&self) -> Vec<CreateOracleRequest> {
        self.created.lock().unwrap().clone()
    }

    pub fn set_create_outcome(&self, outcome: CreateOutcome) {
        *self.create_outcome.lock().unwrap() = outcome;
    }

    pub fn fail_deletes(&self) {
        *self.delete_fails.lock().unwrap() = true;
    }

    pub fn set_logs(&self, id: &str, logs: Vec<LogEntry>) {
        self.logs.lock().unwrap().insert(id.to_string(), Some(logs));
    }

    pub fn fail_logs(&self, id: &str) {
        self.logs.lock().unwrap().insert(id.to_string(), None);
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl OracleApi for FakeApi {
    async fn create_oracle(
        &self,
        token: &Credential,
        request: &CreateOracleRequest,
    ) -> Result<CreatedOracle, ApiError> {
        self.record(format!("POST /api/oracles as {}", token.expose()));
        self.created.lock().unwrap().push(request.clone());

        match self.create_outcome.lock().unwrap().clone() {
            CreateOutcome::Created(created) => Ok(created),
            CreateOutcome::Rejected(message) => Err(ApiError::Server(message)),
            CreateOutcome::Unreachable => Err(ApiError::Status(StatusCode::BAD_GATEWAY)),
        }
    }

    async fn delete_oracle(&self, token: &Credential, id: &str) -> Result<(), ApiError> {
        self.record(format!("DELETE /api/oracles/{id} as {}", token.expose()));
        if *self.delete_fails.lock().unwrap() {
            return Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(())
    }

    async fn fetch_logs(&self, token: &Credential, id: &str) -> Result<Vec<LogEntry>, ApiError> {
        self.record(format!("GET /api/oracles/{id}/logs as {}", token.expose()));
        match self.logs.lock().unwrap().get(id) {
            Some(Some(logs)) => Ok(logs.clone()),
            Some(None) => Err(ApiError::Status(StatusCode::BAD_GATEWAY)),
            None => Ok(Vec::new()),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<(NotificationChannel, String)>>,
    dialogs: Mutex<Vec<Component>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<(NotificationChannel, String)> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn dialogs(&self) -> Vec<Component> {
        self.dialogs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, channel: NotificationChannel, message: &str) {
        self.notifications
            .lock()
            .unwrap()
            .push((channel, message.to_string()));
    }

    async fn dialog(&self, content: Component) {
        self.dialogs.lock().unwrap().push(content);
    }
}
