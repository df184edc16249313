//! Inbound events decoded once at the boundary

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::EventKind;
use crate::services::FormValues;
use crate::ui::names;

/// Event delivered by the host renderer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum UserInputEvent {
    #[serde(rename = "ButtonClickEvent", alias = "ButtonClick")]
    ButtonClick {
        #[serde(default)]
        name: Option<String>,
    },
    #[serde(rename = "FormSubmitEvent", alias = "FormSubmit")]
    FormSubmit {
        name: String,
        #[serde(default, alias = "values")]
        value: Option<HashMap<String, Option<String>>>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    BeginDraft(EventKind),
    ShowHome,
    ShowEventPicker,
    ShowApiKeyForm,
    DeleteOracle(String),
    ShowLogs(String),
    SubmitOracle(Option<FormValues>),
    SubmitApiKey(Option<String>),
    Ignore,
}

fn suffix_id(name: &str, prefix: &str) -> Option<String> {
    name.strip_prefix(prefix)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

impl Command {
    fn from_button(name: &str) -> Self {
        if let Ok(kind) = name.parse::<EventKind>() {
            return Command::BeginDraft(kind);
        }

        match name {
            names::HOME => Command::ShowHome,
            names::ADD => Command::ShowEventPicker,
            names::API_KEY => Command::ShowApiKeyForm,
            _ => {
                if let Some(id) = suffix_id(name, names::DELETE_PREFIX) {
                    Command::DeleteOracle(id)
                } else if let Some(id) = suffix_id(name, names::LOGS_PREFIX) {
                    Command::ShowLogs(id)
                } else {
                    Command::Ignore
                }
            }
        }
    }
}

impl From<UserInputEvent> for Command {
    fn from(event: UserInputEvent) -> Self {
        match event {
            UserInputEvent::ButtonClick { name: Some(name) } => Command::from_button(&name),
            UserInputEvent::FormSubmit { name, value } => {
                let values: Option<FormValues> = value.map(|fields| {
                    fields
                        .into_iter()
                        .filter_map(|(key, value)| value.map(|value| (key, value)))
                        .collect()
                });

                match name.as_str() {
                    names::NEW_ORACLE_FORM => Command::SubmitOracle(values),
                    names::API_KEY_FORM => Command::SubmitApiKey(
                        values.and_then(|mut values| values.remove(names::API_KEY_FIELD)),
                    ),
                    _ => Command::Ignore,
                }
            }
            UserInputEvent::ButtonClick { name: None } | UserInputEvent::Other => Command::Ignore,
        }
    }
}

/// JSON-RPC style call from a web page
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcCommand {
    Connect { key: Option<String> },
    Unknown(String),
}

impl From<RpcRequest> for RpcCommand {
    fn from(request: RpcRequest) -> Self {
        match request.method.as_str() {
            "connect" => RpcCommand::Connect {
                key: request
                    .params
                    .get("key")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            _ => RpcCommand::Unknown(request.method),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RpcResponse {
    Result { result: String },
    Error { error: String },
}

impl RpcResponse {
    pub fn ok() -> Self {
        RpcResponse::Result {
            result: "ok".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        RpcResponse::Error {
            error: message.into(),
        }
    }
}

/// Trigger delivered by the host's cron scheduler
#[derive(Debug, Clone, Deserialize)]
pub struct CronRequest {
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CronCommand {
    Execute,
    Unknown(String),
}

impl From<CronRequest> for CronCommand {
    fn from(request: CronRequest) -> Self {
        match request.method.as_str() {
            "execute" => CronCommand::Execute,
            _ => CronCommand::Unknown(request.method),
        }
    }
}
