//! HTTP handlers the extension host talks to

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::dispatcher::{CronCommand, CronRequest, Dispatcher, RpcRequest, RpcResponse, UserInputEvent};
use crate::services::NotificationPoller;
use crate::ui::Component;

#[derive(Debug, Deserialize)]
pub struct UserInputRequest {
    /// Host interface the event was fired in
    pub id: String,
    pub event: UserInputEvent,
}

#[derive(Debug, Serialize)]
pub struct InterfaceUpdate {
    pub id: String,
    pub ui: Component,
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub ui: Component,
}

pub async fn root() -> &'static str {
    "L3MBDA Oracle Server"
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn home_page(State(dispatcher): State<Arc<Dispatcher>>) -> Response {
    match dispatcher.home().await {
        Ok(ui) => Json(HomePage { ui }).into_response(),
        Err(err) => {
            error!(error = %err, "failed to build home page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(RpcResponse::error("could not load state")),
            )
                .into_response()
        }
    }
}

pub async fn user_input(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(request): Json<UserInputRequest>,
) -> Response {
    match dispatcher.handle_input(request.event).await {
        Some(ui) => Json(InterfaceUpdate { id: request.id, ui }).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn rpc(
    State(dispatcher): State<Arc<Dispatcher>>,
    Json(request): Json<RpcRequest>,
) -> Json<RpcResponse> {
    Json(dispatcher.handle_rpc(request).await)
}

pub async fn cron(
    State(poller): State<Arc<NotificationPoller>>,
    Json(request): Json<CronRequest>,
) -> (StatusCode, Json<RpcResponse>) {
    match CronCommand::from(request) {
        CronCommand::Execute => {
            poller.run_cycle().await;
            (StatusCode::OK, Json(RpcResponse::ok()))
        }
        CronCommand::Unknown(method) => {
            warn!(method = %method, "unknown cron method");
            (
                StatusCode::NOT_FOUND,
                Json(RpcResponse::error("Method not found.")),
            )
        }
    }
}
