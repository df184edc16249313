//! Route definitions for the plugin API

use axum::{
    routing::{get, post},
    Router,
};

use crate::app_state::AppState;
use crate::handlers::*;

pub fn status_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

// Interface, RPC and cron entry points
pub fn snap_routes() -> Router<AppState> {
    Router::new()
        .route("/api/home", get(home_page))
        .route("/api/input", post(user_input))
        .route("/api/rpc", post(rpc))
        .route("/api/cron", post(cron))
}

pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(status_routes())
        .merge(snap_routes())
        .with_state(state)
}
