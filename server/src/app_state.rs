//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;

use crate::dispatcher::Dispatcher;
use crate::services::NotificationPoller;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
    pub poller: Arc<NotificationPoller>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>, poller: Arc<NotificationPoller>) -> Self {
        Self { dispatcher, poller }
    }
}

impl FromRef<AppState> for Arc<Dispatcher> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.dispatcher.clone()
    }
}

impl FromRef<AppState> for Arc<NotificationPoller> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.poller.clone()
    }
}
