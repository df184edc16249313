//! L3MBDA oracle plugin server
//!
//! Serves the plugin interface, RPC and cron entry points to the extension
//! host and runs the notification poller in the background.

use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use l3mbda_server::api::HttpOracleApi;
use l3mbda_server::app_state::AppState;
use l3mbda_server::config::AppConfig;
use l3mbda_server::dispatcher::Dispatcher;
use l3mbda_server::notifier::{HostNotifier, LogNotifier, Notifier};
use l3mbda_server::routes;
use l3mbda_server::services::NotificationPoller;
use l3mbda_server::store::{JsonFileStore, StateHandle};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;

    let state = StateHandle::new(Arc::new(JsonFileStore::new(&config.state_file)));
    let api = Arc::new(HttpOracleApi::new(&config.api_host));
    let notifier: Arc<dyn Notifier> = match &config.host_notify_url {
        Some(url) => Arc::new(HostNotifier::new(url)),
        None => {
            warn!("HOST_NOTIFY_URL not set, alerts are only logged");
            Arc::new(LogNotifier)
        }
    };

    let dispatcher = Arc::new(Dispatcher::new(state, api.clone(), notifier.clone()));
    let poller = Arc::new(NotificationPoller::new(
        dispatcher.registry().clone(),
        dispatcher.credential().clone(),
        api,
        notifier,
    ));

    let _scheduler = poller
        .clone()
        .schedule(&config.poll_schedule)
        .await
        .context("failed to schedule the notification poller")?;

    let app = routes::app_router(AppState::new(dispatcher, poller))
        .layer(build_cors_layer(&config.cors_allowed_origins))
        .layer(TraceLayer::new_for_http());

    info!(addr = %config.bind_addr, api_host = %config.api_host, "server starting");

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(false)
}
