//! Runtime configuration read from the environment

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

use crate::services::DEFAULT_POLL_SCHEDULE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{name} has an invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Base URL of the oracle API, e.g. `https://api.l3mbda.com`
    pub api_host: String,
    pub state_file: PathBuf,
    /// Six-field cron expression (seconds first)
    pub poll_schedule: String,
    pub bind_addr: SocketAddr,
    pub cors_allowed_origins: Vec<String>,
    /// Host endpoint receiving notifications and dialogs, if any
    pub host_notify_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_host = var("API_HOST").ok_or(ConfigError::Missing("API_HOST"))?;

        let host = match var("HOST") {
            Some(value) => value.parse::<IpAddr>().map_err(|_| ConfigError::Invalid {
                name: "HOST",
                value,
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match var("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value,
            })?,
            None => 3001,
        };

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:8080".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            api_host,
            state_file: var("STATE_FILE")
                .unwrap_or_else(|| ".snap_state.json".to_string())
                .into(),
            poll_schedule: var("POLL_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_POLL_SCHEDULE.to_string()),
            bind_addr: SocketAddr::new(host, port),
            cors_allowed_origins,
            host_notify_url: var("HOST_NOTIFY_URL"),
        })
    }
}
