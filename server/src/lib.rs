//! L3MBDA oracle plugin server
//!
//! Lets a wallet user define blockchain-event oracles, keeps the oracle list
//! and the pending draft in persisted state, and polls the L3MBDA API for
//! matched logs to raise alerts.

pub mod api;
pub mod app_state;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notifier;
pub mod routes;
pub mod services;
pub mod store;
pub mod ui;

#[cfg(test)]
mod testing;
