//! Data models for the oracle plugin state

pub mod oracle;
pub mod state;

pub use oracle::{
    Credential, DraftOracle, EventKind, Filter, FilterKey, Notification, Oracle,
    DEFAULT_ORACLE_NAME,
};
pub use state::{State, MIN_FILTERS};
