//! Declarative UI trees rendered by the extension host

pub mod components;
pub mod views;

pub use components::Component;
pub use views::FormError;

/// Event names shared between the views and the dispatcher
pub mod names {
    pub const HOME: &str = "home";
    pub const ADD: &str = "add";
    pub const API_KEY: &str = "api-key";
    pub const DELETE_PREFIX: &str = "delete-";
    pub const LOGS_PREFIX: &str = "logs-";
    pub const NEW_ORACLE_FORM: &str = "new-oracle-form";
    pub const API_KEY_FORM: &str = "api-key-form";
    pub const API_KEY_FIELD: &str = "jwt";
}
