//! Error types shared by the oracle services

use thiserror::Error;

use crate::api::ApiError;

/// Problems with user input, rendered back into the originating form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("No filters provided.")]
    NoFilters,
    #[error("You must provide at least 2 filters.")]
    TooFewFilters { found: usize },
}

impl ValidationError {
    /// Title shown above the message in the form's error panel
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::NoFilters => "No Filters!",
            ValidationError::TooFewFilters { .. } => "Error",
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("state document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum OracleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no credential is stored")]
    MissingCredential,
    #[error("no oracle draft is pending")]
    NoDraft,
    #[error("oracle {0} already exists")]
    DuplicateOracle(String),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
