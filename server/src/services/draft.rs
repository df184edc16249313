//! The single in-flight oracle draft and validation of its filter form

use std::collections::HashMap;

use tracing::{debug, info};

use crate::api::CreatedOracle;
use crate::error::{OracleError, ValidationError};
use crate::models::{DraftOracle, EventKind, Filter, FilterKey, Oracle, MIN_FILTERS};
use crate::store::StateHandle;

/// Submitted form fields, with null inputs already dropped
pub type FormValues = HashMap<String, String>;

/// Turns submitted form values into filters.
///
/// `None` or an empty form is [`ValidationError::NoFilters`]; fewer than two
/// non-empty recognized keys is [`ValidationError::TooFewFilters`].
pub fn validate_submission(values: Option<&FormValues>) -> Result<Vec<Filter>, ValidationError> {
    let values = match values {
        Some(values) if !values.is_empty() => values,
        _ => return Err(ValidationError::NoFilters),
    };

    let filters: Vec<Filter> = FilterKey::ALL
        .iter()
        .filter_map(|key| match values.get(key.as_str()) {
            Some(value) if !value.is_empty() => Some(Filter::new(*key, value.clone())),
            _ => None,
        })
        .collect();

    if filters.len() < MIN_FILTERS {
        return Err(ValidationError::TooFewFilters {
            found: filters.len(),
        });
    }
    Ok(filters)
}

/// Lifecycle of the draft: begin, then promote or cancel.
#[derive(Clone)]
pub struct DraftWorkflow {
    state: StateHandle,
}

impl DraftWorkflow {
    pub fn new(state: StateHandle) -> Self {
        Self { state }
    }

    pub async fn current(&self) -> Result<Option<DraftOracle>, OracleError> {
        Ok(self.state.snapshot().await?.oracle)
    }

    /// Starts a draft for `event`. A draft that is already pending is replaced.
    pub async fn begin(&self, event: EventKind) -> Result<DraftOracle, OracleError> {
        let draft = DraftOracle::new(event);
        let replaced = self
            .state
            .update(|state| Ok::<_, OracleError>(state.oracle.replace(draft.clone())))
            .await?;

        if let Some(previous) = replaced {
            debug!(previous = %previous.event, "replaced pending oracle draft");
        }
        Ok(draft)
    }

    /// Registers the draft as an oracle and clears it in the same write.
    pub async fn promote(
        &self,
        created: CreatedOracle,
        filters: Vec<Filter>,
    ) -> Result<Oracle, OracleError> {
        let oracle = self
            .state
            .update(|state| {
                let draft = state.oracle.clone().ok_or(OracleError::NoDraft)?;
                let oracle = state
                    .insert_oracle(&draft, filters, created.id, created.emoji)?
                    .clone();
                state.oracle = None;
                Ok::<_, OracleError>(oracle)
            })
            .await?;

        info!(oracle_id = %oracle.id, name = %oracle.name, "oracle draft promoted");
        Ok(oracle)
    }

    /// Drops the pending draft. Returns whether one existed.
    pub async fn cancel(&self) -> Result<bool, OracleError> {
        let snapshot = self.state.snapshot().await?;
        if snapshot.oracle.is_none() {
            return Ok(false);
        }
        self.state
            .update(|state| Ok::<_, OracleError>(state.oracle.take().is_some()))
            .await
    }
}
