//! Registry of created oracles

use tracing::{debug, info};

use crate::error::OracleError;
use crate::models::{DraftOracle, Filter, Notification, Oracle};
use crate::store::StateHandle;

#[derive(Clone)]
pub struct OracleRegistry {
    state: StateHandle,
}

impl OracleRegistry {
    pub fn new(state: StateHandle) -> Self {
        Self { state }
    }

    /// Oracles in insertion order
    pub async fn list(&self) -> Result<Vec<Oracle>, OracleError> {
        Ok(self.state.snapshot().await?.oracles)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Oracle>, OracleError> {
        Ok(self.state.snapshot().await?.find_oracle(id).cloned())
    }

    pub async fn create(
        &self,
        draft: &DraftOracle,
        filters: Vec<Filter>,
        id: String,
        emoji: String,
    ) -> Result<Oracle, OracleError> {
        let oracle = self
            .state
            .update(|state| {
                state
                    .insert_oracle(draft, filters, id, emoji)
                    .map(Oracle::clone)
            })
            .await?;

        info!(oracle_id = %oracle.id, event = %oracle.event, "oracle registered");
        Ok(oracle)
    }

    /// Removes the oracle if present. Deleting an unknown id is not an error.
    pub async fn delete(&self, id: &str) -> Result<(), OracleError> {
        let removed = self
            .state
            .update(|state| Ok::<_, OracleError>(state.remove_oracle(id)))
            .await?;

        debug!(oracle_id = id, removed, "oracle delete applied");
        Ok(())
    }

    /// Overwrites the notification history. Unknown ids are ignored, since the
    /// oracle may have been deleted while its logs were being fetched.
    pub async fn replace_notifications(
        &self,
        id: &str,
        notifications: Vec<Notification>,
    ) -> Result<bool, OracleError> {
        self.state
            .update(|state| Ok::<_, OracleError>(state.replace_notifications(id, notifications)))
            .await
    }
}
