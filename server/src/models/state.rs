use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{OracleError, ValidationError};
use crate::models::oracle::{Credential, DraftOracle, Filter, Notification, Oracle};

/// Minimum number of filters an oracle is created with
pub const MIN_FILTERS: usize = 2;

/// The single persisted document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub oracles: Vec<Oracle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oracle: Option<DraftOracle>,
    #[serde(
        default,
        deserialize_with = "stored_credential",
        skip_serializing_if = "Option::is_none"
    )]
    pub jwt: Option<Credential>,
}

// A stored empty or placeholder token counts as no credential.
fn stored_credential<'de, D>(deserializer: D) -> Result<Option<Credential>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.as_deref().and_then(Credential::parse))
}

impl State {
    pub fn find_oracle(&self, id: &str) -> Option<&Oracle> {
        self.oracles.iter().find(|oracle| oracle.id == id)
    }

    /// Appends a new oracle built from `draft`. Existing oracles are untouched.
    pub fn insert_oracle(
        &mut self,
        draft: &DraftOracle,
        filters: Vec<Filter>,
        id: String,
        emoji: String,
    ) -> Result<&Oracle, OracleError> {
        if filters.len() < MIN_FILTERS {
            return Err(ValidationError::TooFewFilters {
                found: filters.len(),
            }
            .into());
        }
        if self.find_oracle(&id).is_some() {
            return Err(OracleError::DuplicateOracle(id));
        }

        self.oracles.push(Oracle {
            id,
            name: draft.name.clone(),
            event: draft.event,
            filters,
            emoji,
            notifications: Vec::new(),
        });

        Ok(&self.oracles[self.oracles.len() - 1])
    }

    /// Returns whether an oracle was removed
    pub fn remove_oracle(&mut self, id: &str) -> bool {
        let before = self.oracles.len();
        self.oracles.retain(|oracle| oracle.id != id);
        self.oracles.len() != before
    }

    /// Overwrites the history of `id`. Returns false if the oracle is gone.
    pub fn replace_notifications(&mut self, id: &str, notifications: Vec<Notification>) -> bool {
        match self.oracles.iter_mut().find(|oracle| oracle.id == id) {
            Some(oracle) => {
                oracle.notifications = notifications;
                true
            }
            None => false,
        }
    }
}
