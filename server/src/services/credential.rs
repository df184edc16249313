//! Slot holding the bearer token for the oracle API

use tracing::{info, warn};

use crate::error::OracleError;
use crate::models::Credential;
use crate::store::StateHandle;

#[derive(Clone)]
pub struct CredentialSlot {
    state: StateHandle,
}

impl CredentialSlot {
    pub fn new(state: StateHandle) -> Self {
        Self { state }
    }

    pub async fn get(&self) -> Result<Option<Credential>, OracleError> {
        Ok(self.state.snapshot().await?.jwt)
    }

    /// Like [`CredentialSlot::get`], but a missing token is an error.
    pub async fn require(&self) -> Result<Credential, OracleError> {
        self.get().await?.ok_or(OracleError::MissingCredential)
    }

    /// Stores `token`, returning false without writing when it is empty or the
    /// `undefined` placeholder.
    pub async fn set(&self, token: &str) -> Result<bool, OracleError> {
        let Some(credential) = Credential::parse(token) else {
            warn!("ignoring empty credential");
            return Ok(false);
        };

        self.state
            .update(|state| {
                state.jwt = Some(credential);
                Ok::<_, OracleError>(())
            })
            .await?;

        info!("credential stored");
        Ok(true)
    }
}
