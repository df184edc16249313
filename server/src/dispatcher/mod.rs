//! Routes host events and RPC calls to the oracle services

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::api::{ApiError, CreateOracleRequest, OracleApi};
use crate::error::OracleError;
use crate::models::DraftOracle;
use crate::notifier::Notifier;
use crate::services::{
    validate_submission, CredentialSlot, DraftWorkflow, FormValues, OracleRegistry,
};
use crate::store::StateHandle;
use crate::ui::{views, Component, FormError};

mod command;

pub use command::{
    Command, CronCommand, CronRequest, RpcCommand, RpcRequest, RpcResponse, UserInputEvent,
};

pub const CREATE_FAILED_MESSAGE: &str = "Could not create oracle.";
pub const MISSING_CREDENTIAL_MESSAGE: &str = "Connect your account before creating an oracle.";

pub struct Dispatcher {
    state: StateHandle,
    registry: OracleRegistry,
    drafts: DraftWorkflow,
    credential: CredentialSlot,
    api: Arc<dyn OracleApi>,
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(state: StateHandle, api: Arc<dyn OracleApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            registry: OracleRegistry::new(state.clone()),
            drafts: DraftWorkflow::new(state.clone()),
            credential: CredentialSlot::new(state.clone()),
            state,
            api,
            notifier,
        }
    }

    pub fn registry(&self) -> &OracleRegistry {
        &self.registry
    }

    pub fn credential(&self) -> &CredentialSlot {
        &self.credential
    }

    pub async fn home(&self) -> Result<Component, OracleError> {
        Ok(views::home(&self.state.snapshot().await?))
    }

    /// Handles a UI event. `None` leaves the current view as it is.
    pub async fn handle_input(&self, event: UserInputEvent) -> Option<Component> {
        let command = Command::from(event);
        debug!(?command, "dispatching user input");

        match self.execute(command).await {
            Ok(view) => view,
            Err(err) => {
                error!(error = %err, "user input handler failed");
                None
            }
        }
    }

    pub async fn handle_rpc(&self, request: RpcRequest) -> RpcResponse {
        match RpcCommand::from(request) {
            RpcCommand::Connect { key } => {
                match self.credential.set(key.as_deref().unwrap_or_default()).await {
                    Ok(true) => {
                        self.notifier.dialog(views::connected_dialog()).await;
                        RpcResponse::ok()
                    }
                    Ok(false) => RpcResponse::error("empty jwt"),
                    Err(err) => {
                        error!(error = %err, "failed to store credential");
                        RpcResponse::error("could not store credential")
                    }
                }
            }
            RpcCommand::Unknown(method) => {
                debug!(method = %method, "ignoring unknown rpc method");
                RpcResponse::ok()
            }
        }
    }

    async fn execute(&self, command: Command) -> Result<Option<Component>, OracleError> {
        match command {
            Command::BeginDraft(event) => {
                let draft = self.drafts.begin(event).await?;
                Ok(Some(views::filter_form(&draft, None)))
            }
            Command::ShowHome => {
                self.drafts.cancel().await?;
                self.home().await.map(Some)
            }
            Command::ShowEventPicker => {
                self.drafts.cancel().await?;
                Ok(Some(views::event_picker()))
            }
            Command::ShowApiKeyForm => {
                let jwt = self.credential.get().await?;
                Ok(Some(views::api_key_form(jwt.as_ref())))
            }
            Command::DeleteOracle(id) => self.delete_oracle(&id).await.map(Some),
            Command::ShowLogs(id) => Ok(self
                .registry
                .get(&id)
                .await?
                .map(|oracle| views::notifications(&oracle))),
            Command::SubmitOracle(values) => self.submit_oracle(values.as_ref()).await.map(Some),
            Command::SubmitApiKey(token) => {
                self.credential
                    .set(token.as_deref().unwrap_or_default())
                    .await?;
                let jwt = self.credential.get().await?;
                Ok(Some(views::api_key_form(jwt.as_ref())))
            }
            Command::Ignore => Ok(None),
        }
    }

    /// Deletes remotely, then locally whatever the remote outcome was.
    async fn delete_oracle(&self, id: &str) -> Result<Component, OracleError> {
        let Some(token) = self.credential.get().await? else {
            warn!(oracle_id = id, "delete requested without a credential");
            return self.home().await;
        };

        if let Err(err) = self.api.delete_oracle(&token, id).await {
            warn!(oracle_id = id, error = %err, "remote delete failed, removing locally");
        }
        self.registry.delete(id).await?;

        self.home().await
    }

    async fn submit_oracle(&self, values: Option<&FormValues>) -> Result<Component, OracleError> {
        let snapshot = self.state.snapshot().await?;
        let Some(draft) = snapshot.oracle.clone() else {
            warn!("oracle form submitted without a pending draft");
            return Ok(views::home(&snapshot));
        };

        let filters = match validate_submission(values) {
            Ok(filters) => filters,
            Err(err) => {
                debug!(error = %err, "rejected oracle form");
                return Ok(form_error(&draft, err.title(), err.to_string()));
            }
        };

        let Some(token) = snapshot.jwt else {
            warn!("oracle form submitted without a credential");
            return Ok(form_error(&draft, "Error", MISSING_CREDENTIAL_MESSAGE));
        };

        let request = CreateOracleRequest::new(draft.name.clone(), draft.event, filters.clone());
        let created = match self.api.create_oracle(&token, &request).await {
            Ok(created) => created,
            Err(ApiError::Server(message)) => return Ok(form_error(&draft, "Error", message)),
            Err(err) => {
                warn!(error = %err, "oracle creation request failed");
                return Ok(form_error(&draft, "Error", CREATE_FAILED_MESSAGE));
            }
        };

        let created_id = created.id.clone();
        match self.drafts.promote(created, filters).await {
            Ok(_) => self.home().await,
            Err(OracleError::NoDraft) => {
                warn!(oracle_id = %created_id, "draft cancelled during creation, deleting remote oracle");
                if let Err(err) = self.api.delete_oracle(&token, &created_id).await {
                    warn!(oracle_id = %created_id, error = %err, "failed to delete orphaned oracle");
                }
                self.home().await
            }
            Err(err @ OracleError::DuplicateOracle(_)) => {
                error!(error = %err, "oracle API returned an id that is already registered");
                Ok(form_error(&draft, "Error", CREATE_FAILED_MESSAGE))
            }
            Err(err) => Err(err),
        }
    }
}

fn form_error(draft: &DraftOracle, title: &str, message: impl Into<String>) -> Component {
    views::filter_form(draft, Some(&FormError::new(title, message)))
}
