//! Oracle services: registry, draft workflow, credential slot and poller

pub mod credential;
pub mod draft;
pub mod poller;
pub mod registry;

pub use credential::CredentialSlot;
pub use draft::{validate_submission, DraftWorkflow, FormValues};
pub use poller::{NotificationPoller, PollReport, DEFAULT_POLL_SCHEDULE};
pub use registry::OracleRegistry;
