//! Sinks for user-facing alerts and dialogs

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::ui::Component;

mod host;

pub use host::HostNotifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationChannel {
    #[serde(rename = "inApp")]
    InApp,
    #[serde(rename = "native")]
    Native,
}

/// Fire-and-forget delivery of alerts to the user
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, channel: NotificationChannel, message: &str);

    /// Shows a one-shot alert dialog
    async fn dialog(&self, content: Component);
}

/// Writes alerts to the log only.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, channel: NotificationChannel, message: &str) {
        info!(?channel, message, "notification");
    }

    async fn dialog(&self, content: Component) {
        info!(texts = ?content.texts(), "dialog");
    }
}
