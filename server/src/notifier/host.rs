use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::warn;

use super::{NotificationChannel, Notifier};
use crate::ui::Component;

/// Forwards alerts to the extension host's callback endpoint.
#[derive(Clone)]
pub struct HostNotifier {
    url: String,
    http: Client,
}

impl HostNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: Client::new(),
        }
    }

    async fn post(&self, body: serde_json::Value) {
        let result = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .and_then(|response| response.error_for_status());

        if let Err(err) = result {
            warn!(error = %err, url = %self.url, "host notification failed");
        }
    }
}

#[async_trait]
impl Notifier for HostNotifier {
    async fn notify(&self, channel: NotificationChannel, message: &str) {
        self.post(json!({ "type": channel, "message": message })).await;
    }

    async fn dialog(&self, content: Component) {
        self.post(json!({ "type": "alert", "content": content })).await;
    }
}
