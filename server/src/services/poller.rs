//! Timer-driven check of every oracle for newly matched logs

use std::sync::Arc;

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};
use tracing::{debug, error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::api::OracleApi;
use crate::error::OracleError;
use crate::models::Notification;
use crate::notifier::{NotificationChannel, Notifier};
use crate::services::{CredentialSlot, OracleRegistry};

/// Once a minute, on the minute.
pub const DEFAULT_POLL_SCHEDULE: &str = "0 * * * * *";

/// Outcome of one poll cycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Oracles whose logs were requested
    pub checked: usize,
    /// Oracles that received new notifications
    pub triggered: Vec<String>,
    /// Oracles whose check failed, with the reason
    pub failed: Vec<(String, String)>,
}

pub struct NotificationPoller {
    registry: OracleRegistry,
    credential: CredentialSlot,
    api: Arc<dyn OracleApi>,
    notifier: Arc<dyn Notifier>,
}

impl NotificationPoller {
    pub fn new(
        registry: OracleRegistry,
        credential: CredentialSlot,
        api: Arc<dyn OracleApi>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            registry,
            credential,
            api,
            notifier,
        }
    }

    /// Runs one cycle. Without a credential nothing is requested.
    pub async fn poll_once(&self) -> Result<PollReport, OracleError> {
        let mut report = PollReport::default();

        let Some(token) = self.credential.get().await? else {
            debug!("no credential stored, skipping poll cycle");
            return Ok(report);
        };

        for oracle in self.registry.list().await? {
            report.checked += 1;

            let logs = match self.api.fetch_logs(&token, &oracle.id).await {
                Ok(logs) => logs,
                Err(err) => {
                    warn!(oracle_id = %oracle.id, error = %err, "failed to fetch oracle logs");
                    report.failed.push((oracle.id.clone(), err.to_string()));
                    continue;
                }
            };

            if logs.is_empty() {
                continue;
            }

            let notifications: Vec<Notification> = logs
                .into_iter()
                .map(|log| log.into_notification(oracle.event))
                .collect();
            let count = notifications.len();

            match self
                .registry
                .replace_notifications(&oracle.id, notifications)
                .await
            {
                Ok(true) => {}
                Ok(false) => {
                    debug!(oracle_id = %oracle.id, "oracle deleted during poll, dropping logs");
                    continue;
                }
                Err(err) => {
                    error!(oracle_id = %oracle.id, error = %err, "failed to store notifications");
                    report.failed.push((oracle.id.clone(), err.to_string()));
                    continue;
                }
            }

            let message = format!("{} just triggered!", oracle.name);
            self.notifier
                .notify(NotificationChannel::InApp, &message)
                .await;
            self.notifier
                .notify(NotificationChannel::Native, &message)
                .await;

            info!(oracle_id = %oracle.id, notifications = count, "oracle triggered");
            report.triggered.push(oracle.id);
        }

        Ok(report)
    }

    /// Runs one cycle inside its own span and logs the outcome.
    pub async fn run_cycle(&self) {
        let cycle = Uuid::new_v4();
        let span = info_span!("poll_cycle", %cycle);

        async {
            match self.poll_once().await {
                Ok(report) => info!(
                    checked = report.checked,
                    triggered = report.triggered.len(),
                    failed = report.failed.len(),
                    "poll cycle complete"
                ),
                Err(err) => error!(error = %err, "poll cycle failed"),
            }
        }
        .instrument(span)
        .await
    }

    /// Registers [`NotificationPoller::run_cycle`] on a cron schedule and starts it.
    pub async fn schedule(
        self: Arc<Self>,
        schedule: &str,
    ) -> Result<JobScheduler, JobSchedulerError> {
        let scheduler = JobScheduler::new().await?;

        let job = Job::new_async(schedule, move |_job_id, _scheduler| {
            let poller = Arc::clone(&self);
            Box::pin(async move { poller.run_cycle().await })
        })?;
        scheduler.add(job).await?;
        scheduler.start().await?;

        info!(schedule, "notification poller scheduled");
        Ok(scheduler)
    }
}
