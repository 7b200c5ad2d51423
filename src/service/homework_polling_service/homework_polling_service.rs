use super::HomeworkPollingServiceConfig;
use crate::{
    client::HomeworkApiClient,
    dto::{input::HomeworkStatuses, output::StatusChange},
    error::Error,
    service::{
        notifications_deduplication_service::NotificationsDeduplicationService,
        notifier_service::NotifierService,
    },
};
use std::sync::Arc;

const ERROR_MESSAGE_PREFIX: &str = "Сбой в работе программы";

///
/// Polls review API for the most recent homework and reports its status changes.
///
/// Owns all state mutated between cycles. Cycles never overlap,
/// so none of it is shared.
///
pub struct HomeworkPollingService {
    config: HomeworkPollingServiceConfig,
    homework_api_client: Arc<dyn HomeworkApiClient>,
    notifier_service: Arc<dyn NotifierService>,
    deduplication_service: Box<dyn NotificationsDeduplicationService>,

    cursor: i64,
    last_error_message: Option<String>,
}

impl HomeworkPollingService {
    pub fn new(
        config: HomeworkPollingServiceConfig,
        homework_api_client: Arc<dyn HomeworkApiClient>,
        notifier_service: Arc<dyn NotifierService>,
        deduplication_service: Box<dyn NotificationsDeduplicationService>,
    ) -> Self {
        let cursor = config.from_date;

        Self {
            config,
            homework_api_client,
            notifier_service,
            deduplication_service,
            cursor,
            last_error_message: None,
        }
    }

    ///
    /// Run cycles forever, sleeping `retry_period` after each one
    /// no matter how it ended.
    ///
    #[tracing::instrument(name = "Homework Polling", skip_all)]
    pub async fn run(mut self) {
        tracing::info!(
            retry_period = ?self.config.retry_period,
            cursor = self.cursor,
            "polling started"
        );

        loop {
            self.run_cycle().await;
            tokio::time::sleep(self.config.retry_period).await;
        }
    }

    async fn run_cycle(&mut self) {
        let Err(err) = self.try_run_cycle().await else {
            return;
        };

        let message = format!("{ERROR_MESSAGE_PREFIX}: {err}");
        tracing::error!("{message}");

        if self.last_error_message.as_deref() == Some(message.as_str()) {
            tracing::debug!("error already reported");
            return;
        }

        if self.notifier_service.notify(&message).await {
            self.last_error_message = Some(message);
        }
    }

    ///
    /// ### Errors
    /// - [Error::ApiConnection], [Error::ApiStatus], [Error::ApiBody] when fetch failed
    /// - [Error::Shape] when response body is malformed
    /// - [Error::FieldMissing], [Error::UnknownStatus] when the latest homework is malformed
    ///
    async fn try_run_cycle(&mut self) -> Result<(), Error> {
        tracing::debug!(cursor = self.cursor, "fetching homework statuses");

        let response = self
            .homework_api_client
            .fetch_homework_statuses(self.cursor)
            .await?;
        let statuses = HomeworkStatuses::try_from(response)?;

        let Some(homework) = statuses.homeworks.first() else {
            tracing::debug!("no new statuses");
            self.advance_cursor(statuses.current_date);
            return Ok(());
        };

        let status_change = StatusChange::try_from(homework)?;
        let StatusChange { id, message } = &status_change;

        if self.deduplication_service.was_already_sent(id, message) {
            tracing::debug!(%id, "status already reported");
            self.advance_cursor(statuses.current_date);
            return Ok(());
        }

        if self.notifier_service.notify(message).await {
            self.advance_cursor(statuses.current_date);
            self.deduplication_service.record(id, message);
        }

        Ok(())
    }

    fn advance_cursor(&mut self, current_date: Option<i64>) {
        if let Some(current_date) = current_date {
            tracing::trace!(from = self.cursor, to = current_date, "advancing cursor");
            self.cursor = current_date;
        }
    }
}
