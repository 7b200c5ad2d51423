use super::ApplicationEnv;
use crate::{
    client::{
        HomeworkApiClientConfig, HomeworkApiClientImpl, TelegramClientConfig, TelegramClientImpl,
    },
    service::{
        homework_polling_service::{HomeworkPollingService, HomeworkPollingServiceConfig},
        notifications_deduplication_service::NotificationsDeduplicationServiceImpl,
        notifier_service::{NotifierServiceConfig, NotifierServiceImpl},
    },
};
use std::sync::Arc;
use time::OffsetDateTime;

pub fn create_polling_service(env: &ApplicationEnv) -> anyhow::Result<HomeworkPollingService> {
    tracing::info!("creating http client");
    let http_client = reqwest::Client::builder()
        .timeout(env.request_timeout)
        .build()?;

    tracing::info!("creating clients");
    let config = HomeworkApiClientConfig {
        endpoint: env.practicum_endpoint.clone(),
        token: env.practicum_token.clone(),
    };
    let homework_api_client = HomeworkApiClientImpl::new(config, http_client.clone());
    let homework_api_client = Arc::new(homework_api_client);

    let config = TelegramClientConfig {
        api_url: env.telegram_api_url.clone(),
        token: env.telegram_token.clone(),
    };
    let telegram_client = TelegramClientImpl::new(config, http_client);
    let telegram_client = Arc::new(telegram_client);

    tracing::info!("creating services");
    let config = NotifierServiceConfig {
        chat_id: env.telegram_chat_id.clone(),
    };
    let notifier_service = NotifierServiceImpl::new(config, telegram_client);
    let notifier_service = Arc::new(notifier_service);

    let deduplication_service = NotificationsDeduplicationServiceImpl::new();
    let deduplication_service = Box::new(deduplication_service);

    let config = HomeworkPollingServiceConfig {
        retry_period: env.retry_period,
        from_date: OffsetDateTime::now_utc().unix_timestamp(),
    };
    let polling_service = HomeworkPollingService::new(
        config,
        homework_api_client,
        notifier_service,
        deduplication_service,
    );

    Ok(polling_service)
}
