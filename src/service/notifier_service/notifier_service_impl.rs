use super::{NotifierService, NotifierServiceConfig};
use crate::client::TelegramClient;
use async_trait::async_trait;
use std::sync::Arc;

pub struct NotifierServiceImpl {
    config: NotifierServiceConfig,
    telegram_client: Arc<dyn TelegramClient>,
}

impl NotifierServiceImpl {
    pub fn new(config: NotifierServiceConfig, telegram_client: Arc<dyn TelegramClient>) -> Self {
        Self {
            config,
            telegram_client,
        }
    }
}

#[async_trait]
impl NotifierService for NotifierServiceImpl {
    #[tracing::instrument(name = "Notifier", skip_all)]
    async fn notify(&self, text: &str) -> bool {
        match self
            .telegram_client
            .send_message(&self.config.chat_id, text)
            .await
        {
            Ok(()) => {
                tracing::debug!(text, "message sent");
                true
            }
            Err(err) => {
                tracing::error!(%err, "message not sent");
                false
            }
        }
    }
}
