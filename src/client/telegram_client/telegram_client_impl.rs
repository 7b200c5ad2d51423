use super::{
    dto::{SendMessageRequest, SendMessageResponse},
    TelegramClient, TelegramClientConfig,
};
use crate::client;
use async_trait::async_trait;
use reqwest::Client;

pub struct TelegramClientImpl {
    client: Client,
    send_message_url: String,
}

impl TelegramClientImpl {
    pub fn new(config: TelegramClientConfig, client: Client) -> Self {
        let api_url = config.api_url.trim_end_matches('/');
        let send_message_url = format!("{api_url}/bot{}/sendMessage", config.token);

        Self {
            client,
            send_message_url,
        }
    }
}

#[async_trait]
impl TelegramClient for TelegramClientImpl {
    #[tracing::instrument(name = "Telegram", skip(self, text))]
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), client::Error> {
        let response = self
            .client
            .post(&self.send_message_url)
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            // without url, it contains the bot token
            .map_err(|err| client::Error::Connection(err.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(client::Error::Status(status.as_u16()));
        }

        let body = response
            .json::<SendMessageResponse>()
            .await
            .map_err(|err| client::Error::Body(err.without_url().to_string()))?;
        if !body.ok {
            let description = body
                .description
                .unwrap_or_else(|| "no description".to_string());
            return Err(client::Error::Rejected(description));
        }

        Ok(())
    }
}
