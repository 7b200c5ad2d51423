use crate::client;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TelegramClient: Send + Sync {
    ///
    /// Send plain text message to the chat.
    ///
    /// ### Errors
    /// - [client::Error::Connection] when request could not be sent
    /// - [client::Error::Status] when Bot API responded with non-success status
    /// - [client::Error::Rejected] when Bot API accepted request but refused to send
    ///
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), client::Error>;
}
