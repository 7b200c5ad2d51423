mod dto;
mod telegram_client;
mod telegram_client_impl;

pub use dto::TelegramClientConfig;
pub use telegram_client::*;
pub use telegram_client_impl::*;
