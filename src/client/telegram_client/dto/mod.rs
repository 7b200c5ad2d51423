mod send_message;
mod telegram_client_config;

pub use send_message::*;
pub use telegram_client_config::*;
