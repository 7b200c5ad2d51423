mod error;
mod homework_api_client;
mod telegram_client;

pub use error::*;
pub use homework_api_client::*;
pub use telegram_client::*;
