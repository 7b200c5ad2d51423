mod dto;
mod homework_api_client;
mod homework_api_client_impl;

pub use dto::HomeworkApiClientConfig;
pub use homework_api_client::*;
pub use homework_api_client_impl::*;
