mod homework_api_client_config;

pub use homework_api_client_config::*;
