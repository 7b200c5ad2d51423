mod homework_polling_service_config;

pub use homework_polling_service_config::*;
