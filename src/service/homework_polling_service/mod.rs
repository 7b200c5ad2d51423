mod dto;
mod homework_polling_service;

pub use dto::HomeworkPollingServiceConfig;
pub use homework_polling_service::*;
