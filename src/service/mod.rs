pub mod homework_polling_service;
pub mod notifications_deduplication_service;
pub mod notifier_service;
