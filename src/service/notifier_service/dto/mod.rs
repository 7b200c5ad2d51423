mod notifier_service_config;

pub use notifier_service_config::*;
