mod dto;
mod notifier_service;
mod notifier_service_impl;

pub use dto::NotifierServiceConfig;
pub use notifier_service::*;
pub use notifier_service_impl::*;
