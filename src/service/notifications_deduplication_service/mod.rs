mod notifications_deduplication_service;
mod notifications_deduplication_service_impl;

pub use notifications_deduplication_service::*;
pub use notifications_deduplication_service_impl::*;
