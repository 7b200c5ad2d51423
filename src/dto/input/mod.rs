mod homework_status;
mod homework_statuses;

pub use homework_status::*;
pub use homework_statuses::*;
