use std::time::Duration;

pub struct HomeworkPollingServiceConfig {
    pub retry_period: Duration,
    /// Unix seconds used as `from_date` of the first fetch
    pub from_date: i64,
}
