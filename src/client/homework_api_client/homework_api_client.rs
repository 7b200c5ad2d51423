use crate::client;
use async_trait::async_trait;
use serde_json::Value;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HomeworkApiClient: Send + Sync {
    ///
    /// Fetch statuses of homeworks updated since `from_date` (unix seconds).
    ///
    /// ### Returns
    /// Decoded JSON body, not validated
    ///
    /// ### Errors
    /// - [client::Error::Connection] when request could not be sent
    /// - [client::Error::Status] when server responded with status other than 200
    /// - [client::Error::Body] when body is not JSON
    ///
    async fn fetch_homework_statuses(&self, from_date: i64) -> Result<Value, client::Error>;
}
