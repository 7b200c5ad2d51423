use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotifierService: Send + Sync {
    ///
    /// Deliver text to the configured chat.
    ///
    /// ### Returns
    /// true when message was delivered. Delivery failures are logged, never returned.
    ///
    async fn notify(&self, text: &str) -> bool;
}
