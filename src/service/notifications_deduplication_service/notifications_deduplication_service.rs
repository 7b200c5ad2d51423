#[cfg_attr(test, mockall::automock)]
pub trait NotificationsDeduplicationService: Send {
    ///
    /// Check whether exactly this message has already been delivered for the homework.
    ///
    fn was_already_sent(&self, id: &str, message: &str) -> bool;

    ///
    /// Remember message as the last one delivered for the homework.
    /// Should be called only after delivery succeeded.
    ///
    fn record(&mut self, id: &str, message: &str);
}
