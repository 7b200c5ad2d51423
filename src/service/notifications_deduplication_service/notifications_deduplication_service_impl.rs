use super::NotificationsDeduplicationService;
use std::collections::HashMap;

///
/// Entries are never evicted. The bot tracks a single student,
/// so the map grows by one entry per homework at most.
///
#[derive(Default)]
pub struct NotificationsDeduplicationServiceImpl {
    last_messages: HashMap<String, String>,
}

impl NotificationsDeduplicationServiceImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NotificationsDeduplicationService for NotificationsDeduplicationServiceImpl {
    fn was_already_sent(&self, id: &str, message: &str) -> bool {
        self.last_messages
            .get(id)
            .is_some_and(|last_message| last_message == message)
    }

    fn record(&mut self, id: &str, message: &str) {
        tracing::trace!(id, "recording delivered message");

        self.last_messages
            .insert(id.to_string(), message.to_string());
    }
}
