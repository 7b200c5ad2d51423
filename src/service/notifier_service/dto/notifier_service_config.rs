pub struct NotifierServiceConfig {
    pub chat_id: String,
}
