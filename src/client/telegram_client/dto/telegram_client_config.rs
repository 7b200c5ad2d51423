pub struct TelegramClientConfig {
    pub api_url: String,
    pub token: String,
}
