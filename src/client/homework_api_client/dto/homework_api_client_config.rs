pub struct HomeworkApiClientConfig {
    pub endpoint: String,
    pub token: String,
}
