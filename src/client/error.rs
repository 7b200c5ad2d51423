#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Body(String),

    #[error("request rejected: {0}")]
    Rejected(String),
}

