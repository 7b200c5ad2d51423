use crate::client;

///
/// Every variant except [Error::Configuration] is recoverable:
/// the polling loop reports it and retries on the next cycle.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Configuration(String),

    #[error("Ошибка соединения с API: {0}")]
    ApiConnection(String),

    #[error("Эндпоинт недоступен. Код ответа: {0}")]
    ApiStatus(u16),

    #[error("Ответ API не является JSON: {0}")]
    ApiBody(String),

    #[error("{0}")]
    Shape(&'static str),

    #[error("{0}")]
    FieldMissing(&'static str),

    #[error("Ошибка статуса: {0}")]
    UnknownStatus(String),
}

impl From<client::Error> for Error {
    fn from(err: client::Error) -> Self {
        match err {
            client::Error::Connection(detail) => Error::ApiConnection(detail),
            client::Error::Status(code) => Error::ApiStatus(code),
            client::Error::Body(detail) => Error::ApiBody(detail),
            client::Error::Rejected(detail) => Error::ApiConnection(detail),
        }
    }
}
