use crate::error::Error;
use std::time::Duration;

const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct TracingEnv {
    pub log_directory: String,
    pub log_filename: String,
}

impl TracingEnv {
    pub fn parse() -> Self {
        Self {
            log_directory: env_var_or("HOMEWORK_BOT_LOG_DIRECTORY", "."),
            log_filename: env_var_or("HOMEWORK_BOT_LOG_FILENAME", "program.log"),
        }
    }
}

pub struct ApplicationEnv {
    pub practicum_token: String,
    pub practicum_endpoint: String,

    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub telegram_api_url: String,

    pub retry_period: Duration,
    pub request_timeout: Duration,
}

impl ApplicationEnv {
    ///
    /// ### Errors
    /// - [Error::Configuration] when
    ///     - any of the tokens or the chat id is missing or empty
    ///     - optional duration is not a number of seconds
    ///
    pub fn parse() -> Result<Self, Error> {
        let mut missing = Vec::new();
        let practicum_token = Self::required_env_var("PRACTICUM_TOKEN", &mut missing);
        let telegram_token = Self::required_env_var("TELEGRAM_TOKEN", &mut missing);
        let telegram_chat_id = Self::required_env_var("TELEGRAM_CHAT_ID", &mut missing);
        if !missing.is_empty() {
            return Err(Error::Configuration(format!(
                "Отсутствуют токен(ы): {}",
                missing.join(", ")
            )));
        }

        let practicum_endpoint = env_var_or("PRACTICUM_ENDPOINT", DEFAULT_PRACTICUM_ENDPOINT);
        let telegram_api_url = env_var_or("TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL);
        let retry_period =
            Self::env_var_secs("HOMEWORK_BOT_RETRY_PERIOD", DEFAULT_RETRY_PERIOD_SECS)?;
        let request_timeout =
            Self::env_var_secs("HOMEWORK_BOT_REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            practicum_token,
            practicum_endpoint,
            telegram_token,
            telegram_chat_id,
            telegram_api_url,
            retry_period,
            request_timeout,
        })
    }

    fn required_env_var(name: &'static str, missing: &mut Vec<&'static str>) -> String {
        match std::env::var(name) {
            Ok(value) if !value.is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        }
    }

    fn env_var_secs(name: &'static str, default: u64) -> Result<Duration, Error> {
        let secs = match std::env::var(name) {
            Ok(value) => value.parse::<u64>().map_err(|err| {
                Error::Configuration(format!("environment variable {name} invalid: {err}"))
            })?,
            Err(_) => default,
        };

        Ok(Duration::from_secs(secs))
    }
}

fn env_var_or(name: &'static str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
