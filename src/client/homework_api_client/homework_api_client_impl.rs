use super::{HomeworkApiClient, HomeworkApiClientConfig};
use crate::client;
use async_trait::async_trait;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;

pub struct HomeworkApiClientImpl {
    config: HomeworkApiClientConfig,
    client: Client,
}

impl HomeworkApiClientImpl {
    pub fn new(config: HomeworkApiClientConfig, client: Client) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl HomeworkApiClient for HomeworkApiClientImpl {
    #[tracing::instrument(name = "Homework API", skip(self))]
    async fn fetch_homework_statuses(&self, from_date: i64) -> Result<Value, client::Error> {
        tracing::debug!(endpoint = %self.config.endpoint, "fetching homework statuses");

        let response = self
            .client
            .get(&self.config.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.config.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|err| client::Error::Connection(err.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(client::Error::Status(status.as_u16()));
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|err| client::Error::Body(err.to_string()))?;
        tracing::trace!(%body);

        Ok(body)
    }
}
