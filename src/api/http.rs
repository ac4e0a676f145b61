//! HTTP resource source.

use async_trait::async_trait;
use std::time::Duration;

use super::{parse_resources, ApiError, FetchOutcome, ResourceSource};
use crate::config::ApiConfig;

/// Fetches the resource list with a single `GET` request.
pub struct HttpResourceSource {
    client: reqwest::Client,
    url: String,
}

impl HttpResourceSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, url: url.into() })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(config.resources_url(), Duration::from_secs(config.timeout_secs))
    }
}

#[async_trait]
impl ResourceSource for HttpResourceSource {
    fn describe(&self) -> String {
        format!("GET {}", self.url)
    }

    async fn fetch_resources(&self) -> Result<FetchOutcome, ApiError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

        parse_resources(&body)
    }
}
