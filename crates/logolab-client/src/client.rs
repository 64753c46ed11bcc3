use crate::error::ClientError;
use crate::retry::retry_with_backoff;
use crate::types::ClientConfig;
use logolab_types::{DesignRequest, DesignResult, ErrorBody, ImageRequest, ImageResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// HTTP client for the two gateway endpoints.
pub struct GatewayClient {
    client: Client,
    config: ClientConfig,
}

impl GatewayClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Analysis call with the configured backoff.
    pub async fn generate_analysis(&self, request: &DesignRequest) -> Result<DesignResult, ClientError> {
        retry_with_backoff(&self.config.retry, || self.generate_analysis_once(request)).await
    }

    /// Single analysis attempt.
    pub async fn generate_analysis_once(&self, request: &DesignRequest) -> Result<DesignResult, ClientError> {
        self.post_json("/generate-analysis", request).await
    }

    /// Single image attempt; the gateway already falls back internally.
    pub async fn generate_image(&self, request: &ImageRequest) -> Result<ImageResponse, ClientError> {
        self.post_json("/generate-image", request).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .client
            .post(format!("{}{}", self.config.base_url.trim_end_matches('/'), path))
            .json(body)
            .send()
            .await?;

        let status = resp.status();

        if !status.is_success() {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok());
            let error_body: Option<ErrorBody> = resp.json().await.ok();
            return Err(ClientError::from_status(status.as_u16(), error_body.as_ref(), retry_after));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
