use async_trait::async_trait;
use logolab_types::protocol::gemini::{
    GeminiContent, GeminiPart, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use logolab_types::{DesignRequest, DesignResult, GatewayConfig};
use reqwest::Client;
use tracing::{debug, warn};

use super::{models_endpoint, TextProvider, API_KEY_HEADER};
use crate::error::{ProviderError, ProviderResult};
use crate::prompt::analysis_prompt;
use crate::response::parse_design_result;

const PROVIDER: &str = "Gemini";

/// Text analysis through the generative-language `generateContent` API.
pub struct GeminiTextProvider {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiTextProvider {
    pub fn new(
        http_client: Client,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Build from gateway config; fails when no credential is configured.
    pub fn from_config(http_client: Client, config: &GatewayConfig) -> ProviderResult<Self> {
        let api_key = config.credential().ok_or(ProviderError::MissingCredential)?;
        Ok(Self::new(http_client, &config.gemini_base_url, &config.text_model, api_key))
    }

    fn build_request(request: &DesignRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![GeminiContent {
                role: None,
                parts: vec![GeminiPart::text(analysis_prompt(request))],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                temperature: Some(0.8),
                top_k: Some(40),
                top_p: Some(0.95),
            }),
        }
    }
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    async fn generate_design(&self, request: &DesignRequest) -> ProviderResult<DesignResult> {
        let url = models_endpoint(&self.base_url, &self.model, "generateContent");

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&Self::build_request(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API error: {}", status);
            debug!("Gemini error body: {}", body);
            return Err(ProviderError::Status { provider: PROVIDER, status: status.as_u16(), body });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("generateContent body: {}", e)))?;

        let text = payload
            .first_text()
            .ok_or_else(|| ProviderError::Malformed("response has no candidate text".to_string()))?;

        parse_design_result(text)
    }
}
