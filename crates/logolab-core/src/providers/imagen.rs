use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use logolab_types::protocol::gemini::{ImageGenerationResponse, PredictRequest};
use logolab_types::{GatewayConfig, ImageReference, ImageSource};
use reqwest::Client;
use tracing::{debug, warn};

use super::{models_endpoint, ImageProvider, API_KEY_HEADER};
use crate::error::{ProviderError, ProviderResult};

const PROVIDER: &str = "Gemini";
const DEFAULT_MIME: &str = "image/png";

/// Image bytes found in a provider response, tagged by the shape they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    /// `predictions[0].bytesBase64Encoded`
    Prediction { base64: String, mime_type: Option<String> },
    /// `candidates[0].content.parts[*].inlineData`
    InlineData { base64: String, mime_type: Option<String> },
}

impl ImagePayload {
    pub fn into_reference(self) -> ImageReference {
        let (base64, mime_type) = match self {
            Self::Prediction { base64, mime_type } | Self::InlineData { base64, mime_type } => {
                (base64, mime_type)
            }
        };
        ImageReference::DataUri {
            mime_type: mime_type.unwrap_or_else(|| DEFAULT_MIME.to_string()),
            base64,
        }
    }
}

/// Decode an image response: prediction shape first, then inline-data
/// shape, else `NoImageData`. Payloads that are empty or not valid base64
/// do not count as image data.
pub fn decode_image_payload(response: &ImageGenerationResponse) -> ProviderResult<ImagePayload> {
    if let Some(payload) = prediction_payload(response) {
        return Ok(payload);
    }
    if let Some(payload) = inline_data_payload(response) {
        return Ok(payload);
    }
    Err(ProviderError::NoImageData)
}

fn prediction_payload(response: &ImageGenerationResponse) -> Option<ImagePayload> {
    let prediction = response.predictions.first()?;
    let base64 = prediction.bytes_base64_encoded.as_deref().filter(|b| is_base64(b))?;
    Some(ImagePayload::Prediction {
        base64: base64.to_string(),
        mime_type: prediction.mime_type.clone(),
    })
}

fn inline_data_payload(response: &ImageGenerationResponse) -> Option<ImagePayload> {
    let content = response.candidates.first()?.content.as_ref()?;
    content.parts.iter().find_map(|part| {
        let inline = part.inline_data.as_ref()?;
        is_base64(&inline.data).then(|| ImagePayload::InlineData {
            base64: inline.data.clone(),
            mime_type: inline.mime_type.clone(),
        })
    })
}

fn is_base64(data: &str) -> bool {
    !data.is_empty() && STANDARD.decode(data).is_ok()
}

/// Primary image generation through the `predict` API.
pub struct ImagenProvider {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl ImagenProvider {
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

    /// Build from gateway config; `None` when no credential is configured.
    pub fn from_config(http_client: Client, config: &GatewayConfig) -> Option<Self> {
        let api_key = config.credential()?;
        Some(Self::new(http_client, &config.gemini_base_url, &config.image_model, api_key))
    }
}

#[async_trait]
impl ImageProvider for ImagenProvider {
    fn source(&self) -> ImageSource {
        ImageSource::Gemini
    }

    async fn generate_image(&self, prompt: &str) -> ProviderResult<ImageReference> {
        let url = models_endpoint(&self.base_url, &self.model, "predict");

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&PredictRequest::single(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini image API error: {}", status);
            debug!("Gemini image error body: {}", body);
            return Err(ProviderError::Status { provider: PROVIDER, status: status.as_u16(), body });
        }

        let payload: ImageGenerationResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Malformed(format!("predict body: {}", e)))?;

        decode_image_payload(&payload).map(ImagePayload::into_reference)
    }
}
