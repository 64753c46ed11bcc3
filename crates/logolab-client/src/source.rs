//! Pluggable backends for the design session.
//!
//! A session talks either to the gateway or straight to the providers; the
//! two strategies are chosen independently.

use std::sync::Arc;

use async_trait::async_trait;
use logolab_core::prompt::logo_render_prompt;
use logolab_core::{GeminiTextProvider, ImageProvider, PollinationsProvider, TextProvider};
use logolab_types::{DesignRequest, DesignResult, ImageRequest, ImageResponse};

use crate::client::GatewayClient;
use crate::error::ClientError;

/// Edge length of images built by the direct strategy.
pub const DIRECT_IMAGE_SIZE: u32 = 512;

/// One analysis attempt. Retries are applied by the caller.
#[async_trait]
pub trait AnalysisSource: Send + Sync {
    async fn analyze(&self, request: &DesignRequest) -> Result<DesignResult, ClientError>;
}

/// One image for one variant prompt.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn render(&self, prompt: &str) -> Result<ImageResponse, ClientError>;
}

pub struct GatewayAnalysis {
    client: Arc<GatewayClient>,
}

impl GatewayAnalysis {
    pub fn new(client: Arc<GatewayClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalysisSource for GatewayAnalysis {
    async fn analyze(&self, request: &DesignRequest) -> Result<DesignResult, ClientError> {
        self.client.generate_analysis_once(request).await
    }
}

/// Calls the text provider directly. Without a key every attempt fails
/// with `MissingKey` before touching the network.
pub struct DirectGemini {
    provider: Option<GeminiTextProvider>,
}

impl DirectGemini {
    pub fn new(provider: Option<GeminiTextProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl AnalysisSource for DirectGemini {
    async fn analyze(&self, request: &DesignRequest) -> Result<DesignResult, ClientError> {
        let provider = self.provider.as_ref().ok_or(ClientError::MissingKey)?;
        Ok(provider.generate_design(request).await?)
    }
}

pub struct GatewayImages {
    client: Arc<GatewayClient>,
    use_gemini: bool,
}

impl GatewayImages {
    pub fn new(client: Arc<GatewayClient>, use_gemini: bool) -> Self {
        Self { client, use_gemini }
    }
}

#[async_trait]
impl ImageSource for GatewayImages {
    async fn render(&self, prompt: &str) -> Result<ImageResponse, ClientError> {
        let request = ImageRequest { prompt: prompt.to_string(), use_gemini: self.use_gemini };
        self.client.generate_image(&request).await
    }
}

/// Builds fallback URLs locally: 512×512, logo rendering suffix appended.
pub struct DirectPollinations {
    provider: PollinationsProvider,
}

impl DirectPollinations {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { provider: PollinationsProvider::new(base_url, DIRECT_IMAGE_SIZE) }
    }
}

#[async_trait]
impl ImageSource for DirectPollinations {
    async fn render(&self, prompt: &str) -> Result<ImageResponse, ClientError> {
        let image = self.provider.generate_image(&logo_render_prompt(prompt)).await?;
        Ok(ImageResponse::new(&image, self.provider.source()))
    }
}
