//! Application State
//!
//! Shared, read-only after startup apart from the two rate limiters.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use logolab_core::providers::build_http_client;
use logolab_core::{
    GeminiTextProvider, ImageOrchestrator, ImageProvider, ImagenProvider, PollinationsProvider,
    RateLimiter, TextProvider,
};
use logolab_types::GatewayConfig;

#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub config: GatewayConfig,
    pub text_limiter: RateLimiter,
    pub image_limiter: RateLimiter,
    /// `None` when no credential is configured.
    pub text_provider: Option<Arc<dyn TextProvider>>,
    pub images: ImageOrchestrator,
}

impl AppState {
    /// Build providers from `config`. A missing credential is not fatal: the
    /// text gateway answers 500 and the image gateway skips its primary.
    pub fn from_config(config: GatewayConfig) -> Result<Self> {
        let http_client = build_http_client(Some(&config.upstream_proxy), config.request_timeout)
            .map_err(|e| anyhow::anyhow!(e))?;

        let text_provider: Option<Arc<dyn TextProvider>> =
            match GeminiTextProvider::from_config(http_client.clone(), &config) {
                Ok(provider) => Some(Arc::new(provider)),
                Err(e) => {
                    warn!("⚠️ {}; /generate-analysis will answer 500 until GEMINI_API_KEY is set", e);
                    None
                }
            };

        let primary = ImagenProvider::from_config(http_client, &config)
            .map(|p| Arc::new(p) as Arc<dyn ImageProvider>);
        let fallback = Arc::new(PollinationsProvider::from_config(&config));

        Ok(Self::new_with_components(config, text_provider, ImageOrchestrator::new(primary, fallback)))
    }

    /// Create AppState with pre-built providers.
    pub fn new_with_components(
        config: GatewayConfig,
        text_provider: Option<Arc<dyn TextProvider>>,
        images: ImageOrchestrator,
    ) -> Self {
        let limits = config.rate_limits;
        let window = Duration::from_secs(limits.window_secs);

        Self {
            inner: Arc::new(AppStateInner {
                text_limiter: RateLimiter::new(limits.text_limit, window),
                image_limiter: RateLimiter::new(limits.image_limit, window),
                config,
                text_provider,
                images,
            }),
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }
}
