use async_trait::async_trait;
use logolab_types::{GatewayConfig, ImageReference, ImageSource};
use url::Url;

use super::seed::SeedSequence;
use super::ImageProvider;
use crate::error::{ProviderError, ProviderResult};

/// Fallback image provider. Builds a deterministic URL from prompt and seed;
/// the image is rendered when the URL is fetched, so building it never
/// touches the network.
pub struct PollinationsProvider {
    base_url: String,
    size: u32,
    enhance: bool,
    model: Option<String>,
    seeds: SeedSequence,
}

impl PollinationsProvider {
    pub fn new(base_url: impl Into<String>, size: u32) -> Self {
        Self {
            base_url: base_url.into(),
            size,
            enhance: false,
            model: None,
            seeds: SeedSequence::new(),
        }
    }

    /// Gateway flavour: configured size, prompt enhancement, flux model.
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self::new(&config.pollinations_base_url, config.fallback_image_size)
            .with_enhance(true)
            .with_model("flux")
    }

    pub fn with_enhance(mut self, enhance: bool) -> Self {
        self.enhance = enhance;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_seeds(mut self, seeds: SeedSequence) -> Self {
        self.seeds = seeds;
        self
    }

    /// `{base}/prompt/{encoded prompt}?width=…&height=…&nologo=true&seed=…`
    pub fn image_url(&self, prompt: &str, seed: u32) -> ProviderResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ProviderError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|()| ProviderError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push("prompt")
            .push(prompt);

        {
            let size = self.size.to_string();
            let mut query = url.query_pairs_mut();
            query
                .append_pair("width", &size)
                .append_pair("height", &size)
                .append_pair("nologo", "true")
                .append_pair("seed", &seed.to_string());
            if self.enhance {
                query.append_pair("enhance", "true");
            }
            if let Some(model) = &self.model {
                query.append_pair("model", model);
            }
        }

        Ok(url)
    }
}

#[async_trait]
impl ImageProvider for PollinationsProvider {
    fn source(&self) -> ImageSource {
        ImageSource::Pollinations
    }

    async fn generate_image(&self, prompt: &str) -> ProviderResult<ImageReference> {
        let url = self.image_url(prompt, self.seeds.next_seed())?;
        Ok(ImageReference::Url(url.into()))
    }
}
