//! Primary → fallback image chain.
//!
//! The primary provider is optional (absent without a credential) and only
//! tried when the caller asks for it. Any primary failure degrades to the
//! fallback, which never performs network I/O and cannot fail for a valid
//! base URL.

use std::sync::Arc;

use logolab_types::{ImageRequest, ImageResponse};
use tracing::{info, warn};

use crate::error::ProviderResult;
use crate::providers::ImageProvider;

#[derive(Clone)]
pub struct ImageOrchestrator {
    primary: Option<Arc<dyn ImageProvider>>,
    fallback: Arc<dyn ImageProvider>,
}

impl ImageOrchestrator {
    pub fn new(primary: Option<Arc<dyn ImageProvider>>, fallback: Arc<dyn ImageProvider>) -> Self {
        Self { primary, fallback }
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub async fn generate(&self, request: &ImageRequest) -> ProviderResult<ImageResponse> {
        if request.use_gemini {
            if let Some(primary) = &self.primary {
                match primary.generate_image(&request.prompt).await {
                    Ok(image) => {
                        info!("Image generated by {}", primary.source());
                        return Ok(ImageResponse::new(&image, primary.source()));
                    }
                    Err(e) => {
                        warn!("{} image generation failed, falling back: {}", primary.source(), e);
                    }
                }
            }
        }

        let image = self.fallback.generate_image(&request.prompt).await?;
        info!("Image generated by {}", self.fallback.source());
        Ok(ImageResponse::new(&image, self.fallback.source()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use async_trait::async_trait;
    use logolab_types::{ImageReference, ImageSource};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Stub {
        source: ImageSource,
        result: Result<ImageReference, u16>,
        calls: AtomicUsize,
    }

    impl Stub {
        fn ok(source: ImageSource, image: ImageReference) -> Arc<Self> {
            Arc::new(Self { source, result: Ok(image), calls: AtomicUsize::new(0) })
        }

        fn failing(source: ImageSource, status: u16) -> Arc<Self> {
            Arc::new(Self { source, result: Err(status), calls: AtomicUsize::new(0) })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageProvider for Stub {
        fn source(&self) -> ImageSource {
            self.source
        }

        async fn generate_image(&self, _prompt: &str) -> ProviderResult<ImageReference> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone().map_err(|status| ProviderError::Status {
                provider: "Gemini",
                status,
                body: String::new(),
            })
        }
    }

    fn fallback_image() -> ImageReference {
        ImageReference::Url("https://image.pollinations.ai/prompt/x?seed=1".to_string())
    }

    #[tokio::test]
    async fn primary_success_is_returned() {
        let primary = Stub::ok(ImageSource::Gemini, ImageReference::png("QUJD"));
        let fallback = Stub::ok(ImageSource::Pollinations, fallback_image());
        let chain = ImageOrchestrator::new(Some(primary.clone()), fallback.clone());

        let response = chain.generate(&ImageRequest::new("logo")).await.unwrap();

        assert_eq!(response.source, ImageSource::Gemini);
        assert_eq!(response.image, "data:image/png;base64,QUJD");
        assert_eq!(fallback.calls(), 0);
    }

    #[tokio::test]
    async fn primary_failure_degrades_to_fallback() {
        let primary = Stub::failing(ImageSource::Gemini, 500);
        let fallback = Stub::ok(ImageSource::Pollinations, fallback_image());
        let chain = ImageOrchestrator::new(Some(primary.clone()), fallback.clone());

        let response = chain.generate(&ImageRequest::new("logo")).await.unwrap();

        assert_eq!(response.source, ImageSource::Pollinations);
        assert_eq!(primary.calls(), 1);
        assert_eq!(fallback.calls(), 1);
    }

    #[tokio::test]
    async fn opt_out_skips_primary() {
        let primary = Stub::ok(ImageSource::Gemini, ImageReference::png("QUJD"));
        let fallback = Stub::ok(ImageSource::Pollinations, fallback_image());
        let chain = ImageOrchestrator::new(Some(primary.clone()), fallback);

        let request = ImageRequest { prompt: "logo".to_string(), use_gemini: false };
        let response = chain.generate(&request).await.unwrap();

        assert_eq!(response.source, ImageSource::Pollinations);
        assert_eq!(primary.calls(), 0);
    }

    #[tokio::test]
    async fn missing_primary_uses_fallback() {
        let chain = ImageOrchestrator::new(None, Stub::ok(ImageSource::Pollinations, fallback_image()));
        assert!(!chain.has_primary());

        let response = chain.generate(&ImageRequest::new("logo")).await.unwrap();
        assert_eq!(response.source, ImageSource::Pollinations);
    }
}
