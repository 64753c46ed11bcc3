//! Provider clients.
//!
//! - `gemini`: text analysis via `generateContent`
//! - `imagen`: primary image generation via `predict`
//! - `pollinations`: always-available fallback; builds a URL, no request

pub mod client_builder;
mod gemini;
mod imagen;
mod pollinations;
mod seed;

pub use client_builder::build_http_client;
pub use gemini::GeminiTextProvider;
pub use imagen::{decode_image_payload, ImagePayload, ImagenProvider};
pub use pollinations::PollinationsProvider;
pub use seed::{SeedSequence, SEED_SPACE};

use async_trait::async_trait;
use logolab_types::{DesignRequest, DesignResult, ImageReference, ImageSource};

use crate::error::ProviderResult;

/// Header carrying the Google API key on outbound requests.
pub(crate) const API_KEY_HEADER: &str = "x-goog-api-key";

/// Turns a design request into a parsed design result.
#[async_trait]
pub trait TextProvider: Send + Sync {
    async fn generate_design(&self, request: &DesignRequest) -> ProviderResult<DesignResult>;
}

/// Produces an image reference for a prompt.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    fn source(&self) -> ImageSource;

    async fn generate_image(&self, prompt: &str) -> ProviderResult<ImageReference>;
}

pub(crate) fn models_endpoint(base_url: &str, model: &str, action: &str) -> String {
    format!("{}/v1beta/models/{}:{}", base_url.trim_end_matches('/'), model, action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn models_endpoint_tolerates_trailing_slash() {
        assert_eq!(
            models_endpoint("https://generativelanguage.googleapis.com/", "gemini-2.0-flash-exp", "generateContent"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }
}
