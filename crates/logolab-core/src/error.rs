//! Provider-level errors.

use thiserror::Error;

/// Errors produced while talking to a text or image provider.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProviderError {
    /// No API key configured for a provider that needs one.
    #[error("Provider credential is not configured")]
    MissingCredential,

    /// Network request failed (HTTP client).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("{provider} API error: {status}")]
    Status {
        provider: &'static str,
        status: u16,
        /// Raw response body, for server-side logs only.
        body: String,
    },

    /// Provider answered 2xx but the payload could not be used.
    #[error("Malformed provider response: {0}")]
    Malformed(String),

    /// Image response carried neither known payload shape.
    #[error("No image data in provider response")]
    NoImageData,

    /// A provider URL could not be built.
    #[error("Invalid provider URL: {0}")]
    InvalidUrl(String),
}

impl ProviderError {
    /// HTTP status of the upstream response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_omits_body() {
        let err = ProviderError::Status {
            provider: "Gemini",
            status: 503,
            body: r#"{"error":{"message":"project 1234 overloaded"}}"#.to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error: 503");
        assert_eq!(err.status(), Some(503));
        assert_eq!(ProviderError::NoImageData.status(), None);
    }
}
