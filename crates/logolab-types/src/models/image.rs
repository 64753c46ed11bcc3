//! Image generation models.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::design::non_blank;
use crate::error::GatewayError;

/// Validated image request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRequest {
    pub prompt: String,
    #[serde(default = "default_use_gemini")]
    pub use_gemini: bool,
}

const fn default_use_gemini() -> bool {
    true
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self { prompt: prompt.into(), use_gemini: true }
    }

    /// Parse a raw gateway body. A body that is not a JSON object, or whose
    /// `prompt` is missing or blank, is a validation error. A `useGemini`
    /// that is not a boolean falls back to the default.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, GatewayError> {
        #[derive(Deserialize, Default)]
        #[serde(rename_all = "camelCase")]
        struct RawBody {
            #[serde(default)]
            prompt: Option<String>,
            #[serde(default)]
            use_gemini: Option<serde_json::Value>,
        }

        let raw: RawBody = serde_json::from_slice(bytes).unwrap_or_default();
        let prompt = non_blank(raw.prompt).ok_or_else(GatewayError::missing_prompt)?;
        Ok(Self {
            prompt,
            use_gemini: raw
                .use_gemini
                .as_ref()
                .and_then(serde_json::Value::as_bool)
                .unwrap_or_else(default_use_gemini),
        })
    }
}

/// Which provider produced an image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Gemini,
    Pollinations,
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::Pollinations => write!(f, "pollinations"),
        }
    }
}

/// An image either embedded as base64 bytes or hosted at a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageReference {
    DataUri { mime_type: String, base64: String },
    Url(String),
}

impl ImageReference {
    pub fn png(base64: impl Into<String>) -> Self {
        Self::DataUri { mime_type: "image/png".to_string(), base64: base64.into() }
    }

    pub fn is_data_uri(&self) -> bool {
        matches!(self, Self::DataUri { .. })
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataUri { mime_type, base64 } => write!(f, "data:{};base64,{}", mime_type, base64),
            Self::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Successful image gateway response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageResponse {
    pub image: String,
    pub source: ImageSource,
}

impl ImageResponse {
    pub fn new(image: &ImageReference, source: ImageSource) -> Self {
        Self { image: image.to_string(), source }
    }
}
