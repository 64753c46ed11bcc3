//! Gateway-facing errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocol::ErrorBody;

/// Fixed retry hint returned on every rate-limit denial, regardless of how
/// much of the window actually remains.
pub const RETRY_AFTER_SECS: u64 = 60;

/// Errors surfaced by the text and image gateways.
///
/// `message` fields carry the short user-facing (Arabic) text; the `error`
/// label in the wire body is derived from the variant.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum GatewayError {
    /// Required request fields are missing or blank
    #[error("{label}")]
    Validation { label: String, message: String },

    /// Per-client request budget for the current window is spent
    #[error("Too many requests, retry after {retry_after_secs}s")]
    RateLimitExceeded { retry_after_secs: u64, message: String },

    /// Provider credential is not configured on the server
    #[error("Server configuration error")]
    UpstreamConfig { message: String },

    /// Provider returned a non-success status or an unusable payload
    #[error("Generation failed{}", details.as_ref().map(|d| format!(": {}", d)).unwrap_or_default())]
    UpstreamFailure { message: String, details: Option<String> },

    /// Neither image provider produced a usable reference
    #[error("Image generation failed")]
    ImageFailure { message: String },

    /// HTTP method other than POST/OPTIONS
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl GatewayError {
    pub fn missing_design_fields() -> Self {
        Self::Validation {
            label: "Missing required fields".to_string(),
            message: "يرجى إدخال اسم المشروع والوصف".to_string(),
        }
    }

    pub fn missing_prompt() -> Self {
        Self::Validation {
            label: "Missing prompt".to_string(),
            message: "وصف الصورة مطلوب".to_string(),
        }
    }

    pub fn text_rate_limited() -> Self {
        Self::RateLimitExceeded {
            retry_after_secs: RETRY_AFTER_SECS,
            message: "يرجى الانتظار قليلاً قبل المحاولة مرة أخرى".to_string(),
        }
    }

    pub fn image_rate_limited() -> Self {
        Self::RateLimitExceeded {
            retry_after_secs: RETRY_AFTER_SECS,
            message: "تجاوزت الحد المسموح. انتظر دقيقة".to_string(),
        }
    }

    pub fn missing_credential() -> Self {
        Self::UpstreamConfig { message: "خطأ في إعدادات الخادم".to_string() }
    }

    pub fn generation_failed(details: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            message: "فشل في توليد التحليل. حاول مرة أخرى".to_string(),
            details: Some(details.into()),
        }
    }

    pub fn image_failed() -> Self {
        Self::ImageFailure { message: "فشل في توليد الصورة".to_string() }
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::MethodNotAllowed => 405,
            Self::RateLimitExceeded { .. } => 429,
            Self::UpstreamConfig { .. } | Self::UpstreamFailure { .. } | Self::ImageFailure { .. } => {
                500
            }
        }
    }

    /// Short English label used as the `error` field of the wire body.
    pub fn label(&self) -> &str {
        match self {
            Self::Validation { label, .. } => label,
            Self::RateLimitExceeded { .. } => "Too many requests",
            Self::UpstreamConfig { .. } => "Server configuration error",
            Self::UpstreamFailure { .. } => "Generation failed",
            Self::ImageFailure { .. } => "Image generation failed",
            Self::MethodNotAllowed => "Method not allowed",
        }
    }

    /// Seconds the caller should wait, for rate-limit denials only.
    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimitExceeded { retry_after_secs, .. } => Some(*retry_after_secs),
            _ => None,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let (message, details) = match self {
            Self::Validation { message, .. }
            | Self::RateLimitExceeded { message, .. }
            | Self::UpstreamConfig { message }
            | Self::ImageFailure { message } => (message.clone(), None),
            Self::UpstreamFailure { message, details } => (message.clone(), details.clone()),
            Self::MethodNotAllowed => (String::new(), None),
        };

        ErrorBody {
            error: self.label().to_string(),
            message,
            details,
            retry_after: self.retry_after(),
        }
    }
}
