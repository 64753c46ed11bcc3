//! Error types for the Logo Lab client.

use logolab_core::ProviderError;
use logolab_types::{ErrorBody, GatewayError};
use thiserror::Error;

const MSG_MISSING_KEY: &str = "مفتاح الـ API غير موجود. تأكد من إعدادات البيئة.";
const MSG_INVALID_FORM: &str = "يرجى إدخال اسم المشروع بالإنجليزية ووصف الشعار.";
const MSG_FORBIDDEN: &str = "مفتاح الـ API غير صالح أو لا يملك صلاحية الوصول (403).";
const MSG_NOT_FOUND: &str = "النموذج المطلوب غير متوفر حالياً (404).";
const MSG_RATE_LIMITED: &str = "تجاوزت الحد المسموح من الطلبات. انتظر دقيقة ثم حاول مجدداً (429).";
const MSG_GENERIC: &str = "فشل في معالجة البيانات.";

/// Errors that can occur when using the Logo Lab client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No provider credential, locally or on the gateway.
    #[error("API key is not configured")]
    MissingKey,

    /// Input rejected locally or by the gateway (400).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Credential rejected (403).
    #[error("Forbidden (403)")]
    Forbidden,

    /// Model or route not found (404).
    #[error("Not found (404)")]
    NotFound,

    /// Server returned 429 Too Many Requests.
    #[error("Rate limited (429): retry after {retry_after:?}s")]
    RateLimited {
        /// Seconds to wait before retrying, if provided by server.
        retry_after: Option<u64>,
    },

    /// Any other non-success status.
    #[error("Server error ({status}): {message}")]
    ServerError {
        /// HTTP status code.
        status: u16,
        /// Error label from the server.
        message: String,
    },

    /// HTTP request failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server or provider returned an unusable payload.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Classify a non-success status. `body` is the gateway error body when
    /// it could be decoded; `retry_after` comes from the response header.
    pub fn from_status(status: u16, body: Option<&ErrorBody>, retry_after: Option<u64>) -> Self {
        match status {
            400 => Self::Validation(
                body.map(|b| if b.message.is_empty() { b.error.clone() } else { b.message.clone() })
                    .unwrap_or_default(),
            ),
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited { retry_after: retry_after.or_else(|| body?.retry_after) },
            500 if body.is_some_and(is_missing_credential) => Self::MissingKey,
            500 => match body.and_then(upstream_status) {
                Some(upstream @ (403 | 404 | 429)) => Self::from_status(upstream, None, None),
                _ => Self::server_error(status, body),
            },
            _ => Self::server_error(status, body),
        }
    }

    fn server_error(status: u16, body: Option<&ErrorBody>) -> Self {
        Self::ServerError {
            status,
            message: body.map(|b| b.error.clone()).unwrap_or_else(|| format!("HTTP error! status: {}", status)),
        }
    }

    /// Whether another attempt could succeed. Permanent failures (missing
    /// key, rejected credential, invalid input) are terminal.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::MissingKey | Self::Forbidden | Self::Validation(_))
    }

    /// Short Arabic message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingKey => MSG_MISSING_KEY,
            Self::Validation(_) => MSG_INVALID_FORM,
            Self::Forbidden => MSG_FORBIDDEN,
            Self::NotFound => MSG_NOT_FOUND,
            Self::RateLimited { .. } => MSG_RATE_LIMITED,
            Self::ServerError { .. } | Self::Request(_) | Self::InvalidResponse(_) => MSG_GENERIC,
        }
    }
}

// The gateway reports a missing server-side key as a 500 with this label.
fn is_missing_credential(body: &ErrorBody) -> bool {
    body.error == GatewayError::missing_credential().label()
}

// Upstream failures surface as 500 with `details: "<provider> API error: <status>"`.
fn upstream_status(body: &ErrorBody) -> Option<u16> {
    let details = body.details.as_deref()?;
    let (_, status) = details.rsplit_once("API error: ")?;
    status.trim().parse().ok()
}

impl From<ProviderError> for ClientError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingCredential => Self::MissingKey,
            ProviderError::Network(e) => Self::Request(e),
            ProviderError::Status { status, .. } => Self::from_status(status, None, None),
            other => Self::InvalidResponse(other.to_string()),
        }
    }
}
