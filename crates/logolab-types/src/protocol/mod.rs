//! Wire protocol types.
//!
//! - `gemini`: Google generative-language API request/response shapes
//!   (text `generateContent` and image `predict`).
//! - `ErrorBody`: the JSON body of every non-2xx gateway response.

pub mod gemini;

use serde::{Deserialize, Serialize};

/// Structured error body returned by both gateways.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(rename = "retryAfter", default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}
