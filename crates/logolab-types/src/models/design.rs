//! Design request/result models.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::GatewayError;

/// Number of design variants produced per request.
pub const VARIANT_COUNT: usize = 2;

/// A submitted design request. Both fields are non-blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    pub project_name: String,
    pub input_text: String,
}

/// Raw gateway body before validation. Missing or non-string fields become
/// `None` so the handler can answer with a structured 400.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequestBody {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub input_text: Option<String>,
}

impl DesignRequestBody {
    /// Parse leniently: a body that is not a JSON object of strings is
    /// treated as having no fields at all.
    pub fn from_slice(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    pub fn into_request(self) -> Result<DesignRequest, GatewayError> {
        match (non_blank(self.project_name), non_blank(self.input_text)) {
            (Some(project_name), Some(input_text)) => Ok(DesignRequest { project_name, input_text }),
            _ => Err(GatewayError::missing_design_fields()),
        }
    }
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// One generated design proposal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variant {
    #[serde(deserialize_with = "deserialize_variant_id")]
    pub id: u32,
    pub title: String,
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Color {
    pub name: String,
    pub hex: String,
}

/// Parsed provider output: a concept summary, the variants, and a palette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DesignResult {
    #[serde(default)]
    pub concept_summary: String,
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub colors: Vec<Color>,
}

impl DesignResult {
    pub fn variant(&self, slot: usize) -> Option<&Variant> {
        self.variants.get(slot)
    }
}

// Models sometimes emit `"id": "1"` instead of `"id": 1`.
fn deserialize_variant_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
