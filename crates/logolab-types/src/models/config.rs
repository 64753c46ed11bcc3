//! Gateway configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PORT: u16 = 8045;
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_POLLINATIONS_BASE_URL: &str = "https://image.pollinations.ai";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-001";

/// Full gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct GatewayConfig {
    /// Allow LAN access (bind to 0.0.0.0)
    #[serde(default)]
    pub allow_lan_access: bool,
    /// Port to listen on
    #[validate(range(min = 1_u16))]
    #[serde(default = "default_port")]
    pub port: u16,
    /// Provider credential. Read from the environment, never written back out.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL of the generative-language API
    #[validate(url)]
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,
    /// Model used for the analysis (text) call
    #[validate(length(min = 1_u64))]
    #[serde(default = "default_text_model")]
    pub text_model: String,
    /// Model used for the primary image call
    #[validate(length(min = 1_u64))]
    #[serde(default = "default_image_model")]
    pub image_model: String,
    /// Base URL of the fallback image provider
    #[validate(url)]
    #[serde(default = "default_pollinations_base_url")]
    pub pollinations_base_url: String,
    /// Edge length in pixels of fallback images
    #[validate(range(min = 64_u32, max = 4096_u32))]
    #[serde(default = "default_fallback_image_size")]
    pub fallback_image_size: u32,
    /// Per-client request budgets
    #[serde(default)]
    #[validate(nested)]
    pub rate_limits: RateLimitConfig,
    /// Outbound request timeout in seconds
    #[validate(range(min = 5_u64, max = 3600_u64))]
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Upstream proxy configuration
    #[serde(default)]
    #[validate(nested)]
    pub upstream_proxy: UpstreamProxyConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            allow_lan_access: false,
            port: DEFAULT_PORT,
            api_key: None,
            gemini_base_url: default_gemini_base_url(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            pollinations_base_url: default_pollinations_base_url(),
            fallback_image_size: default_fallback_image_size(),
            rate_limits: RateLimitConfig::default(),
            request_timeout: default_request_timeout(),
            upstream_proxy: UpstreamProxyConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Get the bind address based on LAN access setting.
    pub fn get_bind_address(&self) -> String {
        if self.allow_lan_access {
            "0.0.0.0".to_string()
        } else {
            "127.0.0.1".to_string()
        }
    }

    /// Get the full bind socket address.
    pub fn get_socket_addr(&self) -> String {
        format!("{}:{}", self.get_bind_address(), self.port)
    }

    /// Credential, if configured and non-empty.
    pub fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }
}

/// Trailing-window request budgets per client identifier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RateLimitConfig {
    #[validate(range(min = 1_usize))]
    pub text_limit: usize,
    #[validate(range(min = 1_usize))]
    pub image_limit: usize,
    #[validate(range(min = 1_u64))]
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { text_limit: 10, image_limit: 20, window_secs: 60 }
    }
}

/// Upstream proxy configuration for outbound requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct UpstreamProxyConfig {
    /// Enable upstream proxy
    #[serde(default)]
    pub enabled: bool,
    /// Proxy URL (e.g., socks5://127.0.0.1:1080 or http://vps:3128)
    #[serde(default)]
    pub url: String,
}

pub const fn default_port() -> u16 {
    DEFAULT_PORT
}

pub fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

pub fn default_pollinations_base_url() -> String {
    DEFAULT_POLLINATIONS_BASE_URL.to_string()
}

pub fn default_text_model() -> String {
    DEFAULT_TEXT_MODEL.to_string()
}

pub fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

pub const fn default_fallback_image_size() -> u32 {
    1024
}

pub const fn default_request_timeout() -> u64 {
    120
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_published_limits() {
        let config = GatewayConfig::default();
        assert_eq!(config.rate_limits.text_limit, 10);
        assert_eq!(config.rate_limits.image_limit, 20);
        assert_eq!(config.rate_limits.window_secs, 60);
        assert_eq!(config.get_socket_addr(), "127.0.0.1:8045");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"port": 9000, "rate_limits": {"text_limit": 3, "image_limit": 4, "window_secs": 10}}"#)
                .unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.rate_limits.text_limit, 3);
        assert_eq!(config.text_model, DEFAULT_TEXT_MODEL);
    }

    #[test]
    fn api_key_is_never_serialized() {
        let config = GatewayConfig { api_key: Some("secret".to_string()), ..Default::default() };
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
        assert!(!json.contains("api_key"));
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        let config = GatewayConfig { api_key: Some("  ".to_string()), ..Default::default() };
        assert!(config.credential().is_none());
    }

    #[test]
    fn zero_limit_fails_validation() {
        let config = GatewayConfig {
            rate_limits: RateLimitConfig { text_limit: 0, ..Default::default() },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
