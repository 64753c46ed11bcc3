//! Typed error definitions for Logo Lab.
//!
//! - `GatewayError` is what the HTTP gateways surface to callers.
//! - `ConfigError` covers loading and validating `GatewayConfig`.

mod config;
mod gateway;

pub use config::ConfigError;
pub use gateway::GatewayError;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = GatewayError::text_rate_limited();

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("RateLimitExceeded"));
        assert!(json.contains("60"));

        let deserialized: GatewayError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ValidationError {
            field: "port".to_string(),
            message: "out of range".to_string(),
        };

        let msg = format!("{}", err);
        assert!(msg.contains("port"));
        assert!(msg.contains("out of range"));
    }
}
