//! Domain models.

pub mod config;
pub mod design;
pub mod image;

pub use config::{GatewayConfig, RateLimitConfig, UpstreamProxyConfig};
pub use design::{Color, DesignRequest, DesignRequestBody, DesignResult, Variant, VARIANT_COUNT};
pub use image::{ImageReference, ImageRequest, ImageResponse, ImageSource};
