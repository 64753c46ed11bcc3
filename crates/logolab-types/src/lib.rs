//! # Logo Lab Types
//!
//! Core types, models, and error definitions for Logo Lab.
//!
//! This crate provides the foundational type system for the workspace:
//!
//! - **`error`** - Typed error hierarchy for the gateways and configuration
//! - **`models`** - Domain models (design request/result, image result, config)
//! - **`protocol`** - Gemini/Imagen wire types and the gateway error body
//!
//! ## Architecture Role
//!
//! `logolab-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!                logolab-types (this crate)
//!                        │
//!              ┌─────────┴─────────┐
//!              ▼                   ▼
//!         logolab-core  ──▶  logolab-client
//!              │                   │
//!              └─────────┬─────────┘
//!                        ▼
//!                 logolab-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{ConfigError, GatewayError};

pub use models::{
    Color, DesignRequest, DesignRequestBody, DesignResult, GatewayConfig, ImageReference,
    ImageRequest, ImageResponse, ImageSource, RateLimitConfig, UpstreamProxyConfig, Variant,
    VARIANT_COUNT,
};
pub use protocol::ErrorBody;
