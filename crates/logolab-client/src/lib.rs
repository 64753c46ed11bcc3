//! # Logo Lab Client
//!
//! SDK for the Logo Lab gateway: typed calls with backoff, pluggable
//! analysis/image strategies and the two-slot `DesignSession`.
//!
//! ```no_run
//! use std::sync::Arc;
//! use logolab_client::{ClientConfig, DesignSession, GatewayAnalysis, GatewayClient, GatewayImages};
//!
//! # async fn run() -> Result<(), logolab_client::ClientError> {
//! let config = ClientConfig::default();
//! let retry = config.retry;
//! let client = Arc::new(GatewayClient::new(config)?);
//! let session = DesignSession::new(
//!     Arc::new(GatewayAnalysis::new(client.clone())),
//!     Arc::new(GatewayImages::new(client, true)),
//!     retry,
//! );
//! let design = session.submit("skyline", "modern minimal").await?;
//! println!("{}", design.concept_summary);
//! # Ok(())
//! # }
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod client;
mod error;
mod retry;
mod session;
mod source;
mod types;

pub use client::GatewayClient;
pub use error::ClientError;
pub use retry::retry_with_backoff;
pub use session::{DesignSession, FormState, SessionSnapshot, SlotState};
pub use source::{
    AnalysisSource, DirectGemini, DirectPollinations, GatewayAnalysis, GatewayImages, ImageSource,
    DIRECT_IMAGE_SIZE,
};
pub use types::*;
