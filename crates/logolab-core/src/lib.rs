//! # Logo Lab Core
//!
//! Business logic shared by the gateway server and the client SDK.
//!
//! ```text
//! logolab-core/src/
//! ├── rate_limit/      # Trailing-window limiter keyed by client identifier
//! ├── providers/       # Gemini text, Imagen image, Pollinations URL builder
//! ├── orchestrator.rs  # Primary → fallback image chain
//! ├── prompt.rs        # Prompt templates
//! ├── response.rs      # Provider text → DesignResult (code-fence tolerant)
//! └── modules/         # Config loading, tracing setup
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod error;
pub mod modules;
pub mod orchestrator;
pub mod prompt;
pub mod providers;
pub mod rate_limit;
pub mod response;

pub use error::{ProviderError, ProviderResult};
pub use orchestrator::ImageOrchestrator;
pub use providers::{
    GeminiTextProvider, ImageProvider, ImagenProvider, PollinationsProvider, SeedSequence,
    TextProvider,
};
pub use rate_limit::RateLimiter;
