//! Lingua Broker: rate-limited, caching translation request broker.
//! The core is the result cache, the rate limiter, and the orchestration
//! layer over an external translation provider. HTTP routing and the
//! speech adapters are separate collaborators and live elsewhere.
//!
//! Build one `Translator` at process start and share it behind `Arc`:
//!
//! ```no_run
//! use std::sync::Arc;
//! use lingua_broker::{GoogleProvider, LanguageTable, Translator, TranslatorConfig};
//!
//! # async fn run() {
//! let provider = Arc::new(GoogleProvider::new().unwrap());
//! let translator = Arc::new(Translator::new(
//!     provider,
//!     LanguageTable::builtin(),
//!     TranslatorConfig::default(),
//! ));
//! let result = translator.translate("Hello", "fr", None).await;
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod event_log;
pub mod languages;
pub mod provider;
pub mod rate_limit;
pub mod service;

pub use cache::{CacheKey, CacheStats, ResultCache};
pub use config::TranslatorConfig;
pub use languages::LanguageTable;
pub use provider::{Detection, GoogleProvider, Provider, ProviderError, ProviderTranslation};
pub use rate_limit::RateLimiter;
pub use service::{DetectionResult, TranslationResult, Translator};
