//! Translation provider seam. The broker depends on this capability and
//! does not implement translation or detection itself.

pub mod google;

use async_trait::async_trait;

pub use google::GoogleProvider;

/// Outcome of a detection call.
#[derive(Debug, Clone)]
pub struct Detection {
    pub language: String,
    /// Backend confidence in [0, 1].
    pub confidence: f64,
}

/// Outcome of a translation call. `source_used` is the source language the
/// backend actually translated from, which may differ from the requested
/// one when the backend corrects it.
#[derive(Debug, Clone)]
pub struct ProviderTranslation {
    pub translated_text: String,
    pub source_used: String,
}

#[derive(Debug)]
pub enum ProviderError {
    /// Malformed or temporarily failing backend. Callers may retry later.
    Service(String),
    /// Any other backend failure, with detail.
    Api(String),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::Service(msg) => write!(f, "service error: {msg}"),
            ProviderError::Api(msg) => write!(f, "API error: {msg}"),
        }
    }
}

/// External translation/detection backend.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn detect(&self, text: &str) -> Result<Detection, ProviderError>;

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<ProviderTranslation, ProviderError>;
}
