//! Translation orchestration: validation, cache lookup, source-language
//! resolution, rate-limited provider calls, result normalization.
//! The `Translator` is built once at process start and shared behind `Arc`;
//! it keeps no per-request state of its own.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, CacheStats, ResultCache};
use crate::config::TranslatorConfig;
use crate::event_log::EventLog;
use crate::languages::{normalize_code, LanguageTable};
use crate::provider::{Provider, ProviderError};
use crate::rate_limit::RateLimiter;

/// Outcome of a translate call. Failures are carried in-band: `success` is
/// false and `error` holds the message. No error type crosses this boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translated_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<String>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_language_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationResult {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            translated_text: None,
            detected_language: None,
            confidence: 0.0,
            original_text: None,
            source_language_name: None,
            target_language_name: None,
            error: Some(error.into()),
        }
    }
}

/// Outcome of a standalone detection call, shaped for direct serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub success: bool,
    pub language: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Long-lived translation service: validates requests, consults the cache,
/// resolves the source language, and drives the provider through the
/// shared rate limiter.
pub struct Translator {
    provider: Arc<dyn Provider>,
    languages: LanguageTable,
    cache: ResultCache,
    limiter: RateLimiter,
    event_log: Option<EventLog>,
    batch_pause: Duration,
}

impl Translator {
    pub fn new(
        provider: Arc<dyn Provider>,
        languages: LanguageTable,
        config: TranslatorConfig,
    ) -> Self {
        let event_log = config.event_log_path.as_ref().map(EventLog::new);
        info!(
            languages = languages.len(),
            cache_max = config.cache_max_size,
            min_interval_ms = config.min_interval.as_millis() as u64,
            "translator initialized"
        );
        Self {
            provider,
            languages,
            cache: ResultCache::new(config.cache_max_size, config.cache_expiry),
            limiter: RateLimiter::new(config.min_interval),
            event_log,
            batch_pause: config.batch_pause,
        }
    }

    /// Translate `text` into `target_language`. With no source language (or
    /// "auto"), the source is resolved through the provider's detector.
    pub async fn translate(
        &self,
        text: &str,
        target_language: &str,
        source_language: Option<&str>,
    ) -> TranslationResult {
        let text = text.trim();
        if text.is_empty() {
            return TranslationResult::failure("Text cannot be empty");
        }

        let target = normalize_code(target_language);
        if !self.languages.contains(&target) {
            return TranslationResult::failure(format!("Unsupported target language: {target}"));
        }

        // "auto" and an absent source are the same request; they key the
        // cache identically.
        let requested_source = source_language
            .map(normalize_code)
            .filter(|code| !code.is_empty() && code != "auto");
        let key_source = requested_source.as_deref().unwrap_or("auto");
        let key = CacheKey::compute(key_source, &target, text);

        if let Some(hit) = self.cache.get(&key) {
            debug!(source = key_source, target = %target, "cache hit");
            return hit;
        }

        // Resolve the source language and detection confidence.
        let (source, confidence) = match requested_source {
            Some(code) => {
                if !self.languages.contains(&code) {
                    return TranslationResult::failure(format!(
                        "Unsupported source language: {code}"
                    ));
                }
                (code, 1.0)
            }
            None => match self.detect_source(text).await {
                Ok(resolved) => resolved,
                Err(e) => {
                    warn!(error = %e, "source language detection failed");
                    return TranslationResult::failure("Failed to detect source language");
                }
            },
        };

        // Same language: return the text as-is, no provider call.
        if source == target {
            let result = TranslationResult {
                success: true,
                translated_text: Some(text.to_string()),
                detected_language: Some(source.clone()),
                confidence: 1.0,
                original_text: Some(text.to_string()),
                source_language_name: Some(self.languages.name(&source).to_string()),
                target_language_name: Some(self.languages.name(&target).to_string()),
                error: None,
            };
            self.cache.set(key, result.clone());
            return result;
        }

        self.limiter.acquire().await;
        let translation = match self.provider.translate(text, &source, &target).await {
            Ok(translation) => translation,
            Err(ProviderError::Service(detail)) => {
                warn!(error = %detail, "transient provider failure");
                return TranslationResult::failure("Translation service temporarily unavailable");
            }
            Err(ProviderError::Api(detail)) => {
                warn!(error = %detail, "provider failure");
                return TranslationResult::failure(format!("Translation failed: {detail}"));
            }
        };

        // The backend may correct the source language it was given.
        let detected = normalize_code(&translation.source_used);
        let translated_len = translation.translated_text.chars().count();
        let result = TranslationResult {
            success: true,
            translated_text: Some(translation.translated_text),
            detected_language: Some(detected.clone()),
            confidence,
            original_text: Some(text.to_string()),
            source_language_name: Some(self.languages.name(&detected).to_string()),
            target_language_name: Some(self.languages.name(&target).to_string()),
            error: None,
        };
        self.cache.set(key, result.clone());

        if let Some(log) = &self.event_log {
            log.record(&detected, &target, text.chars().count(), translated_len);
        }
        info!(source = %detected, target = %target, "translation successful");
        result
    }

    /// Translate a list of texts sequentially, one result per input, in
    /// order. A bad item never aborts the batch: empty inputs become
    /// failure entries without touching the provider.
    pub async fn translate_batch(
        &self,
        texts: &[String],
        target_language: &str,
        source_language: Option<&str>,
    ) -> Vec<TranslationResult> {
        let mut results = Vec::with_capacity(texts.len());
        for text in texts {
            if text.trim().is_empty() {
                let mut failure = TranslationResult::failure("Empty text");
                failure.original_text = Some(text.clone());
                results.push(failure);
            } else {
                let mut result = self
                    .translate(text, target_language, source_language)
                    .await;
                if result.original_text.is_none() {
                    result.original_text = Some(text.clone());
                }
                results.push(result);
            }

            // Ease burst pressure beyond what the rate limiter enforces.
            if texts.len() > 1 {
                tokio::time::sleep(self.batch_pause).await;
            }
        }
        results
    }

    /// Detect the language of `text` via the provider, through the shared
    /// rate limiter.
    pub async fn detect_language(&self, text: &str) -> DetectionResult {
        self.limiter.acquire().await;
        match self.provider.detect(text).await {
            Ok(detection) => {
                let language = normalize_code(&detection.language);
                DetectionResult {
                    success: true,
                    language_name: Some(self.languages.name(&language).to_string()),
                    language,
                    confidence: detection.confidence,
                    error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "language detection failed");
                DetectionResult {
                    success: false,
                    language: "unknown".to_string(),
                    confidence: 0.0,
                    language_name: None,
                    error: Some(format!("Language detection failed: {e}")),
                }
            }
        }
    }

    async fn detect_source(&self, text: &str) -> Result<(String, f64), ProviderError> {
        self.limiter.acquire().await;
        let detection = self.provider.detect(text).await?;
        Ok((normalize_code(&detection.language), detection.confidence))
    }

    pub fn supported_languages(&self) -> &HashMap<String, String> {
        self.languages.all()
    }

    pub fn is_language_supported(&self, code: &str) -> bool {
        self.languages.contains(code)
    }

    pub fn language_name(&self, code: &str) -> &str {
        self.languages.name(code)
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("translation cache cleared");
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
