//! Google Translate web endpoint client.
//! Connection pooling via reqwest, bounded retry on 429/5xx. A response
//! that does not parse as the expected array shape is a transient
//! service failure, matching how the upstream misbehaves under load.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use super::{Detection, Provider, ProviderError, ProviderTranslation};

const ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";
const MAX_RETRIES: u32 = 2;

pub struct GoogleProvider {
    http: reqwest::Client,
    base_url: String,
}

impl GoogleProvider {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_base_url(ENDPOINT)
    }

    /// Point the client at an alternate endpoint (mirrors, test stubs).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| ProviderError::Api(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Issue one translate_a/single call and parse the body as JSON.
    /// 429 and 5xx are retried with backoff; anything else fails fast.
    async fn call(&self, text: &str, source: &str, target: &str) -> Result<Value, ProviderError> {
        let mut attempt: u32 = 0;

        loop {
            let result = self
                .http
                .get(&self.base_url)
                .query(&[
                    ("client", "gtx"),
                    ("dt", "t"),
                    ("sl", source),
                    ("tl", target),
                    ("q", text),
                ])
                .send()
                .await;

            match result {
                Ok(resp) if resp.status().is_success() => {
                    return resp.json::<Value>().await.map_err(|e| {
                        ProviderError::Service(format!("malformed response: {e}"))
                    });
                }
                Ok(resp) if resp.status().as_u16() == 429 || resp.status().is_server_error() => {
                    let status = resp.status();
                    if attempt >= MAX_RETRIES {
                        return Err(ProviderError::Service(format!("status {status}")));
                    }
                    let wait = Duration::from_millis(500 * (1 << attempt));
                    warn!(
                        attempt,
                        status = status.as_u16(),
                        wait_ms = wait.as_millis() as u64,
                        "backend busy, retrying"
                    );
                    tokio::time::sleep(wait).await;
                    attempt += 1;
                }
                Ok(resp) => {
                    let status = resp.status();
                    let body = resp.text().await.unwrap_or_default();
                    return Err(ProviderError::Api(format!(
                        "unexpected status {}: {}",
                        status,
                        body.chars().take(200).collect::<String>()
                    )));
                }
                Err(e) if e.is_timeout() => {
                    return Err(ProviderError::Service("request timed out".into()));
                }
                Err(e) => {
                    return Err(ProviderError::Api(e.to_string()));
                }
            }
        }
    }
}

/// Concatenate the per-sentence segments of a translate_a/single body.
fn joined_translation(value: &Value) -> Option<String> {
    let segments = value.get(0)?.as_array()?;
    let mut out = String::new();
    for segment in segments {
        if let Some(part) = segment.get(0).and_then(Value::as_str) {
            out.push_str(part);
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

#[async_trait]
impl Provider for GoogleProvider {
    async fn detect(&self, text: &str) -> Result<Detection, ProviderError> {
        let value = self.call(text, "auto", "en").await?;
        let language = value
            .get(2)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ProviderError::Service("malformed response: missing source language".into())
            })?
            .to_string();
        // Older endpoint revisions omit the confidence slot.
        let confidence = value
            .get(6)
            .and_then(Value::as_f64)
            .unwrap_or(1.0)
            .clamp(0.0, 1.0);

        Ok(Detection {
            language,
            confidence,
        })
    }

    async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<ProviderTranslation, ProviderError> {
        let value = self.call(text, source, target).await?;
        let translated_text = joined_translation(&value).ok_or_else(|| {
            ProviderError::Service("malformed response: missing translation".into())
        })?;
        let source_used = value
            .get(2)
            .and_then(Value::as_str)
            .unwrap_or(source)
            .to_string();

        Ok(ProviderTranslation {
            translated_text,
            source_used,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn joins_multi_sentence_bodies() {
        let body = json!([
            [
                ["Bonjour. ", "Hello. ", null],
                ["Comment allez-vous?", "How are you?", null]
            ],
            null,
            "en"
        ]);
        assert_eq!(
            joined_translation(&body).as_deref(),
            Some("Bonjour. Comment allez-vous?")
        );
    }

    #[test]
    fn rejects_bodies_without_segments() {
        assert!(joined_translation(&json!([])).is_none());
        assert!(joined_translation(&json!({"error": "nope"})).is_none());
        assert!(joined_translation(&json!([[], null, "en"])).is_none());
    }
}
