//! Broker configuration with defaults matching the original deployment:
//! 1000 cached results, 24h expiry, 100ms between upstream calls.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Maximum number of cached translation results.
    pub cache_max_size: usize,
    /// Age at which a cached result is treated as absent.
    pub cache_expiry: Duration,
    /// Minimum spacing between outbound provider calls.
    pub min_interval: Duration,
    /// Pause between items of a multi-element batch, on top of the rate
    /// limiter, to reduce burst pressure on the upstream.
    pub batch_pause: Duration,
    /// Where to append translation event records. None disables the log.
    pub event_log_path: Option<PathBuf>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            cache_max_size: 1000,
            cache_expiry: Duration::from_secs(24 * 3600),
            min_interval: Duration::from_millis(100),
            batch_pause: Duration::from_millis(50),
            event_log_path: None,
        }
    }
}
