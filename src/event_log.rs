//! Best-effort translation event log: one JSON line per fresh successful
//! translation. Write failures are logged and swallowed; this log must
//! never fail the caller's request.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
struct TranslationEvent<'a> {
    timestamp: String,
    source_lang: &'a str,
    target_lang: &'a str,
    original_len: usize,
    translated_len: usize,
}

pub struct EventLog {
    path: PathBuf,
    // Serializes appends so concurrent records do not interleave.
    write_lock: Mutex<()>,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if let Some(dir) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                warn!(error = %e, "event log directory creation failed");
            }
        }
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Append one event record. Errors are discarded after a warning.
    pub fn record(
        &self,
        source_lang: &str,
        target_lang: &str,
        original_len: usize,
        translated_len: usize,
    ) {
        let event = TranslationEvent {
            timestamp: Local::now().to_rfc3339(),
            source_lang,
            target_lang,
            original_len,
            translated_len,
        };
        let line = match serde_json::to_string(&event) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to serialize translation event");
                return;
            }
        };

        let _guard = self.write_lock.lock();
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| writeln!(file, "{line}"));
        if let Err(e) = result {
            warn!(error = %e, "failed to append translation event");
        }
    }
}
