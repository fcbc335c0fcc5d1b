//! JSONL file writer for generation attempts.
//!
//! Each [`GenerationAttempt`] becomes one JSON line with a `type` field and
//! `timestamp`, appended to the file via a buffered writer.

use interview_application::GenerationNotifier;
use interview_domain::{AttemptOutcome, GenerationAttempt};
use serde_json::json;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlAttemptLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAttemptLogger {
    /// Open the log for appending, creating it (and parent directories) if needed.
    ///
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create attempt log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open attempt log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&self, record: serde_json::Value) {
        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

impl GenerationNotifier for JsonlAttemptLogger {
    fn on_attempt(&self, attempt: &GenerationAttempt) {
        let error = match &attempt.outcome {
            AttemptOutcome::Succeeded => None,
            AttemptOutcome::Failed(e) => Some(e.as_str()),
        };
        self.write_record(json!({
            "type": "generation_attempt",
            "timestamp": timestamp(),
            "model": attempt.model,
            "attempt": attempt.attempt,
            "success": attempt.is_success(),
            "error": error,
        }));
    }

    fn on_exhausted(&self, calls: usize, last_error: &str) {
        self.write_record(json!({
            "type": "generation_exhausted",
            "timestamp": timestamp(),
            "calls": calls,
            "last_error": last_error,
        }));
    }
}

impl Drop for JsonlAttemptLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_domain::Model;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_line_per_attempt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("attempts.jsonl");
        let logger = JsonlAttemptLogger::new(&path).unwrap();

        logger.on_attempt(&GenerationAttempt::failed(Model::Gemini20Flash, 1, "HTTP 503"));
        logger.on_attempt(&GenerationAttempt::succeeded(Model::Gemini15Flash, 1));
        logger.on_exhausted(6, "Timeout");
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert!(line.get("timestamp").is_some());
        }

        assert_eq!(lines[0]["type"], "generation_attempt");
        assert_eq!(lines[0]["model"], "gemini-2.0-flash");
        assert_eq!(lines[0]["success"], false);
        assert_eq!(lines[0]["error"], "HTTP 503");

        assert_eq!(lines[1]["success"], true);
        assert!(lines[1]["error"].is_null());

        assert_eq!(lines[2]["type"], "generation_exhausted");
        assert_eq!(lines[2]["calls"], 6);
    }

    #[test]
    fn test_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("attempts.jsonl");

        for _ in 0..2 {
            let logger = JsonlAttemptLogger::new(&path).unwrap();
            logger.on_attempt(&GenerationAttempt::succeeded(Model::Gpt4oMini, 1));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }
}
