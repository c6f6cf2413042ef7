//! Progress events emitted while a project is generated.
//! The generation pipeline only produces plain data; sinks decide how it is
//! presented.

use crate::request::SourceKind;
use log::{debug, error, info, warn};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// A single observable step of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GenerationEvent {
    AcquisitionStarted { kind: SourceKind, source: String },
    BranchSelected { branch: String },
    /// One more file of a local template has been copied.
    FileCopied { copied: usize, total: usize },
    FileRewritten { path: PathBuf },
    SubstitutionFailed { path: PathBuf, reason: String },
    RollbackCompleted { path: PathBuf },
    RollbackFailed { path: PathBuf, reason: String },
}

/// Receives generation events.
pub trait EventSink {
    fn emit(&self, event: &GenerationEvent);
}

/// Forwards events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogSink;

impl LogSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogSink {
    fn emit(&self, event: &GenerationEvent) {
        match event {
            GenerationEvent::AcquisitionStarted { kind: SourceKind::Remote, source } => {
                info!("Cloning git repository from '{}'...", source)
            }
            GenerationEvent::AcquisitionStarted { kind: SourceKind::Local, source } => {
                info!("Copying local template from '{}'...", source)
            }
            GenerationEvent::BranchSelected { branch } => info!("Using branch '{}'...", branch),
            GenerationEvent::FileCopied { copied, total } => {
                info!("Copied {}/{} files", copied, total)
            }
            GenerationEvent::FileRewritten { path } => {
                debug!("Replaced template variables in '{}'", path.display())
            }
            GenerationEvent::SubstitutionFailed { path, reason } => {
                error!("Failed to replace variables in '{}': {}", path.display(), reason)
            }
            GenerationEvent::RollbackCompleted { path } => {
                warn!("Removed partially generated '{}'", path.display())
            }
            GenerationEvent::RollbackFailed { path, reason } => {
                error!("Could not remove '{}': {}", path.display(), reason)
            }
        }
    }
}

/// Writes every event as one JSON line to stderr.
#[derive(Debug, Default)]
pub struct JsonSink;

impl JsonSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for JsonSink {
    fn emit(&self, event: &GenerationEvent) {
        match serde_json::to_string(event) {
            Ok(line) => {
                let mut stderr = std::io::stderr().lock();
                if let Err(e) = writeln!(stderr, "{}", line) {
                    debug!("Failed to write event: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize event {:?}: {}", event, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GenerationEvent::FileCopied { copied: 2, total: 3 };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json, serde_json::json!({"event": "file_copied", "copied": 2, "total": 3}));

        let event = GenerationEvent::AcquisitionStarted {
            kind: SourceKind::Remote,
            source: "https://github.com/user/repo.git".to_string(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "acquisition_started");
        assert_eq!(json["kind"], "remote");
    }
}
