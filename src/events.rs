//! Append-only audit log of generation runs.
//!
//! When `events_log` is configured (or `--events-log` is given), each run
//! appends NDJSON records (one JSON object per line) to that file:
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `generate_start`, `section_resolved`, `section_failed`, `document_written`
//! - `actor`: `user@HOST`
//! - `section`: section name for per-section events
//! - `details`: action-specific fields
//!
//! ```json
//! {"ts":"2026-10-16T09:12:03Z","action":"section_resolved","actor":"asha@lab-pc","section":"Theory","details":{"source":"generated","elapsed_ms":812}}
//! ```

use crate::error::{PracfileError, Result};
use crate::report::Section;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Actions recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A run started; details carry the request summary and model.
    GenerateStart,
    /// A section's text was settled (generated, override, empty or skipped).
    SectionResolved,
    /// A section's service call failed.
    SectionFailed,
    /// The document was written.
    DocumentWritten,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventAction::GenerateStart => "generate_start",
            EventAction::SectionResolved => "section_resolved",
            EventAction::SectionFailed => "section_failed",
            EventAction::DocumentWritten => "document_written",
        };
        f.write_str(name)
    }
}

/// One audit log record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,

    pub action: EventAction,

    /// Who ran the command (`user@HOST`).
    pub actor: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,

    pub details: Value,
}

impl Event {
    /// New event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            section: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.section = Some(section);
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            PracfileError::OutputError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append `events` to the log at `path`, creating the file and its parent
/// directory as needed.
pub fn append_events(path: &Path, events: &[Event]) -> Result<()> {
    if events.is_empty() {
        return Ok(());
    }

    let mut lines = String::new();
    for event in events {
        lines.push_str(&event.to_ndjson_line()?);
        lines.push('\n');
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PracfileError::OutputError(format!(
                "failed to create events directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            PracfileError::OutputError(format!(
                "failed to open events file '{}': {}",
                path.display(),
                e
            ))
        })?;

    file.write_all(lines.as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            PracfileError::OutputError(format!(
                "failed to write events to '{}': {}",
                path.display(),
                e
            ))
        })?;

    for event in events {
        tracing::debug!(action = %event.action, path = %path.display(), "event recorded");
    }
    Ok(())
}
