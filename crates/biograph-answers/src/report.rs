//! Structured diagnostics for one resultify call.
//!
//! Callers get back an ordered transcript plus an overall status; every
//! entry is also emitted through `tracing` at the matching level as it is
//! recorded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLevel {
    Debug,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub level: ReportLevel,
    pub message: String,
}

/// Outcome of one call: `status_code` is `"OK"` until an error is recorded,
/// after which it carries the error kind of the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub status_code: String,
    pub entries: Vec<ReportEntry>,
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

impl Report {
    pub fn new() -> Self {
        Self {
            status_code: "OK".to_string(),
            entries: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status_code == "OK"
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("{message}");
        self.entries.push(ReportEntry {
            level: ReportLevel::Debug,
            message,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{message}");
        self.entries.push(ReportEntry {
            level: ReportLevel::Info,
            message,
        });
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{message}");
        self.entries.push(ReportEntry {
            level: ReportLevel::Warning,
            message,
        });
    }

    /// Record a failure. The first recorded error fixes `status_code`.
    pub fn error(&mut self, code: &str, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{code}: {message}");
        if self.is_ok() {
            self.status_code = code.to_string();
        }
        self.entries.push(ReportEntry {
            level: ReportLevel::Error,
            message,
        });
    }

    /// Messages at `Warning` level and above, for user-visible surfacing.
    pub fn problems(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries
            .iter()
            .filter(|e| e.level >= ReportLevel::Warning)
    }
}
