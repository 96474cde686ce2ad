//! Core types for taskstamp.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A task parsed from a single checkbox line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTask {
    /// 1-based line number at the time of parsing.
    pub line: usize,

    /// Task text after the checkbox, trimmed. Inline markers are kept.
    pub description: String,

    /// Whether the checkbox holds anything other than a space.
    pub done: bool,

    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,

    /// Scheduled date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled: Option<NaiveDate>,

    /// Whether the task carries a blocked or recurring marker.
    pub blocked: bool,

    /// Number of whitespace characters before the checkbox.
    pub indent: usize,
}

/// A task that passed the active query, with the note it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMatch {
    /// Absolute path of the owning note.
    pub file: PathBuf,

    /// Path of the owning note relative to the vault root.
    pub file_relative: PathBuf,

    #[serde(flatten)]
    pub task: ParsedTask,
}

impl TaskMatch {
    /// Sort key used for display grouping.
    pub fn relative_key(&self) -> String {
        self.file_relative.to_string_lossy().into_owned()
    }
}

/// A note that could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanError {
    pub path: PathBuf,
    pub message: String,
}
