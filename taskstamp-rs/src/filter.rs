//! Task selection rules.

use crate::types::ParsedTask;
use chrono::NaiveDate;
use clap::ValueEnum;
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;

/// Context tags that mark a task as belonging to a specific list already.
pub const EXCLUDED_TAGS: &[&str] = &[
    "@pc",
    "@work",
    "@home",
    "@sharne",
    "@out",
    "@garden",
    "@someday",
    "@ai",
    "@ponderables",
    "@stuck",
];

/// Directory names whose notes never contribute to-process tasks.
pub const EXCLUDED_PATHS: &[&str] = &["Checklist", "Templates", "Recurring", "obsidian-tasks"];

/// Calendar entries such as "09:00 - 10:30 Standup".
static TIME_RANGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{2}:\d{2}\s*-\s*\d{2}:\d{2}").unwrap()
});

/// Which tasks a query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryMode {
    /// Actionable, unblocked, incomplete tasks that are not yet due or scheduled.
    #[default]
    ToProcess,
    /// Every incomplete task.
    All,
}

/// A query evaluated against parsed tasks.
///
/// `today` is captured once per run and reused for every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskQuery {
    pub mode: QueryMode,
    pub today: NaiveDate,
}

impl TaskQuery {
    pub fn new(mode: QueryMode, today: NaiveDate) -> Self {
        Self { mode, today }
    }

    /// Whether `task`, found in the note at `relative_path`, is selected.
    ///
    /// The excluded-directory rule only sees the vault-relative path, so the
    /// directories the vault itself lives in never exclude anything.
    pub fn matches(&self, task: &ParsedTask, relative_path: &Path) -> bool {
        match self.mode {
            QueryMode::ToProcess => self.is_to_process(task, relative_path),
            QueryMode::All => !task.done,
        }
    }

    fn is_to_process(&self, task: &ParsedTask, relative_path: &Path) -> bool {
        let desc = task.description.as_str();

        if EXCLUDED_TAGS.iter().any(|tag| desc.contains(tag)) {
            return false;
        }

        if TIME_RANGE_REGEX.is_match(desc) {
            return false;
        }

        if desc.trim().is_empty() {
            return false;
        }

        let path_str = relative_path.to_string_lossy();
        if EXCLUDED_PATHS.iter().any(|p| path_str.contains(p)) {
            return false;
        }

        // Dates on or after today mean the task is not ready yet
        if task.due.is_some_and(|due| due >= self.today) {
            return false;
        }
        if task.scheduled.is_some_and(|scheduled| scheduled >= self.today) {
            return false;
        }

        !task.blocked && !task.done
    }
}
