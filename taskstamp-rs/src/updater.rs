//! Write scheduled-date stamps back into notes.
//!
//! Each note is handled on its own: read, optional backup, edit in memory,
//! one write. A failure in one note is recorded and the next note is tried.
//! Notes already written stay written.

use crate::error::{Result, TaskError};
use crate::parser::{set_scheduled_date, split_line_ending, split_lines, split_task_prefix, DATE_FORMAT};
use crate::types::TaskMatch;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to a note's file name for its backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Options for [`update_scheduled_dates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Copy each note to `<name>.bak` before changing it.
    pub backup: bool,
    /// Compute changes without touching the filesystem.
    pub dry_run: bool,
}

impl Default for UpdateOptions {
    fn default() -> Self {
        Self {
            backup: true,
            dry_run: false,
        }
    }
}

/// One rewritten line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineChange {
    pub line: usize,
    pub before: String,
    pub after: String,
}

/// Outcome for a single note.
#[derive(Debug, Clone, Serialize)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub file_relative: PathBuf,
    /// Number of matches that pointed into this note.
    pub requested: usize,
    /// Number of lines actually rewritten.
    pub updated: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    /// Rewritten lines, only filled in for dry runs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<LineChange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a stamping run.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateReport {
    pub scheduled: String,
    pub dry_run: bool,
    pub total_updated: usize,
    pub files: Vec<FileUpdate>,
}

impl UpdateReport {
    /// Whether any note failed.
    pub fn has_errors(&self) -> bool {
        self.files.iter().any(|f| f.error.is_some())
    }
}

/// Backup location for a note: the same path with [`BACKUP_SUFFIX`] appended.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Group matches by owning note, notes in first-seen order.
pub fn group_by_file(matches: &[TaskMatch]) -> Vec<(&Path, Vec<&TaskMatch>)> {
    let mut index: HashMap<&Path, usize> = HashMap::new();
    let mut groups: Vec<(&Path, Vec<&TaskMatch>)> = Vec::new();

    for m in matches {
        let path = m.file.as_path();
        match index.get(path) {
            Some(&i) => groups[i].1.push(m),
            None => {
                index.insert(path, groups.len());
                groups.push((path, vec![m]));
            }
        }
    }

    groups
}

/// Set the scheduled date of every matched task to `date`.
pub fn update_scheduled_dates(matches: &[TaskMatch], date: NaiveDate, options: UpdateOptions) -> UpdateReport {
    let date_str = date.format(DATE_FORMAT).to_string();
    let mut report = UpdateReport {
        scheduled: date_str.clone(),
        dry_run: options.dry_run,
        total_updated: 0,
        files: Vec::new(),
    };

    for (path, file_matches) in group_by_file(matches) {
        let mut outcome = FileUpdate {
            path: path.to_path_buf(),
            file_relative: file_matches[0].file_relative.clone(),
            requested: file_matches.len(),
            updated: 0,
            backup: None,
            changes: Vec::new(),
            error: None,
        };

        match update_file(path, &file_matches, &date_str, options, &mut outcome) {
            Ok(()) => {
                log::info!("updated {} task(s) in {}", outcome.updated, outcome.file_relative.display());
            }
            Err(e) => {
                log::warn!("{}", e);
                outcome.error = Some(e.to_string());
            }
        }

        report.total_updated += outcome.updated;
        report.files.push(outcome);
    }

    report
}

fn update_file(
    path: &Path,
    matches: &[&TaskMatch],
    date: &str,
    options: UpdateOptions,
    outcome: &mut FileUpdate,
) -> Result<()> {
    let bytes = std::fs::read(path).map_err(|e| read_error(path, e.to_string()))?;
    let content = std::str::from_utf8(&bytes).map_err(|e| read_error(path, e.to_string()))?;

    if options.backup && !options.dry_run {
        let backup = backup_path(path);
        std::fs::write(&backup, &bytes).map_err(|e| write_error(&backup, e))?;
        outcome.backup = Some(backup);
    }

    let mut lines: Vec<String> = split_lines(content).into_iter().map(str::to_string).collect();

    // Bottom-up, so earlier line numbers in this note stay valid
    let mut ordered = matches.to_vec();
    ordered.sort_by(|a, b| b.task.line.cmp(&a.task.line));

    let mut changes = Vec::new();
    for m in ordered {
        let line_num = m.task.line;
        let Some(idx) = line_num.checked_sub(1).filter(|&i| i < lines.len()) else {
            log::warn!("{}:{} no longer exists, skipping", path.display(), line_num);
            continue;
        };

        let Some(new_line) = rewrite_line(&lines[idx], date) else {
            log::warn!("{}:{} is no longer a task, skipping", path.display(), line_num);
            continue;
        };

        changes.push(LineChange {
            line: line_num,
            before: split_line_ending(&lines[idx]).0.to_string(),
            after: split_line_ending(&new_line).0.to_string(),
        });
        lines[idx] = new_line;
    }

    if !changes.is_empty() && !options.dry_run {
        std::fs::write(path, lines.concat()).map_err(|e| write_error(path, e))?;
    }

    outcome.updated = changes.len();
    if options.dry_run {
        changes.reverse();
        outcome.changes = changes;
    }

    Ok(())
}

/// Stamp one line, re-read from the note, keeping its prefix and terminator.
fn rewrite_line(line: &str, date: &str) -> Option<String> {
    let (body, ending) = split_line_ending(line);
    let (prefix, description) = split_task_prefix(body)?;
    Some(format!("{}{}{}", prefix, set_scheduled_date(description.trim_end(), date), ending))
}

fn read_error(path: &Path, message: String) -> TaskError {
    TaskError::FileRead {
        path: path.to_path_buf(),
        message,
    }
}

fn write_error(path: &Path, e: std::io::Error) -> TaskError {
    TaskError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}
