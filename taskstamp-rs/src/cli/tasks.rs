//! Task listing and stamping commands.

use crate::cli::output::Output;
use crate::collector::Collection;
use crate::error::{ExitCode, Result};
use crate::filter::{QueryMode, TaskQuery};
use crate::parser::DATE_FORMAT;
use crate::types::{ScanError, TaskMatch};
use crate::updater::{update_scheduled_dates, UpdateOptions, UpdateReport, BACKUP_SUFFIX};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write as _;

/// Structured output for a listing.
#[derive(Debug, Serialize)]
pub struct TasksOutput<'a> {
    pub query: QueryMode,
    pub today: String,
    pub total: usize,
    pub tasks: &'a [TaskMatch],
    #[serde(skip_serializing_if = "is_empty")]
    pub errors: &'a [ScanError],
}

fn is_empty(errors: &&[ScanError]) -> bool {
    errors.is_empty()
}

/// Print the matched tasks grouped by note.
pub fn list_tasks(collection: &Collection, query: &TaskQuery, verbose: bool, output: &Output) -> Result<ExitCode> {
    if output.is_text() {
        output.print_raw(&format!(
            "{}{}",
            render_scan_errors(&collection.errors),
            render_listing(&collection.matches, verbose)
        ));
    } else {
        output.print(&TasksOutput {
            query: query.mode,
            today: query.today.format(DATE_FORMAT).to_string(),
            total: collection.matches.len(),
            tasks: &collection.matches,
            errors: &collection.errors,
        })?;
    }

    Ok(scan_exit_code(collection))
}

/// Stamp every matched task with `date` and print a summary.
pub fn stamp_tasks(
    collection: &Collection,
    date: NaiveDate,
    options: UpdateOptions,
    output: &Output,
) -> Result<ExitCode> {
    let report = update_scheduled_dates(&collection.matches, date, options);

    if output.is_text() {
        output.print_raw(&format!(
            "{}{}",
            render_scan_errors(&collection.errors),
            render_update_report(&report, collection.matches.len(), options)
        ));
    } else {
        output.print(&report)?;
    }

    if report.has_errors() {
        Ok(ExitCode::PartialFailure)
    } else {
        Ok(scan_exit_code(collection))
    }
}

/// One `Error reading` line per note the scan could not read.
pub fn render_scan_errors(errors: &[ScanError]) -> String {
    let mut text = String::new();
    for error in errors {
        let _ = writeln!(text, "Error reading {}: {}", error.path.display(), error.message);
    }
    text
}

/// Render a listing in the text format.
pub fn render_listing(matches: &[TaskMatch], verbose: bool) -> String {
    let mut text = format!("Found {} tasks:\n", matches.len());
    let mut current_file = None;

    for m in matches {
        if current_file != Some(&m.file_relative) {
            current_file = Some(&m.file_relative);
            let _ = write!(text, "\n{}:\n", m.file_relative.display());
        }

        let _ = write!(text, "  Line {}: {}", m.task.line, m.task.description);
        if verbose {
            if let Some(due) = m.task.due {
                let _ = write!(text, " [Due: {}]", due.format(DATE_FORMAT));
            }
            if let Some(scheduled) = m.task.scheduled {
                let _ = write!(text, " [Scheduled: {}]", scheduled.format(DATE_FORMAT));
            }
        }
        text.push('\n');
    }

    text.trim_end().to_string()
}

/// Render a stamping summary in the text format.
pub fn render_update_report(report: &UpdateReport, found: usize, options: UpdateOptions) -> String {
    let mut text = format!("Found {} tasks:\n\n", found);
    let _ = writeln!(text, "Setting scheduled date to {} for {} tasks...\n", report.scheduled, found);

    for file in &report.files {
        let relative = file.file_relative.display();
        if let Some(ref error) = file.error {
            let _ = writeln!(text, "Error updating {}: {}", relative, error);
        } else if options.dry_run {
            let _ = writeln!(text, "Would update {} task(s) in {}", file.updated, relative);
            for change in &file.changes {
                let _ = writeln!(text, "  Line {}: {} -> {}", change.line, change.before, change.after);
            }
        } else {
            let _ = writeln!(text, "Updated {} task(s) in {}", file.updated, relative);
        }
    }

    if options.dry_run {
        let _ = write!(text, "\nDry run: {} tasks would be updated", report.total_updated);
    } else {
        let _ = write!(text, "\nSuccessfully updated {} tasks!", report.total_updated);
        if options.backup {
            let _ = write!(text, "\nBackup files created with {} extension", BACKUP_SUFFIX);
        }
    }

    text
}

fn scan_exit_code(collection: &Collection) -> ExitCode {
    if collection.errors.is_empty() {
        ExitCode::Success
    } else {
        ExitCode::PartialFailure
    }
}
