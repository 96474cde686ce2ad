//! Task line recognition and scheduled-date rewriting.

use crate::config::markers;
use crate::types::ParsedTask;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Date format used in task annotations and on the command line.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Regex for parsing task lines.
/// Matches: optional indent, "- [status]", whitespace, then the rest.
static TASK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)- \[(.)\]\s+(.*)$").unwrap()
});

/// Regex splitting a task line into its checkbox prefix and description.
static TASK_PREFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*- \[.\]\s+)(.*)$").unwrap()
});

/// Strict ISO date (YYYY-MM-DD).
static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap()
});

static DUE_REGEX: LazyLock<Regex> = LazyLock::new(|| marker_date_regex(markers::DUE));

static SCHEDULED_REGEX: LazyLock<Regex> = LazyLock::new(|| marker_date_regex(&[markers::SCHEDULED]));

/// Build a regex matching any of `glyphs`, optional whitespace, and a date-shaped token.
fn marker_date_regex(glyphs: &[&str]) -> Regex {
    let alternatives = glyphs
        .iter()
        .map(|g| regex::escape(g))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?:{})\s*(\d{{4}}-\d{{2}}-\d{{2}})", alternatives)).unwrap()
}

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    if !ISO_DATE_REGEX.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Split a line into its body and its terminator (`"\r\n"`, `"\n"` or `""`).
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Split content into lines, each keeping its terminator.
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// Parse all tasks from content.
pub fn parse_tasks(content: &str) -> Vec<ParsedTask> {
    split_lines(content)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| recognize(line, idx + 1))
        .collect()
}

/// Recognize a single task line. Anything without checkbox syntax yields `None`.
pub fn recognize(line: &str, line_num: usize) -> Option<ParsedTask> {
    let (body, _) = split_line_ending(line);
    let caps = TASK_REGEX.captures(body)?;

    let indent = caps.get(1).map_or(0, |m| m.as_str().chars().count());
    let status = caps.get(2).map_or(" ", |m| m.as_str());
    let rest = caps.get(3).map_or("", |m| m.as_str());

    Some(ParsedTask {
        line: line_num,
        description: rest.trim().to_string(),
        done: status.to_lowercase() != " ",
        due: marker_date(&DUE_REGEX, rest),
        scheduled: marker_date(&SCHEDULED_REGEX, rest),
        blocked: markers::BLOCKED.iter().any(|m| rest.contains(m)),
        indent,
    })
}

/// Date following the first marker occurrence, if it is a real date.
fn marker_date(regex: &Regex, text: &str) -> Option<NaiveDate> {
    let caps = regex.captures(text)?;
    parse_iso_date(caps.get(1)?.as_str())
}

/// Split a task line body into checkbox prefix and description.
pub fn split_task_prefix(body: &str) -> Option<(&str, &str)> {
    let caps = TASK_PREFIX_REGEX.captures(body)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Add or replace the scheduled date in a task description.
///
/// Every existing scheduled marker is removed and exactly one is appended.
pub fn set_scheduled_date(description: &str, date: &str) -> String {
    let stripped = SCHEDULED_REGEX.replace_all(description, "");
    format!("{} {} {}", stripped.trim(), markers::SCHEDULED, date)
}
