//! Scan a vault, parse every note and keep the tasks a query selects.

use crate::error::{Result, TaskError};
use crate::filter::TaskQuery;
use crate::parser::parse_tasks;
use crate::types::{ScanError, TaskMatch};
use crate::vault::Vault;
use serde::Serialize;
use std::path::Path;

/// Result of a vault scan.
#[derive(Debug, Default, Serialize)]
pub struct Collection {
    /// Selected tasks, sorted by relative path descending.
    pub matches: Vec<TaskMatch>,
    /// Notes that could not be read.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ScanError>,
}

/// Collect tasks selected by `query` from every note in the vault.
///
/// A note that cannot be read is recorded in [`Collection::errors`] and the
/// scan moves on.
pub fn collect_tasks(vault: &Vault, query: &TaskQuery) -> Result<Collection> {
    let mut collection = Collection::default();

    for relative in vault.list_notes()? {
        let file = vault.note_path(&relative);
        log::debug!("scanning {}", relative.display());

        let content = match read_note(&file) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("{}", e);
                collection.errors.push(ScanError {
                    path: file,
                    message: e.to_string(),
                });
                continue;
            }
        };

        for task in parse_tasks(&content) {
            if query.matches(&task, &relative) {
                collection.matches.push(TaskMatch {
                    file: file.clone(),
                    file_relative: relative.clone(),
                    task,
                });
            }
        }
    }

    sort_matches(&mut collection.matches);
    Ok(collection)
}

/// Order matches by relative path, descending. Ties keep scan order.
pub fn sort_matches(matches: &mut [TaskMatch]) {
    matches.sort_by(|a, b| b.relative_key().cmp(&a.relative_key()));
}

fn read_note(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| TaskError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
