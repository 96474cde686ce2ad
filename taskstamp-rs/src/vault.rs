//! Vault representation and note enumeration.

use crate::error::{Result, TaskError};
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

/// Private metadata directory that is never scanned.
pub const METADATA_DIR: &str = ".obsidian";

/// Represents an Obsidian vault.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

impl Vault {
    /// Create a new vault instance.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            return Err(TaskError::VaultNotFound(root));
        }

        Ok(Self { root })
    }

    /// Get the full path to a note.
    pub fn note_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// List all markdown files in the vault, skipping the metadata directory.
    ///
    /// Paths are relative to the root and sorted, so traversal order is
    /// the same on every run.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let pattern = Path::new(&Pattern::escape(&self.root.to_string_lossy())).join("**/*.md");
        let pattern_str = pattern.to_string_lossy();

        let mut notes = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if !path.is_file() {
                        continue;
                    }
                    if let Ok(relative) = path.strip_prefix(&self.root) {
                        if !is_in_metadata_dir(relative) {
                            notes.push(relative.to_path_buf());
                        }
                    }
                }
                Err(e) => {
                    log::warn!("glob error: {}", e);
                }
            }
        }

        notes.sort();

        Ok(notes)
    }
}

/// Whether any component of `path` is the metadata directory.
pub fn is_in_metadata_dir(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == METADATA_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_vault() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        let vault = Vault::new(dir.path()).unwrap();
        (dir, vault)
    }

    fn write(vault: &Vault, relative: &str, content: &str) {
        let path = vault.note_path(Path::new(relative));
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_missing_root_fails() {
        let dir = TempDir::new().unwrap();
        let result = Vault::new(dir.path().join("missing"));
        assert!(matches!(result, Err(TaskError::VaultNotFound(_))));
    }

    #[test]
    fn test_list_notes_sorted_and_recursive() {
        let (_dir, vault) = setup_test_vault();
        write(&vault, "b.md", "B");
        write(&vault, "a.md", "A");
        write(&vault, "sub/deeper/c.md", "C");

        let notes = vault.list_notes().unwrap();
        assert_eq!(
            notes,
            vec![
                PathBuf::from("a.md"),
                PathBuf::from("b.md"),
                PathBuf::from("sub/deeper/c.md"),
            ]
        );
    }

    #[test]
    fn test_list_notes_skips_metadata_dir_and_other_files() {
        let (_dir, vault) = setup_test_vault();
        write(&vault, "note.md", "");
        write(&vault, ".obsidian/plugins/readme.md", "");
        write(&vault, "note.md.bak", "");
        write(&vault, "image.png", "");

        let notes = vault.list_notes().unwrap();
        assert_eq!(notes, vec![PathBuf::from("note.md")]);
    }

    #[test]
    fn test_list_notes_with_glob_chars_in_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("vault [main]");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(root.join("x.md"), "").unwrap();

        let vault = Vault::new(&root).unwrap();
        assert_eq!(vault.list_notes().unwrap(), vec![PathBuf::from("x.md")]);
    }

    #[test]
    fn test_is_in_metadata_dir() {
        assert!(is_in_metadata_dir(Path::new(".obsidian/workspace.md")));
        assert!(is_in_metadata_dir(Path::new("a/.obsidian/b.md")));
        assert!(!is_in_metadata_dir(Path::new("a/obsidian/b.md")));
    }
}
