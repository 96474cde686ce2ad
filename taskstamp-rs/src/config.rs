//! Configuration loading and the inline marker glyph table.

use crate::error::{Result, TaskError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Inline annotation glyphs recognized in task text.
pub mod markers {
    /// Due-date markers. Either one may precede the date.
    pub const DUE: &[&str] = &["📅", "📆"];
    /// Scheduled-date marker.
    pub const SCHEDULED: &str = "⏳";
    /// Markers that flag a task as blocked by a dependency or recurring.
    pub const BLOCKED: &[&str] = &["⛔", "🔁"];
}

/// Environment variable that can point at a config file.
pub const CONFIG_ENV_VAR: &str = "TASKSTAMP_CONFIG";

/// Application configuration loaded from `config.yaml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Vault root. Relative paths resolve against the config file's directory.
    pub vault_path: Option<PathBuf>,

    /// File this config was read from.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Default config location: `<config dir>/taskstamp/config.yaml`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("taskstamp")
            .join("config.yaml")
    }

    /// Pick the config file to read.
    ///
    /// Precedence order:
    /// 1. explicit path (`--config`)
    /// 2. `$TASKSTAMP_CONFIG`
    /// 3. [`Config::default_path`]
    pub fn locate(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
            .unwrap_or_else(Self::default_path)
    }

    /// Load configuration from the located config file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(&Self::locate(explicit))
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(TaskError::ConfigNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TaskError::ConfigError(format!("failed to read {}: {}", path.display(), e))
        })?;

        let mut config: Config = serde_yaml::from_str(&contents).map_err(|e| {
            TaskError::ConfigError(format!("failed to parse {}: {}", path.display(), e))
        })?;
        config.source = Some(path.to_path_buf());

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve `vault_path` against the config file's directory.
    pub fn resolve_vault_path(&self) -> Result<PathBuf> {
        let raw = self.vault_path.as_ref().ok_or_else(|| {
            TaskError::ConfigError("missing required key 'vault_path'".to_string())
        })?;

        let anchor = self
            .source
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));

        canonical_dir(&anchor.join(raw))
    }
}

/// Resolve the vault root, with a CLI `--vault` taking precedence over config.
pub fn resolve_vault_root(cli_vault: Option<&Path>, cli_config: Option<&Path>) -> Result<PathBuf> {
    match cli_vault {
        Some(path) => canonical_dir(path),
        None => Config::load(cli_config)?.resolve_vault_path(),
    }
}

fn canonical_dir(path: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .map_err(|_| TaskError::VaultNotFound(path.to_path_buf()))?;
    if !resolved.is_dir() {
        return Err(TaskError::VaultNotFound(resolved));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_relative_vault_path_resolves_against_config_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("notes")).unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "vault_path: notes\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        let root = config.resolve_vault_path().unwrap();

        assert_eq!(root, dir.path().join("notes").canonicalize().unwrap());
    }

    #[test]
    fn test_absolute_vault_path() {
        let dir = TempDir::new().unwrap();
        let vault = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, format!("vault_path: {}\n", vault.path().display())).unwrap();

        let root = Config::load_from(&config_path).unwrap().resolve_vault_path().unwrap();
        assert_eq!(root, vault.path().canonicalize().unwrap());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from(&dir.path().join("config.yaml"));
        assert!(matches!(result, Err(TaskError::ConfigNotFound(_))));
    }

    #[test]
    fn test_missing_vault_path_key() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "other: 1\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert!(matches!(config.resolve_vault_path(), Err(TaskError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "vault_path: [unclosed\n").unwrap();

        assert!(matches!(Config::load_from(&config_path), Err(TaskError::ConfigError(_))));
    }

    #[test]
    fn test_vault_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yaml");
        std::fs::write(&config_path, "vault_path: missing\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert!(matches!(config.resolve_vault_path(), Err(TaskError::VaultNotFound(_))));
    }

    #[test]
    fn test_cli_vault_overrides_config() {
        let vault = TempDir::new().unwrap();
        let missing_config = vault.path().join("nope.yaml");

        let root = resolve_vault_root(Some(vault.path()), Some(missing_config.as_path())).unwrap();
        assert_eq!(root, vault.path().canonicalize().unwrap());
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let explicit = PathBuf::from("/tmp/custom.yaml");
        assert_eq!(Config::locate(Some(explicit.as_path())), explicit);
    }

    #[test]
    fn test_default_path_is_in_config_dir() {
        assert!(Config::default_path().ends_with("taskstamp/config.yaml"));
    }
}
