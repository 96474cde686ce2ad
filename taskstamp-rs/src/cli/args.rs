//! CLI argument definitions using clap.

use crate::error::{Result, TaskError};
use crate::filter::QueryMode;
use crate::parser::parse_iso_date;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "taskstamp")]
#[command(author, version, about = "Find actionable tasks in an Obsidian-style vault", long_about = None)]
pub struct Cli {
    /// Path to the vault (overrides config file)
    #[arg(long)]
    pub vault: Option<PathBuf>,

    /// Config file to read the vault path from
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Which tasks to select
    #[arg(long, value_enum, default_value_t = QueryMode::ToProcess)]
    pub query: QueryMode,

    /// Show due and scheduled dates in listings
    #[arg(short, long)]
    pub verbose: bool,

    /// Set scheduled date on found tasks (format: YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub set_scheduled: Option<String>,

    /// Don't create backup files when updating tasks
    #[arg(long, requires = "set_scheduled")]
    pub no_backup: bool,

    /// Show what --set-scheduled would change without writing
    #[arg(long, requires = "set_scheduled")]
    pub dry_run: bool,

    /// Evaluate dates as if today were DATE (format: YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,

    /// Output as JSON
    #[arg(long, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

/// Parse a date given on the command line.
pub fn parse_date_arg(value: &str) -> Result<NaiveDate> {
    parse_iso_date(value).ok_or_else(|| TaskError::InvalidDate(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["taskstamp"]).unwrap();
        assert_eq!(cli.query, QueryMode::ToProcess);
        assert_eq!(cli.output_format(), OutputFormat::Text);
        assert!(cli.set_scheduled.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_query_all_and_format() {
        let cli = Cli::try_parse_from(["taskstamp", "--query", "all", "--yaml", "-v"]).unwrap();
        assert_eq!(cli.query, QueryMode::All);
        assert_eq!(cli.output_format(), OutputFormat::Yaml);
        assert!(cli.verbose);
    }

    #[test]
    fn test_no_backup_requires_set_scheduled() {
        assert!(Cli::try_parse_from(["taskstamp", "--no-backup"]).is_err());
        assert!(Cli::try_parse_from(["taskstamp", "--set-scheduled", "2025-02-01", "--no-backup"]).is_ok());
    }

    #[test]
    fn test_conflicting_formats() {
        assert!(Cli::try_parse_from(["taskstamp", "--json", "--toml"]).is_err());
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg("2025-02-01").unwrap(), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert!(matches!(parse_date_arg("2025/02/01"), Err(TaskError::InvalidDate(_))));
    }
}
