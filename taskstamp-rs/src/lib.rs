//! taskstamp - find actionable tasks in Obsidian-style vaults and stamp them.
//!
//! # Overview
//!
//! taskstamp reads every note in a vault, recognizes Obsidian Tasks checkbox
//! lines, and selects the ones that are ready to work on:
//! - Task line parsing (checkbox state, due/scheduled dates, blocking markers)
//! - A "to-process" selection rule set evaluated against a fixed `today`
//! - Scheduled-date stamping written back in place, with per-note backups
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use taskstamp::{collect_tasks, update_scheduled_dates, QueryMode, TaskQuery, UpdateOptions, Vault};
//!
//! let vault = Vault::new("/path/to/vault").unwrap();
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let query = TaskQuery::new(QueryMode::ToProcess, today);
//!
//! let collection = collect_tasks(&vault, &query).unwrap();
//! for m in &collection.matches {
//!     println!("{}:{} {}", m.file_relative.display(), m.task.line, m.task.description);
//! }
//!
//! let target = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
//! let report = update_scheduled_dates(&collection.matches, target, UpdateOptions::default());
//! println!("updated {}", report.total_updated);
//! ```

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod filter;
pub mod parser;
pub mod types;
pub mod updater;
pub mod vault;

// Re-export main types at crate root
pub use collector::{collect_tasks, Collection};
pub use config::Config;
pub use error::{Result, TaskError};
pub use filter::{QueryMode, TaskQuery};
pub use types::*;
pub use updater::{update_scheduled_dates, UpdateOptions, UpdateReport};
pub use vault::Vault;
