//! Parsers for Obsidian Tasks line syntax.

pub mod task;

pub use task::{
    parse_iso_date, parse_tasks, recognize, set_scheduled_date, split_line_ending, split_lines,
    split_task_prefix, DATE_FORMAT,
};
