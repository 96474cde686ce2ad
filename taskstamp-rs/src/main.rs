//! taskstamp CLI entry point.

use chrono::Local;
use clap::Parser;
use std::process::ExitCode;
use taskstamp::cli::args::{parse_date_arg, Cli};
use taskstamp::cli::output::Output;
use taskstamp::cli::tasks;
use taskstamp::collector::collect_tasks;
use taskstamp::config::resolve_vault_root;
use taskstamp::error::{ExitCode as TaskExitCode, TaskError};
use taskstamp::filter::{QueryMode, TaskQuery};
use taskstamp::updater::UpdateOptions;
use taskstamp::vault::Vault;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = if cli.quiet { "error" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code.code() as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<TaskExitCode, TaskError> {
    // Validate dates before touching the vault
    let today = match cli.today.as_deref() {
        Some(value) => parse_date_arg(value)?,
        None => Local::now().date_naive(),
    };
    let stamp_date = cli.set_scheduled.as_deref().map(parse_date_arg).transpose()?;

    if stamp_date.is_some() && cli.query == QueryMode::All {
        return Err(TaskError::InvalidArgument(
            "--set-scheduled can only be used with --query to-process".to_string(),
        ));
    }

    let root = resolve_vault_root(cli.vault.as_deref(), cli.config.as_deref())?;
    let vault = Vault::new(root)?;
    log::debug!("vault root: {}", vault.root.display());

    let output = Output::new(cli.output_format());
    let query = TaskQuery::new(cli.query, today);
    let collection = collect_tasks(&vault, &query)?;

    match stamp_date {
        Some(date) => {
            let options = UpdateOptions {
                backup: !cli.no_backup,
                dry_run: cli.dry_run,
            };
            tasks::stamp_tasks(&collection, date, options, &output)
        }
        None => tasks::list_tasks(&collection, &query, cli.verbose, &output),
    }
}
