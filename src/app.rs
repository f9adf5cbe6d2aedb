//! The run itself: validate, extract, confirm, authenticate, submit.
//!
//! A straight line with early exits. Exit code 0 means success, dry run or
//! operator cancellation; 1 means validation, extraction or login failure.

use std::process::ExitCode;

use crate::cli::Cli;
use crate::config::Config;
use crate::confirm;
use crate::sheet;
use crate::tick::TickClient;

pub(crate) fn run(cli: &Cli, config: &Config) -> ExitCode {
    let Some(task_id) = config.task_id(&cli.project) else {
        eprintln!(
            "Unknown project \"{}\". Valid projects: {}",
            cli.project,
            config.valid_projects()
        );
        return ExitCode::from(1);
    };

    let (start, end) = match (
        sheet::parse_range_date(&cli.start_date),
        sheet::parse_range_date(&cli.end_date),
    ) {
        (Ok(start), Ok(end)) => (start, end),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    let dates = sheet::extract_dates(&cli.file, &cli.sheet, start, end);
    if dates.is_empty() {
        println!("No valid dates found in the specified date range. Exiting.");
        return ExitCode::from(1);
    }

    confirm::print_preview(&dates, &cli.project, cli.hours);

    if cli.dry_run {
        println!("Dry run: nothing was submitted.");
        return ExitCode::SUCCESS;
    }

    if !confirm::proceed() {
        println!("Operation cancelled.");
        return ExitCode::SUCCESS;
    }

    let client = TickClient::new(config.endpoints.clone());
    let session = match client.login(&cli.email, &cli.password) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error during login: {e}");
            return ExitCode::from(1);
        }
    };

    client.submit(&dates, &session, task_id, cli.hours);
    ExitCode::SUCCESS
}
