//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "tickload")]
#[command(
    about = "Bulk-submit daily Tickspot timecard entries from a spreadsheet",
    version
)]
pub(crate) struct Cli {
    /// Project code to book time against
    #[arg(long, default_value = "MTK")]
    pub(crate) project: String,

    /// Hours to load per day
    #[arg(long, default_value_t = 8.0, value_name = "HOURS")]
    pub(crate) hours: f64,

    /// Email used to sign in to Tickspot
    #[arg(long)]
    pub(crate) email: String,

    /// Password used to sign in to Tickspot
    #[arg(long)]
    pub(crate) password: String,

    /// Path to the spreadsheet containing the dates (xlsx/xls/ods)
    #[arg(long)]
    pub(crate) file: PathBuf,

    /// Sheet name representing the person
    #[arg(long)]
    pub(crate) sheet: String,

    /// Start of the date range, dd/mm/yyyy (inclusive)
    #[arg(long = "start_date", alias = "start-date", value_name = "DATE")]
    pub(crate) start_date: String,

    /// End of the date range, dd/mm/yyyy (inclusive)
    #[arg(long = "end_date", alias = "end-date", value_name = "DATE")]
    pub(crate) end_date: String,

    /// Preview the dates without logging in or submitting anything
    #[arg(long)]
    pub(crate) dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    const REQUIRED: &[&str] = &[
        "tickload",
        "--email",
        "me@example.com",
        "--password",
        "hunter2",
        "--file",
        "hours.xlsx",
        "--sheet",
        "Alice",
        "--start_date",
        "01/03/2024",
        "--end_date",
        "31/03/2024",
    ];

    #[test]
    fn cli_debug_assert() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(REQUIRED);
        assert_eq!(cli.project, "MTK");
        assert_eq!(cli.hours, 8.0);
        assert!(!cli.dry_run);
    }

    #[test]
    fn date_flags_accept_hyphen_aliases() {
        let mut args: Vec<&str> = REQUIRED.to_vec();
        args[9] = "--start-date";
        args[11] = "--end-date";
        let cli = parse(&args);
        assert_eq!(cli.start_date, "01/03/2024");
        assert_eq!(cli.end_date, "31/03/2024");
    }

    #[test]
    fn email_is_required() {
        let args: Vec<&str> = REQUIRED
            .iter()
            .copied()
            .filter(|a| !matches!(*a, "--email" | "me@example.com"))
            .collect();
        assert!(Cli::try_parse_from(args).is_err());
    }
}
