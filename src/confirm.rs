//! Pre-flight preview and confirmation.
//!
//! The prompt is the only cancellation point in the run: nothing touches the
//! network until the operator has seen the full date list and answered "yes".

use std::io::{self, BufRead, Write};

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::sheet::DateEntry;

pub(crate) fn print_preview(dates: &[DateEntry], project: &str, hours: f64) {
    println!("Loading {hours} hours per day for the {project} project.");
    println!("The following dates will be processed:");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Submits as"]);
    for date in dates {
        table.add_row(vec![date.to_string(), date.entry_format()]);
    }
    println!("{table}");
}

/// One yes/no line from stdin. Anything but a case-insensitive "yes"
/// (including EOF) cancels.
pub(crate) fn proceed() -> bool {
    print!("Do you want to proceed? (yes/no): ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    is_affirmative(&answer)
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
