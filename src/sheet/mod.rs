//! Spreadsheet date extraction.
//!
//! Reads the `date` column of a named sheet and keeps the rows that fall
//! inside the requested range. A sheet that cannot be read is reported to
//! stderr and treated as "no dates" rather than an error; the caller decides
//! whether an empty result aborts the run.

use std::fmt;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::NaiveDate;

use crate::consts::{ENTRY_DATE_FORMAT, SHEET_DATE_FORMAT};
use crate::error::TickError;

/// A calendar date scheduled for submission.
///
/// Displays as dd/mm/yyyy (the spreadsheet and CLI format);
/// [`DateEntry::entry_format`] yields the yyyy-mm-dd form Tickspot expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateEntry(pub(crate) NaiveDate);

impl DateEntry {
    pub(crate) fn entry_format(&self) -> String {
        self.0.format(ENTRY_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for DateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SHEET_DATE_FORMAT))
    }
}

/// Parse a dd/mm/yyyy range boundary from the CLI.
pub(crate) fn parse_range_date(s: &str) -> Result<NaiveDate, TickError> {
    NaiveDate::parse_from_str(s.trim(), SHEET_DATE_FORMAT).map_err(|_| TickError::InvalidDate {
        input: s.to_string(),
    })
}

/// Extract the dates of `sheet_name` that fall inside [start, end],
/// preserving the sheet's row order. Never fails: unreadable files and
/// missing columns are reported and yield an empty list.
pub(crate) fn extract_dates(
    path: &Path,
    sheet_name: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<DateEntry> {
    match read_sheet_dates(path, sheet_name) {
        Ok(dates) => dates
            .into_iter()
            .filter(|d| start <= *d && *d <= end)
            .map(DateEntry)
            .collect(),
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

fn read_sheet_dates(path: &Path, sheet_name: &str) -> Result<Vec<NaiveDate>, calamine::Error> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook.worksheet_range(sheet_name)?;

    let mut rows = range.rows();
    let Some(date_col) = rows.next().and_then(find_date_column) else {
        eprintln!("No \"date\" column found in sheet \"{sheet_name}\"");
        return Ok(Vec::new());
    };

    Ok(rows
        .filter_map(|row| row.get(date_col).and_then(cell_date))
        .collect())
}

fn find_date_column(header: &[Data]) -> Option<usize> {
    header.iter().position(|cell| match cell {
        Data::String(s) => s.trim().eq_ignore_ascii_case("date"),
        _ => false,
    })
}

/// Dates arrive either as dd/mm/yyyy text or as native datetime cells,
/// depending on how the sheet was filled in. Anything else is missing data
/// and the row is dropped.
fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::String(s) => NaiveDate::parse_from_str(s.trim(), SHEET_DATE_FORMAT).ok(),
        Data::DateTime(dt) => dt.as_datetime().map(|dt| dt.date()),
        Data::DateTimeIso(s) => s
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, ENTRY_DATE_FORMAT).ok()),
        _ => None,
    }
}
