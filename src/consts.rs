/// Date format used in the spreadsheet and on the CLI: "01/03/2024"
pub(crate) const SHEET_DATE_FORMAT: &str = "%d/%m/%Y";

/// Date format Tickspot expects in entry payloads: "2024-03-01"
pub(crate) const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Tickspot sign-in page
pub(crate) const DEFAULT_LOGIN_URL: &str = "https://secure.tickspot.com/login";

/// Timecard entry creation endpoint
pub(crate) const DEFAULT_ENTRIES_URL: &str =
    "https://intermedia1.tickspot.com/timecard/entries";
