//! Output Rendering
//!
//! Text for the registration menu, listings, and reported errors. Every
//! function returns a `String`; printing is left to the caller.

use std::error::Error;
use std::path::Path;

use crate::domain::entities::{HasName, Record};
use crate::domain::ports::StoreError;

/// Width of the rules around a listing
pub const RULE_WIDTH: usize = 50;

pub const MENU_TITLE: &str = "---- Course Registration Program ----";

/// Menu entries, in selection order
pub const MENU_ITEMS: [&str; 4] = [
    "1. Register a Student for a Course.",
    "2. Show current data.",
    "3. Save data to a file.",
    "4. Exit the program.",
];

pub const INVALID_CHOICE: &str = "Please enter an option between 1 and 4";

pub const PROGRAM_ENDED: &str = "Program Ended";

/// The full text menu
pub fn render_menu() -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(MENU_TITLE);
    out.push_str("\n  Select from the following menu:\n");
    for item in MENU_ITEMS {
        out.push_str("    ");
        out.push_str(item);
        out.push('\n');
    }
    out.push_str(&"-".repeat(41));
    out.push('\n');
    out
}

/// One `describe()` line per record
pub fn render_records(records: &[Record]) -> String {
    records
        .iter()
        .map(|r| format!("{}\n", r.describe()))
        .collect()
}

/// Records framed by dashed rules
pub fn render_listing(records: &[Record]) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    format!("{rule}\n{}{rule}\n", render_records(records))
}

/// A message followed by the technical detail of `error`, if any
pub fn render_error(message: &str, error: Option<&dyn Error>) -> String {
    let mut out = format!("{message}\n\n");
    if let Some(error) = error {
        out.push_str("-- Technical Error Message --\n");
        out.push_str(&error.to_string());
        out.push('\n');
        let mut source = error.source();
        while let Some(cause) = source {
            out.push_str(&format!("caused by: {cause}\n"));
            source = cause.source();
        }
    }
    out
}

/// What to tell the user about a load that did not simply succeed
pub fn render_load_notice(notice: &StoreError) -> String {
    match notice {
        StoreError::NotFound { .. } => {
            let mut out = render_error("Enrollment file not found", Some(notice));
            out.push_str(&render_error("Creating file since it doesn't exist", None));
            out
        }
        StoreError::Parse { .. } => render_error(
            "Error: The enrollment file could not be read; starting with no entries.",
            Some(notice),
        ),
        _ => render_error(
            "Error: There was a problem with reading the file.",
            Some(notice),
        ),
    }
}

/// What to tell the user about a failed save
pub fn render_save_error(error: &StoreError) -> String {
    match error {
        StoreError::Serialization { .. } => render_error(
            "Please check that the data is a valid JSON format",
            Some(error),
        ),
        _ => render_error("There was a non-specific error!", Some(error)),
    }
}

pub fn render_saved(path: &Path) -> String {
    format!(
        "All entries have been saved to the file '{}'.\n",
        path.display()
    )
}

pub fn render_registered(record: &Record) -> String {
    format!(
        "\nYou have registered {} for {}.\n",
        record.display_name(),
        record.course_name()
    )
}
