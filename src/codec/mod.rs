//! CSV exchange format for journal entries.
//!
//! ```text
//! date,content,created_at,updated_at
//! "YYYY-MM-DD","escaped content","ISO-8601","ISO-8601"
//! ```
//!
//! Every field is quoted, inner quotes are doubled and line breaks in the
//! content become the two characters `\n`, so one record is one line.

mod decode;
mod encode;
mod scanner;

pub use decode::{CsvRecord, ImportReport, LineFailure, decode_line, import_document};
pub use encode::{encode_entries, escape_content};
pub use scanner::split_fields;

use chrono::{DateTime, SecondsFormat, Utc};

pub const CSV_HEADER: &str = "date,content,created_at,updated_at";

/// `gratitude-export-<timestamp>.csv`, with `:` and `.` of the ISO instant
/// replaced by `-` so the name is valid on every filesystem.
pub fn export_filename(now: DateTime<Utc>) -> String {
    let ts = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("gratitude-export-{ts}.csv")
}
