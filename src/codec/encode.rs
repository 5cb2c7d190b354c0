use super::CSV_HEADER;
use crate::errors::{AppError, AppResult};
use crate::models::entry::GratitudeEntry;
use csv::{QuoteStyle, Terminator, WriterBuilder};

/// Replace real line breaks with the literal two-character `\n`.
pub fn escape_content(content: &str) -> String {
    content.replace("\r\n", "\n").replace('\n', "\\n")
}

/// Serialize entries in the order given, header first.
pub fn encode_entries(entries: &[GratitudeEntry]) -> AppResult<String> {
    let mut buf = Vec::with_capacity(64 * (entries.len() + 1));
    buf.extend_from_slice(CSV_HEADER.as_bytes());
    buf.push(b'\n');

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(buf);

    for e in entries {
        wtr.write_record([
            e.date.as_str(),
            escape_content(&e.content).as_str(),
            e.created_at.as_str(),
            e.updated_at.as_str(),
        ])?;
    }

    let bytes = wtr.into_inner().map_err(|e| AppError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Other(e.to_string()))
}
