use super::scanner::split_fields;
use crate::db::store::EntryStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date::is_db_date_syntax;

/// One decoded data line.
///
/// The timestamps are read but never written back: the store stamps
/// imported rows itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRecord {
    pub date: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

/// A data line that was not imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    /// 1-based physical line number, header included.
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub failed: usize,
    pub failures: Vec<LineFailure>,
}

impl ImportReport {
    fn fail(&mut self, line: usize, reason: String) {
        self.failed += 1;
        self.failures.push(LineFailure { line, reason });
    }

    /// "Successfully imported N entries. M entries failed to import."
    pub fn summary(&self) -> String {
        let mut s = format!("Successfully imported {} entries.", self.imported);
        if self.failed > 0 {
            s.push_str(&format!(" {} entries failed to import.", self.failed));
        }
        s
    }
}

fn unescape_newlines(s: &str) -> String {
    s.replace("\\n", "\n")
}

/// Decode one data line into a record. Extra fields past the fourth are
/// ignored; fewer than four, or a date that is not `dddd-dd-dd`, fail.
pub fn decode_line(line: &str) -> AppResult<CsvRecord> {
    let fields = split_fields(line)?;
    if fields.len() < 4 {
        return Err(AppError::Validation(format!(
            "expected 4 fields, found {}",
            fields.len()
        )));
    }

    let mut it = fields.into_iter().map(|f| unescape_newlines(&f));
    let (date, content, created_at, updated_at) = match (it.next(), it.next(), it.next(), it.next())
    {
        (Some(a), Some(b), Some(c), Some(d)) => (a, b, c, d),
        _ => return Err(AppError::Validation("expected 4 fields".into())),
    };

    if !is_db_date_syntax(&date) {
        return Err(AppError::InvalidDate(date));
    }

    Ok(CsvRecord {
        date,
        content,
        created_at,
        updated_at,
    })
}

/// Import a CSV document into `store`, line by line.
///
/// The first line is a header and is skipped unread; blank lines are
/// ignored. Each remaining line is decoded and upserted on its own: a bad
/// line (malformed, bad date, or a store failure) is counted and the next
/// line is processed. A document without any data line is rejected.
pub fn import_document<S: EntryStore + ?Sized>(doc: &str, store: &mut S) -> AppResult<ImportReport> {
    let data_lines: Vec<(usize, &str)> = doc
        .split('\n')
        .enumerate()
        .skip(1)
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .collect();

    if data_lines.is_empty() {
        return Err(AppError::Validation(
            "The CSV file appears to be empty.".into(),
        ));
    }

    let mut report = ImportReport::default();

    for (line_no, line) in data_lines {
        let record = match decode_line(line) {
            Ok(r) => r,
            Err(e) => {
                report.fail(line_no, e.to_string());
                continue;
            }
        };

        match store.save_entry(&record.date, &record.content) {
            Ok(_) => report.imported += 1,
            Err(e) => report.fail(line_no, e.to_string()),
        }
    }

    Ok(report)
}
