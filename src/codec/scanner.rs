use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the first character of a field.
    FieldStart,
    /// Inside a field that did not open with a quote.
    Unquoted,
    /// Inside a quoted field.
    Quoted,
    /// Just saw a `"` inside a quoted field: either the closing quote or
    /// the first half of a doubled `""`.
    QuoteInQuoted,
}

/// Split one physical line into fields.
///
/// Quoted fields lose their surrounding quotes and have `""` collapsed to
/// `"`; commas only separate fields outside quotes. Unquoted fields are
/// taken verbatim. An unterminated quote or text after a closing quote is
/// a malformed line.
pub fn split_fields(line: &str) -> AppResult<Vec<String>> {
    let mut fields = Vec::new();
    let mut cur = String::new();
    let mut state = State::FieldStart;

    for ch in line.chars() {
        state = match (state, ch) {
            (State::FieldStart, '"') => State::Quoted,
            (State::FieldStart, ',') | (State::Unquoted, ',') => {
                fields.push(std::mem::take(&mut cur));
                State::FieldStart
            }
            (State::FieldStart, c) | (State::Unquoted, c) => {
                cur.push(c);
                State::Unquoted
            }
            (State::Quoted, '"') => State::QuoteInQuoted,
            (State::Quoted, c) => {
                cur.push(c);
                State::Quoted
            }
            (State::QuoteInQuoted, '"') => {
                cur.push('"');
                State::Quoted
            }
            (State::QuoteInQuoted, ',') => {
                fields.push(std::mem::take(&mut cur));
                State::FieldStart
            }
            (State::QuoteInQuoted, c) => {
                return Err(AppError::Validation(format!(
                    "unexpected '{}' after closing quote in field {}",
                    c,
                    fields.len() + 1
                )));
            }
        };
    }

    if state == State::Quoted {
        return Err(AppError::Validation(format!(
            "unterminated quoted field {}",
            fields.len() + 1
        )));
    }

    fields.push(cur);
    Ok(fields)
}
