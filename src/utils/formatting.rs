//! Formatting utilities used for CLI outputs.

use crate::utils::colors;
use regex::Regex;
use std::sync::OnceLock;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn bold(s: &str) -> String {
    styled("\x1b[1m", s)
}

pub fn italic(s: &str) -> String {
    styled("\x1b[3m", s)
}

fn styled(on: &str, s: &str) -> String {
    if colors::enabled() {
        format!("{}{}\x1b[0m", on, s)
    } else {
        s.to_string()
    }
}

pub fn strip_ansi(s: &str) -> String {
    static ANSI: OnceLock<Regex> = OnceLock::new();
    ANSI.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ansi regex"))
        .replace_all(s, "")
        .into_owned()
}

/// Terminal width of `s`, ignoring ANSI escapes.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad with spaces up to `width` terminal columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Cut `s` to at most `width` columns, marking the cut with `…`.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
