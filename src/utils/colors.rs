/// ANSI color helper utilities for terminal output.
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colors are dropped when `NO_COLOR` is set (https://no-color.org).
pub fn enabled() -> bool {
    static COLORED: OnceLock<bool> = OnceLock::new();
    *COLORED.get_or_init(|| std::env::var_os("NO_COLOR").is_none())
}

/// `code` when colors are on, empty otherwise.
pub fn code(code: &'static str) -> &'static str {
    if enabled() { code } else { "" }
}

/// Grey for entries whose date key is not a real calendar date
/// (possible after an import), reset otherwise.
pub fn color_for_date_key(valid: bool) -> &'static str {
    if valid { RESET } else { GREY }
}
