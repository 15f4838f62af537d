//! Formatting utilities used for CLI and export outputs.

use textwrap::Options;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to `width` display columns, ignoring ANSI sequences.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = super::colors::strip_ansi(s).width();
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let visible = super::colors::strip_ansi(s).width();
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Wrap free text (locations, event labels) to a column width.
pub fn wrap_cell(s: &str, width: usize) -> Vec<String> {
    if width == 0 || s.is_empty() {
        return vec![s.to_string()];
    }
    textwrap::wrap(s, Options::new(width))
        .into_iter()
        .map(|c| c.into_owned())
        .collect()
}

/// Minutes as `02h 25m`, or `02:25` when `short`.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
