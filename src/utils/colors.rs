/// ANSI color helper utilities for terminal output.
use crate::models::Category;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

/// Remove ANSI escape sequences.
pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Coloured block in the category background colour.
pub fn swatch(category: Category) -> String {
    let (r, g, b) = category.rgb();
    Colour::Black.on(Colour::RGB(r, g, b)).paint("  ").to_string()
}

/// Text shown over the category background, like a palette card.
pub fn on_category(category: Category, text: &str) -> String {
    let (r, g, b) = category.rgb();
    Colour::Black
        .on(Colour::RGB(r, g, b))
        .paint(format!(" {text} "))
        .to_string()
}

/// Grey placeholder for empty values.
pub fn colorize_optional(value: &str, placeholder: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}{placeholder}{RESET}")
    } else {
        value.to_string()
    }
}
