//! Status lines printed to the terminal (info / success / warning / error).

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

static COLORS: AtomicBool = AtomicBool::new(true);

/// Enable or disable ANSI colours for every following message.
pub fn set_colors(enabled: bool) {
    COLORS.store(enabled, Ordering::Relaxed);
}

pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    if colors_enabled() {
        format!("{color}{BOLD}{icon} {RESET}{msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg));
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    if colors_enabled() {
        println!("{FG_BLUE}{BOLD}====================== {msg}\n{RESET}");
    } else {
        println!("====================== {msg}\n");
    }
}
