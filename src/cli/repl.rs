//! Grammar of the commands accepted inside a `session`.
//!
//! A line is split into words (double or single quotes group words, e.g.
//! `drop "Ceremony: Average::30" row-0`) and parsed with clap.

use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use regex::Regex;
use std::sync::OnceLock;

#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Show the timeline rows
    Show,

    /// Show the event block palette
    Blocks {
        /// Only one category
        category: Option<String>,
    },

    /// Type into a row field (location, event, duration, hour, minute, period)
    Set {
        row: usize,
        field: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Leave a row: appends after the last row, re-chains otherwise
    Blur { row: usize },

    /// `set` followed by `blur`
    Edit {
        row: usize,
        field: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Drop a block id ("<label>::<minutes>") on a target ("row-<index>")
    Drop { block_id: String, target: String },

    /// Drop palette block number N on a row
    Place { block: usize, row: usize },

    /// Delete a row
    #[command(alias = "del")]
    Delete { row: usize },

    /// Set a header field (date, bride, groom, start-hour, start-minute, start-period)
    Header {
        field: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Export the timeline
    Export {
        #[arg(long, value_enum, default_value = "txt")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the session activity log
    Log,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

fn word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).expect("valid word regex"))
}

/// Split a command line into words. Quotes group words and may produce an
/// empty word (`""`).
pub fn split_words(line: &str) -> Vec<String> {
    word_re()
        .captures_iter(line)
        .filter_map(|c| c.get(1).or_else(|| c.get(2)).or_else(|| c.get(3)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse one line. `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<SessionCommand>, clap::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    SessionLine::try_parse_from(split_words(trimmed)).map(|l| Some(l.command))
}
