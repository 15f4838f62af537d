//! Unified application error type.
//! All modules (core, cli, export, config) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid period: '{0}' (expected AM or PM)")]
    InvalidPeriod(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Invalid event block id: '{0}' (expected <label>::<minutes>)")]
    InvalidBlockId(String),

    // ---------------------------
    // Schedule errors
    // ---------------------------
    #[error("Row {0} does not exist")]
    InvalidRow(usize),

    #[error("Cannot delete the only row of the timeline")]
    LastRow,

    #[error("Event block #{0} does not exist (see `blocks`)")]
    UnknownBlock(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
