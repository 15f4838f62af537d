// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{TimelineExport, rows_to_export};
use crate::models::{Header, Row};

/// Pretty-printed JSON with the header and the row list.
pub(crate) fn render_json(header: &Header, rows: &[Row]) -> AppResult<String> {
    let doc = TimelineExport {
        header,
        rows: rows_to_export(rows),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// CSV, one record per row (header line included thanks to serde).
pub(crate) fn render_csv(rows: &[Row]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for item in rows_to_export(rows) {
        wtr.serialize(item)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}
