// src/export/model.rs

use crate::core::clock::to_display;
use crate::models::{Header, Row, catalog};
use serde::Serialize;

/// Flat row record for JSON / CSV.
#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub index: usize,
    pub time: String,
    pub minutes: i64,
    pub location: String,
    pub event: String,
    pub duration: i64,
    pub category: String,
}

/// Whole document for JSON.
#[derive(Serialize, Clone, Debug)]
pub struct TimelineExport<'a> {
    pub header: &'a Header,
    pub rows: Vec<RowExport>,
}

pub(crate) fn row_to_export(index: usize, r: &Row) -> RowExport {
    RowExport {
        index,
        time: to_display(r.time).to_string(),
        minutes: r.time,
        location: r.location.trim().to_string(),
        event: r.event.clone(),
        duration: r.duration,
        category: if r.event.is_empty() {
            String::new()
        } else {
            catalog::category_of(&r.event).name().to_string()
        },
    }
}

pub(crate) fn rows_to_export(rows: &[Row]) -> Vec<RowExport> {
    rows.iter()
        .enumerate()
        .map(|(i, r)| row_to_export(i, r))
        .collect()
}
