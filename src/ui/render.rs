//! Terminal views of the schedule and the block palette.

use crate::core::clock::to_display;
use crate::core::schedule::Schedule;
use crate::models::{Category, EventBlock, catalog};
use crate::utils::colors::{colorize_optional, on_category, strip_ansi, swatch};
use crate::utils::formatting::{bold, mins2readable, pad_left, wrap_cell};
use crate::utils::table::{Column, Table};

const LOCATION_WIDTH: usize = 24;
const EVENT_WIDTH: usize = 44;

/// Rows table with header fields above it.
pub fn schedule_view(schedule: &Schedule, colors: bool) -> String {
    let h = schedule.header();
    let mut out = String::new();

    out.push_str(&bold("Wedding Timeline Builder"));
    out.push('\n');
    out.push_str(&format!(
        "Date: {}   Start Time: {}\n",
        colorize_optional(&h.date, "MM/DD/YYYY"),
        h.start_time()
    ));
    out.push_str(&format!(
        "Bride: {}   Groom: {}\n\n",
        colorize_optional(&h.bride, "-"),
        colorize_optional(&h.groom, "-")
    ));

    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("Location", LOCATION_WIDTH),
        Column::new("Time", 9),
        Column::new("", 2),
        Column::new("Event", EVENT_WIDTH),
        Column::new("Duration", 0),
    ]);

    for (i, row) in schedule.rows().iter().enumerate() {
        let event = if row.event.is_empty() {
            colorize_optional("", "Enter event")
        } else {
            wrap_cell(&row.event, EVENT_WIDTH).join("\n")
        };
        let location = if row.location.is_empty() {
            colorize_optional("", "Enter location")
        } else {
            wrap_cell(&row.location, LOCATION_WIDTH).join("\n")
        };
        let mark = if row.event.is_empty() {
            String::new()
        } else {
            swatch(catalog::category_of(&row.event))
        };

        table.add_row(vec![
            i.to_string(),
            location,
            pad_left(&to_display(row.time).to_string(), 8),
            mark,
            event,
            format!("{} Minutes", row.duration),
        ]);
    }

    out.push_str(&table.render());

    if let (Some(first), Some(last)) = (schedule.rows().first(), schedule.rows().last()) {
        out.push_str(&format!(
            "\n{} rows, {} → {} ({})\n",
            schedule.len(),
            to_display(first.time),
            to_display(last.end()),
            mins2readable(last.end() - first.time, false, false)
        ));
    }

    if colors { out } else { strip_ansi(&out) }
}

/// Palette of event blocks, optionally restricted to one category.
pub fn palette_view(filter: Option<Category>, colors: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("No.", 4),
        Column::new("Event Block", 50),
        Column::new("Duration", 0),
    ]);

    let blocks: Vec<(usize, &EventBlock)> = match filter {
        Some(c) => catalog::in_category(c).collect(),
        None => catalog::CATALOG.iter().enumerate().map(|(i, b)| (i + 1, b)).collect(),
    };

    for (n, block) in blocks {
        table.add_row(vec![
            n.to_string(),
            on_category(block.category, block.label),
            format!("{} min", block.duration),
        ]);
    }

    let mut out = bold("Event Blocks");
    out.push('\n');
    out.push_str(&table.render());
    out.push_str("\nDrag id: \"<label>::<minutes>\", e.g. \"Ceremony: Average::30\"\n");

    if colors { out } else { strip_ansi(&out) }
}
