// src/export/text.rs

use crate::core::clock::to_display;
use crate::models::{Header, Row};

/// Shown instead of an empty event.
pub const NO_EVENT: &str = "(no event)";

/// Double-spaced plain-text rendering of the timeline.
///
/// Every line is followed by a blank one; the document therefore ends with a
/// single `\n` after the last row line.
pub fn render_text(header: &Header, rows: &[Row]) -> String {
    let mut lines: Vec<String> = Vec::new();

    let mut push = |line: String| {
        lines.push(line);
        lines.push(String::new());
    };

    push(format!("Date: {}", header.date));
    push(format!("Start Time: {}", header.start_time()));
    push(format!("Bride: {}", header.bride));
    push(format!("Groom: {}", header.groom));
    push("Timeline:".to_string());

    for r in rows {
        let location = r.location.trim();
        if !location.is_empty() {
            push(location.to_string());
        }
        push(row_line(r));
    }

    lines.join("\n")
}

/// `H:MM AM | event | N min`
pub fn row_line(r: &Row) -> String {
    let event = if r.event.is_empty() {
        NO_EVENT
    } else {
        r.event.as_str()
    };
    format!("{} | {} | {} min", to_display(r.time), event, r.duration)
}
