use crate::utils::colors::strip_ansi;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::{DateTime, Local};

/// One entry of the in-memory activity log.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub date: DateTime<Local>,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Activity log of the current session. Dropped with the session.
#[derive(Debug, Default, Clone)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
}

/// ANSI colour for an operation name
fn color_for_operation(op: &str) -> Colour {
    match op {
        "drop" | "append" => Colour::Green,
        "delete" => Colour::Red,
        "set" | "header" => Colour::Yellow,
        "recalc" => Colour::Purple,
        "export" => Colour::Blue,
        "start" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

impl SessionLog {
    pub fn record(&mut self, operation: &str, target: &str, message: impl Into<String>) {
        self.entries.push(LogEntry {
            date: Local::now(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn render(&self, colors: bool) -> String {
        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("Date", 25),
            Column::new("Operation", 20),
            Column::new("Message", 0),
        ]);

        for (i, e) in self.entries.iter().enumerate() {
            // Single column for op+target
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };

            table.add_row(vec![
                (i + 1).to_string(),
                e.date.format("%FT%T%:z").to_string(),
                color_for_operation(&e.operation)
                    .paint(op_target)
                    .to_string(),
                e.message.clone(),
            ]);
        }

        let out = table.render();
        if colors { out } else { strip_ansi(&out) }
    }
}
