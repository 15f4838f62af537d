//! Table rendering utilities for CLI outputs.
//!
//! Cells may contain ANSI colours and newlines: widths are measured on the
//! visible text, and multi-line cells span several output lines.

use super::formatting::pad_right;

pub struct Column {
    pub header: String,
    /// Display width; 0 leaves the column unpadded (use for the last one).
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.push_line(&mut out, &header);

        let total: usize = self.columns.iter().map(|c| c.width.max(c.header.len()) + 1).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let cells: Vec<Vec<&str>> = row.iter().map(|c| c.lines().collect()).collect();
            let height = cells.iter().map(|c| c.len()).max().unwrap_or(0).max(1);

            for line in 0..height {
                let parts: Vec<&str> = (0..self.columns.len())
                    .map(|i| {
                        cells
                            .get(i)
                            .and_then(|c| c.get(line))
                            .copied()
                            .unwrap_or("")
                    })
                    .collect();
                self.push_line(&mut out, &parts);
            }
        }

        out
    }

    fn push_line(&self, out: &mut String, parts: &[&str]) {
        let mut line = String::new();
        for (col, part) in self.columns.iter().zip(parts) {
            if col.width == 0 {
                line.push_str(part);
            } else {
                line.push_str(&pad_right(part, col.width));
            }
            line.push(' ');
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
