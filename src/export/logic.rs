// src/export/logic.rs

use crate::core::schedule::Schedule;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{render_csv, render_json};
use crate::export::notify_export_success;
use crate::export::text::render_text;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Document contents for `format`, without touching the filesystem.
    pub fn render(schedule: &Schedule, format: ExportFormat) -> AppResult<String> {
        match format {
            ExportFormat::Txt => Ok(render_text(schedule.header(), schedule.rows())),
            ExportFormat::Json => render_json(schedule.header(), schedule.rows()),
            ExportFormat::Csv => render_csv(schedule.rows()),
        }
    }

    /// Write the schedule to `path` (UTF-8). An existing file is only
    /// replaced with `force` or after a confirmation read from `input`.
    pub fn export(
        schedule: &Schedule,
        format: ExportFormat,
        path: &Path,
        force: bool,
        input: &mut dyn BufRead,
    ) -> AppResult<()> {
        ensure_writable(path, force, input)?;

        info(format!(
            "Exporting to {}: {}",
            format.label(),
            path.display()
        ));

        let content = Self::render(schedule, format)?;

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            std::fs::create_dir_all(dir)?;
        }

        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;

        notify_export_success(format.label(), path);
        Ok(())
    }
}
