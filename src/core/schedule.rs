//! The schedule store: sole owner of the timeline rows, header fields and the
//! session log. Every edit goes through one of its update functions, which
//! keep the start-time chain consistent.

use crate::config::Config;
use crate::core::chain::recalc_from;
use crate::core::clock::{self, TimePart};
use crate::core::log::SessionLog;
use crate::errors::{AppError, AppResult};
use crate::models::{DraggedBlock, EventBlock, Header, Row, catalog};
use chrono::NaiveDate;
use std::str::FromStr;

/// Prefix of drop-target ids: `row-<index>`.
pub const ROW_TARGET_PREFIX: &str = "row-";

/// Editable row field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Location,
    Event,
    Duration,
    Time(TimePart),
}

impl Field {
    /// Whether leaving this field commits the row (append or re-chain).
    /// The location box has no such hook.
    pub fn commits_on_blur(&self) -> bool {
        !matches!(self, Field::Location)
    }
}

impl FromStr for Field {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "location" | "loc" => Ok(Field::Location),
            "event" => Ok(Field::Event),
            "duration" | "dur" => Ok(Field::Duration),
            "hour" => Ok(Field::Time(TimePart::Hour)),
            "minute" | "min" => Ok(Field::Time(TimePart::Minute)),
            "period" => Ok(Field::Time(TimePart::Period)),
            other => Err(AppError::InvalidField(format!(
                "'{other}' (expected location, event, duration, hour, minute or period)"
            ))),
        }
    }
}

/// Header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    Date,
    Bride,
    Groom,
    StartHour,
    StartMinute,
    StartPeriod,
}

impl FromStr for HeaderField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(HeaderField::Date),
            "bride" => Ok(HeaderField::Bride),
            "groom" => Ok(HeaderField::Groom),
            "start-hour" => Ok(HeaderField::StartHour),
            "start-minute" => Ok(HeaderField::StartMinute),
            "start-period" => Ok(HeaderField::StartPeriod),
            other => Err(AppError::InvalidField(format!(
                "'{other}' (expected date, bride, groom, start-hour, start-minute or start-period)"
            ))),
        }
    }
}

/// What an update did besides writing the field itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    /// A blank row was added at the end.
    pub appended: bool,
    /// Start times were re-chained after this index.
    pub recalculated_from: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Schedule {
    rows: Vec<Row>,
    header: Header,
    default_duration: i64,
    log: SessionLog,
}

impl Schedule {
    /// New session with a single blank row.
    pub fn new(initial_time: i64, default_duration: i64) -> Self {
        let mut log = SessionLog::default();
        log.record(
            "start",
            "",
            format!(
                "Session started at {} ({} min rows)",
                clock::to_display(initial_time),
                default_duration
            ),
        );

        Self {
            rows: vec![Row::new(initial_time, default_duration)],
            header: Header::default(),
            default_duration,
            log,
        }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let initial = clock::parse_hhmm(&cfg.initial_time)?;
        Ok(Self::new(initial, cfg.default_duration))
    }

    /// Build from existing rows, as they are. An empty list gets the usual
    /// 9:00 AM starting row.
    pub fn with_rows(rows: Vec<Row>, default_duration: i64) -> Self {
        let mut schedule = Self::new(9 * 60, default_duration);
        if !rows.is_empty() {
            schedule.rows = rows;
        }
        schedule
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> AppResult<&Row> {
        self.rows.get(index).ok_or(AppError::InvalidRow(index))
    }

    fn is_tail(&self, index: usize) -> bool {
        index + 1 == self.rows.len()
    }

    fn check_index(&self, index: usize) -> AppResult<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(AppError::InvalidRow(index))
        }
    }

    fn recalc(&mut self, index: usize) -> Option<usize> {
        recalc_from(&mut self.rows, index);
        Some(index)
    }

    fn append_after_tail(&mut self) {
        if let Some(tail) = self.rows.last() {
            let row = tail.blank_after(self.default_duration);
            self.log.record(
                "append",
                &format!("row {}", self.rows.len()),
                format!("Blank row at {}", clock::to_display(row.time)),
            );
            self.rows.push(row);
        }
    }

    /// A field is being typed into. Durations and times re-chain the rows
    /// that follow; nothing is appended.
    pub fn change(&mut self, index: usize, field: Field, value: &str) -> AppResult<Outcome> {
        self.check_index(index)?;

        let recalculated_from = match field {
            Field::Location => {
                self.rows[index].location = value.to_string();
                None
            }
            Field::Event => {
                self.rows[index].event = value.to_string();
                None
            }
            Field::Duration => {
                self.rows[index].duration = clock::parse_int(value)?;
                self.recalc(index)
            }
            Field::Time(part) => {
                self.rows[index].time = clock::apply_part(self.rows[index].time, part, value)?;
                self.recalc(index)
            }
        };

        self.log
            .record("set", &format!("row {index}"), format!("{field:?} = '{value}'"));

        Ok(Outcome {
            appended: false,
            recalculated_from,
        })
    }

    /// Focus left a field of row `index`. The tail row grows a new blank row;
    /// any other row re-chains the ones after it.
    pub fn blur(&mut self, index: usize) -> AppResult<Outcome> {
        self.check_index(index)?;

        if self.is_tail(index) {
            self.append_after_tail();
            return Ok(Outcome {
                appended: true,
                recalculated_from: None,
            });
        }

        let recalculated_from = self.recalc(index);
        self.log.record(
            "recalc",
            &format!("row {index}"),
            "Start times re-chained",
        );
        Ok(Outcome {
            appended: false,
            recalculated_from,
        })
    }

    /// Remove a row and re-chain from the row before it.
    pub fn delete(&mut self, index: usize) -> AppResult<Outcome> {
        self.check_index(index)?;
        if self.rows.len() == 1 {
            return Err(AppError::LastRow);
        }

        let removed = self.rows.remove(index);
        let from = index.saturating_sub(1);
        let recalculated_from = self.recalc(from);

        let what = if removed.event.is_empty() {
            "(no event)".to_string()
        } else {
            removed.event
        };
        self.log
            .record("delete", &format!("row {index}"), format!("Removed '{what}'"));

        Ok(Outcome {
            appended: false,
            recalculated_from,
        })
    }

    /// Handle a completed drag: `dragged_id` is `<label>::<minutes>`,
    /// `target_id` is `row-<index>`. Returns `None` when the target is not a
    /// row of this schedule.
    pub fn drop_block(&mut self, dragged_id: &str, target_id: &str) -> AppResult<Option<Outcome>> {
        let Some(index) = parse_row_target(target_id).filter(|i| *i < self.rows.len()) else {
            return Ok(None);
        };

        let block = DraggedBlock::parse(dragged_id)?;
        Ok(Some(self.assign(index, block.label, block.duration)))
    }

    /// Drop a catalog block onto a row.
    pub fn place(&mut self, block: &EventBlock, index: usize) -> AppResult<Outcome> {
        self.check_index(index)?;
        Ok(self.assign(index, block.label.to_string(), block.duration))
    }

    /// Drop catalog block number `number` (1-based) onto a row.
    pub fn place_number(&mut self, number: usize, index: usize) -> AppResult<Outcome> {
        let block = catalog::by_number(number).ok_or(AppError::UnknownBlock(number))?;
        self.place(block, index)
    }

    fn assign(&mut self, index: usize, label: String, duration: i64) -> Outcome {
        self.log.record(
            "drop",
            &format!("row {index}"),
            format!("'{label}' ({duration} min)"),
        );

        let row = &mut self.rows[index];
        row.event = label;
        row.duration = duration;

        let appended = self.is_tail(index);
        if appended {
            self.append_after_tail();
        }

        Outcome {
            appended,
            recalculated_from: self.recalc(index),
        }
    }

    pub fn set_header(&mut self, field: HeaderField, value: &str) -> AppResult<()> {
        let h = &mut self.header;
        match field {
            HeaderField::Date => h.date = value.to_string(),
            HeaderField::Bride => h.bride = value.to_string(),
            HeaderField::Groom => h.groom = value.to_string(),
            HeaderField::StartHour => h.start_hour = value.to_string(),
            HeaderField::StartMinute => h.start_minute = value.to_string(),
            HeaderField::StartPeriod => h.start_period = value.parse()?,
        }

        self.log
            .record("header", "", format!("{field:?} = '{value}'"));
        Ok(())
    }

    pub fn record(&mut self, operation: &str, target: &str, message: impl Into<String>) {
        self.log.record(operation, target, message);
    }
}

/// `row-<index>` → index.
pub fn parse_row_target(target_id: &str) -> Option<usize> {
    target_id
        .strip_prefix(ROW_TARGET_PREFIX)
        .and_then(|n| n.trim().parse::<usize>().ok())
}

/// Warning for durations that ignore the 5-minute input grid.
pub fn duration_hint(duration: i64) -> Option<String> {
    if duration < 5 {
        Some(format!("Duration {duration} min is below the 5 min minimum"))
    } else if duration % 5 != 0 {
        Some(format!("Duration {duration} min is not a multiple of 5"))
    } else {
        None
    }
}

/// Warning for a header date that is not `MM/DD/YYYY`.
pub fn date_hint(date: &str) -> Option<String> {
    if date.trim().is_empty() || NaiveDate::parse_from_str(date.trim(), "%m/%d/%Y").is_ok() {
        None
    } else {
        Some(format!("Date '{date}' is not in MM/DD/YYYY format"))
    }
}
