use super::category::Category;
use crate::core::clock::MAX_MAGNITUDE;
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Separator between label and duration inside a block id.
pub const ID_SEPARATOR: &str = "::";

/// A predefined photography/videography task from the palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventBlock {
    pub label: &'static str,
    pub duration: i64,
    pub category: Category,
}

impl EventBlock {
    pub const fn new(label: &'static str, duration: i64, category: Category) -> Self {
        Self {
            label,
            duration,
            category,
        }
    }

    /// Composite id reported by the drag source: `<label>::<duration>`.
    pub fn id(&self) -> String {
        format!("{}{}{}", self.label, ID_SEPARATOR, self.duration)
    }
}

/// Decoded form of a dragged block id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraggedBlock {
    pub label: String,
    pub duration: i64,
}

impl DraggedBlock {
    /// Decode `<label>::<minutes>`. The split happens on the last separator so
    /// that the duration is always the trailing component.
    pub fn parse(id: &str) -> AppResult<Self> {
        let (label, minutes) = id
            .rsplit_once(ID_SEPARATOR)
            .ok_or_else(|| AppError::InvalidBlockId(id.to_string()))?;

        let duration = minutes
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|d| (-MAX_MAGNITUDE..=MAX_MAGNITUDE).contains(d))
            .ok_or_else(|| AppError::InvalidBlockId(id.to_string()))?;

        Ok(Self {
            label: label.to_string(),
            duration,
        })
    }
}
